//! Terminal front-end rendering.
//!
//! Renders a [`core::BoardSnapshot`] into a character framebuffer and
//! flushes it to the terminal with crossterm. No widgets or layout engine:
//! the board view places every glyph itself.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tile_match_core as core;
pub use tile_match_types as types;

pub use board_view::{BoardView, Overlay, Palette, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_frame_into, TerminalRenderer};
