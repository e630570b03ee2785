//! BoardView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::HashMap;

use crate::core::{BoardSnapshot, Catalog, CellSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Phase, Pos, VariantId};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const ITEM_COLORS: [Rgb; 8] = [
    Rgb::new(230, 80, 80),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 60, 140),
    Rgb::new(160, 100, 220),
    Rgb::new(120, 200, 90),
    Rgb::new(250, 240, 140),
    Rgb::new(255, 165, 0),
    Rgb::new(110, 110, 230),
];

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const HINT_BG: Rgb = Rgb::new(60, 60, 20);
const SELECT_BG: Rgb = Rgb::new(70, 70, 90);

/// Glyph and color per catalog variant
#[derive(Debug, Clone)]
pub struct Palette {
    items: HashMap<VariantId, (char, Rgb)>,
}

impl Palette {
    /// Items are drawn with the first letter of their name, colored in
    /// catalog order.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let items = catalog
            .items()
            .enumerate()
            .map(|(i, def)| {
                let ch = def
                    .name
                    .chars()
                    .next()
                    .map_or('?', |c| c.to_ascii_uppercase());
                (def.id, (ch, ITEM_COLORS[i % ITEM_COLORS.len()]))
            })
            .collect();
        Self { items }
    }

    fn item(&self, variant: VariantId) -> (char, Rgb) {
        self.items
            .get(&variant)
            .copied()
            .unwrap_or(('?', Rgb::new(255, 255, 255)))
    }
}

/// Everything on screen that is not part of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay<'a> {
    pub cursor: Pos,
    pub best: u32,
    pub message: Option<&'a str>,
}

/// Renders the board and a side panel.
pub struct BoardView {
    palette: Palette,
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl BoardView {
    pub fn new(palette: Palette) -> Self {
        // 3 columns per cell keeps cells roughly square.
        Self { palette, cell_w: 3 }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        overlay: Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w + 18) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        let hint = snap.hint.map(|(a, b)| [a, b]);
        for y in 0..snap.height {
            for x in 0..snap.width {
                let pos = Pos::new(x as i32, y as i32);
                let (ch, fg) = match snap.cell(x, y) {
                    CellSnapshot::Empty => ('·', Rgb::new(90, 90, 100)),
                    CellSnapshot::Block => ('#', Rgb::new(150, 150, 150)),
                    CellSnapshot::Item { variant } => self.palette.item(variant),
                };

                let mut style = Style::fg(fg).on(BOARD_BG);
                if snap.selection == Some(pos) {
                    style = style.on(SELECT_BG).bold();
                } else if hint.is_some_and(|h| h.contains(&pos)) {
                    style = style.on(HINT_BG);
                }
                if overlay.cursor == pos {
                    style = style.reversed();
                }

                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16;
                fb.fill(px, py, self.cell_w, 1, ' ', style);
                fb.put(px + self.cell_w / 2, py, ch, style);
            }
        }

        self.draw_panel(fb, snap, overlay, start_x + frame_w + 2, start_y);

        if snap.phase == Phase::Deadlocked {
            let text = "NO MOVES - press r";
            let w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            fb.put_str(x, start_y + frame_h / 2, text, Style::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, overlay: Overlay<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &BoardSnapshot, overlay: Overlay<'_>, x: u16, y: u16) {
        let label = Style::default().bold();
        let value = Style::fg(Rgb::new(200, 200, 200));
        let dim = Style::fg(Rgb::new(120, 120, 120));

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        fb.put_str(x, y + 3, "BEST", label);
        fb.put_str(x, y + 4, &overlay.best.to_string(), value);
        fb.put_str(x, y + 6, snap.phase.as_str(), dim);

        let help = ["arrows  move", "space   select", "h       hint", "r       restart", "q       quit"];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(x, y + 8 + i as u16, line, dim);
        }

        if let Some(msg) = overlay.message {
            let row = fb.height().saturating_sub(1);
            fb.put_str(1, row, msg, value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::fg(Rgb::new(200, 200, 200));
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', style);
        fb.put(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', style);
        fb.put(right, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_layout, TilePool};

    fn snapshot(rows: &[&str]) -> (BoardSnapshot, Catalog) {
        let catalog = Catalog::builtin();
        let mut pool = TilePool::new(32);
        let board = parse_layout(rows, &catalog, &mut pool).unwrap();
        (BoardSnapshot::from_board(&board), catalog)
    }

    fn overlay() -> Overlay<'static> {
        Overlay {
            cursor: Pos::new(0, 0),
            best: 0,
            message: None,
        }
    }

    #[test]
    fn palette_uses_name_initials() {
        let palette = Palette::from_catalog(&Catalog::builtin());
        let apple = Catalog::builtin().active_items(4).unwrap()[0].id;
        assert_eq!(palette.item(apple).0, 'A');
        assert_eq!(palette.item(VariantId(999)).0, '?');
    }

    #[test]
    fn board_glyphs_are_drawn_in_the_frame() {
        let (snap, catalog) = snapshot(&["AB", "#."]);
        let view = BoardView::new(Palette::from_catalog(&catalog));
        let fb = view.render(&snap, overlay(), Viewport::new(40, 12));

        let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains(" A  B ")));
        assert!(text.iter().any(|row| row.contains(" #  · ")));
        assert!(text.iter().any(|row| row.contains("SCORE")));
    }

    #[test]
    fn cursor_cell_is_reversed() {
        let (snap, catalog) = snapshot(&["AB"]);
        let view = BoardView::new(Palette::from_catalog(&catalog));
        let fb = view.render(&snap, overlay(), Viewport::new(40, 12));

        let reversed = (0..fb.height())
            .flat_map(|y| fb.row(y).to_vec())
            .filter(|g| g.style.reverse)
            .count();
        assert_eq!(reversed, 3);
    }

    #[test]
    fn deadlock_banner_is_shown() {
        let (mut snap, catalog) = snapshot(&["ABABAB", "BABABA"]);
        snap.phase = Phase::Deadlocked;
        let view = BoardView::new(Palette::from_catalog(&catalog));
        let fb = view.render(&snap, overlay(), Viewport::new(60, 12));

        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("NO MOVES")));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let (snap, catalog) = snapshot(&["AB", "BA"]);
        let view = BoardView::new(Palette::from_catalog(&catalog));
        let fb = view.render(&snap, overlay(), Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
