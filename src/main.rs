//! Terminal tile match runner (default binary).
//!
//! Draws the board with the framebuffer renderer, moves a cursor with the
//! keyboard and feeds clicks to the orchestrator. Animations complete
//! instantly; the orchestrator runs on a current-thread tokio runtime.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tile_match::catalog_file::catalog_from_env;
use tile_match::core::{BoardSnapshot, Catalog, GameConfig};
use tile_match::engine::{
    BoardEvent, Collaborators, InstantAnimator, MoveOrchestrator, MoveOutcome, ScoreBoard,
    SilentAudio,
};
use tile_match::input::{handle_key_event, should_quit};
use tile_match::score_file::{ScoreFile, ScoreRecord};
use tile_match::term::{BoardView, FrameBuffer, Overlay, Palette, TerminalRenderer, Viewport};
use tile_match::types::{BoardAction, Phase, Pos};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid TILE_MATCH_* configuration")?;
    let catalog = catalog_from_env()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &runtime, config, catalog);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to the file named by `TILE_MATCH_LOG`; without it nothing is
/// logged, so the raw-mode screen is never written over.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("TILE_MATCH_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).context("creating log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    runtime: &Runtime,
    config: GameConfig,
    catalog: Catalog,
) -> Result<()> {
    let score_file = ScoreFile::from_env();
    let mut record = score_file.load()?;
    let score = ScoreBoard::new(record.score);

    let view = BoardView::new(Palette::from_catalog(&catalog));
    let collab = Collaborators::new(InstantAnimator, SilentAudio, score.clone());
    let mut game = MoveOrchestrator::new(config, catalog, collab)?;
    let mut events = game.subscribe_events();
    info!(score = record.score, best = record.best, "session started");

    let mut cursor = Pos::new(0, 0);
    let mut hint: Option<(Pos, Pos)> = None;
    let mut message = String::new();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        game.snapshot_into(&mut snap);
        snap.score = score.value();
        snap.hint = hint;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let overlay = Overlay {
            cursor,
            best: record.best.max(snap.score),
            message: (!message.is_empty()).then_some(message.as_str()),
        };
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            break;
        }
        let Some(action) = handle_key_event(key) else {
            continue;
        };

        if let Some((dx, dy)) = action.cursor_delta() {
            let board = game.board();
            let max_x = board.width() as i32 - 1;
            let max_y = board.height() as i32 - 1;
            cursor = Pos::new((cursor.x + dx).clamp(0, max_x), (cursor.y + dy).clamp(0, max_y));
            continue;
        }

        message.clear();
        match action {
            BoardAction::Select => {
                hint = None;
                match runtime.block_on(game.click(cursor)) {
                    Ok(MoveOutcome::Reverted) => message.push_str("No match"),
                    Ok(_) => {}
                    Err(err) if game.phase() == Phase::Deadlocked => {
                        warn!(%err, "board deadlocked");
                        message = err.to_string();
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            BoardAction::Hint => {
                hint = game.hint().map(|m| (m.from, m.to));
                if hint.is_none() {
                    message.push_str("No moves");
                }
            }
            BoardAction::Restart => {
                hint = None;
                match runtime.block_on(game.restart()) {
                    Ok(()) => {
                        score.set(0);
                        message.push_str("New board");
                    }
                    Err(err) if game.phase() == Phase::Deadlocked => {
                        warn!(%err, "restart failed");
                        message = err.to_string();
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            _ => {}
        }

        describe_events(&mut events, &mut message);
        if record.record(score.value()) {
            persist(&score_file, &record);
        }
    }

    game.teardown();
    persist(&score_file, &record);
    Ok(())
}

/// Summarize the events of the last action into the message line
fn describe_events(events: &mut UnboundedReceiver<BoardEvent>, message: &mut String) {
    let mut passes = 0;
    let mut points = 0;
    let mut shuffled = false;
    while let Ok(event) = events.try_recv() {
        match event {
            BoardEvent::CascadePass { pass, score_delta, .. } => {
                passes = pass;
                points += score_delta;
            }
            BoardEvent::ShuffleStarted { .. } => shuffled = true,
            _ => {}
        }
    }

    if passes > 1 {
        *message = format!("Cascade x{passes}! +{points}");
    } else if passes == 1 {
        *message = format!("+{points}");
    }
    if shuffled {
        message.push_str(" (shuffled)");
    }
}

fn persist(file: &ScoreFile, record: &ScoreRecord) {
    if let Err(err) = file.save(record) {
        warn!(%err, "could not save score");
    }
}
