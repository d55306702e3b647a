//! 3D tic-tac-toe runner (default binary).
//!
//! Renders the board through a perspective camera into the terminal using
//! half-block pixels. Click a tile to place the current piece.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use tictactoe3d::core::GameState;
use tictactoe3d::input::{handle_key_event, should_quit, PointerEvent, PointerTracker};
use tictactoe3d::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tictactoe3d::{logging, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;
    info!(fov_deg = config.fov_deg, frame_ms = config.frame_ms, "starting tictactoe3d");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(%err, "failed to restore terminal");
    }
    match &result {
        Ok(()) => info!("quit"),
        Err(err) => warn!(%err, "game loop failed"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game_state = GameState::new();
    let mut view = GameView::new(config.fov_deg);
    let mut pointer = PointerTracker::new();

    let frame = Duration::from_millis(config.frame_ms);
    let mut snap = game_state.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hover = pointer
            .cursor()
            .and_then(|(column, row)| view.pick_cell(viewport, column, row));

        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, hover, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(frame)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game_state.apply_action(action);
                }
            }
            Event::Mouse(mouse) => {
                let Some(PointerEvent::Click { column, row }) = pointer.handle_mouse_event(mouse)
                else {
                    continue;
                };
                let Some(pos) = view.pick_cell(viewport, column, row) else {
                    debug!(column, row, "click missed the board");
                    continue;
                };
                match game_state.place(pos) {
                    Ok(outcome) => debug!(
                        %pos,
                        piece = outcome.piece.as_str(),
                        won = outcome.won,
                        "tile picked"
                    ),
                    Err(err) => debug!(%pos, %err, "placement rejected"),
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                term.invalidate();
                pointer.clear();
            }
            _ => {}
        }
    }
}
