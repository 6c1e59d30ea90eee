//! Terminal tic-tac-toe runner (default binary).
//!
//! Blocking event loop: draw the current render model, wait for a key, turn it
//! into a game action, apply it, repeat. Rejected actions change nothing and
//! are only logged.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit, InputHandler};
use tui_tictactoe::logging::init_logging;
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tictactoe::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.game_view());

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, view: GameView) -> Result<()> {
    let mut game = GameState::new();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let model = game.render_model();
        input.sync(&model);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&model, &input.cursor(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(intent) = handle_key_event(key) else {
                    continue;
                };
                if let Some(action) = input.handle_intent(intent, &model) {
                    if game.apply_action(action).is_ok() {
                        debug!(%action, status = %game.status(), "applied");
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
