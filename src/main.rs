//! Terminal tic-tac-toe runner (default binary).
//!
//! Parses the board settings, takes over the terminal and runs the turn loop
//! until a rematch is declined or the player quits.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_tictactoe::config::Cli;
use tui_tictactoe::core::{GameSettings, GameSnapshot};
use tui_tictactoe::input::{handle_key_event, should_quit};
use tui_tictactoe::logging;
use tui_tictactoe::session::Session;
use tui_tictactoe::term::{farewell, FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How the turn loop ended.
enum Exit {
    /// Rematch declined
    Finished,
    /// Quit key pressed
    Quit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Validate before touching the terminal so errors print normally.
    let settings = cli.settings()?;
    logging::init(cli.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, settings, !cli.no_help);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Exit::Finished) = result {
        println!("{}", farewell());
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, settings: GameSettings, show_help: bool) -> Result<Exit> {
    let mut session = Session::new(settings);
    let view = GameView::new().with_help(show_help);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        if session.is_finished() {
            return Ok(Exit::Finished);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into_with_entry(&snap, session.entry().as_str(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Block until the next event; nothing changes between key presses.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit requested");
                    return Ok(Exit::Quit);
                }
                if let Some(action) = handle_key_event(key) {
                    session.handle(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
