//! Terminal falling-block runner (default binary).
//!
//! Owns the frame loop: drain input, advance gravity, render, pace to the
//! frame rate. Game rules live in `core`; drawing lives in `term`.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use argh::FromArgs;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use tui_blockfall::clock::FrameClock;
use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::input::{drain_events, FrameEvents, InputEvent};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Falling-block puzzle game for the terminal.
#[derive(FromArgs, Debug)]
struct Args {
    /// seed for the piece sequence (random when omitted)
    #[argh(option)]
    seed: Option<u32>,

    /// write logs to this file (logging is off otherwise)
    #[argh(option)]
    log_file: Option<PathBuf>,

    /// maximum log level: error, warn, info, debug or trace
    #[argh(option, default = "Level::DEBUG")]
    log_level: Level,

    /// terminal columns per board cell (1 to 8)
    #[argh(option, default = "2")]
    cell_width: u16,
}

/// How a session ended.
enum Outcome {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting session");

    let mut game = GameState::with_seed(seed);
    let view = GameView::new(args.cell_width, 1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &view);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    info!(
        score = game.score(),
        lines = game.lines(),
        pieces = game.pieces_locked(),
        "session ended"
    );
    match outcome {
        Outcome::GameOver => println!("Game over! Final score: {}", game.score()),
        Outcome::Quit => println!("Final score: {}", game.score()),
    }
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    // The terminal belongs to the game; logs only ever go to a file.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(args.log_level)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, view: &GameView) -> Result<Outcome> {
    let mut clock = FrameClock::new();
    let mut events = FrameEvents::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();

    loop {
        if drain_events(&mut events)? {
            // Resized: the next frame is a full redraw.
            viewport = current_viewport();
            term.invalidate();
        }
        for ev in events.drain(..) {
            match ev {
                InputEvent::Quit => return Ok(Outcome::Quit),
                InputEvent::Action(action) => {
                    game.apply_action(action);
                }
            }
        }

        game.tick(clock.lap_ms());

        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        if game.game_over() {
            wait_for_key()?;
            return Ok(Outcome::GameOver);
        }

        // Sleep until the next frame, waking early for input.
        event::poll(clock.until_next_frame())?;
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Keep the final frame on screen until any key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
