use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{DEFAULT_TICK_INTERVAL_MS, FRAME_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use grid_snake::error::AppError;
use grid_snake::field::FieldGeometry;
use grid_snake::game::{EndReason, GameState, GameStatus};
use grid_snake::input::{poll_input, GameInput};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(name = "grid-snake", version, about = "Classic bordered-grid Snake")]
struct Cli {
    /// Seed for the random generator, for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

/// Final session facts reported after the terminal is restored.
struct Summary {
    score: u32,
    end_reason: Option<EndReason>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => {
            report(&summary);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Summary, AppError> {
    let tick_interval = Duration::from_millis(cli.tick_ms.max(MIN_TICK_INTERVAL_MS));
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    let geometry = FieldGeometry::new();

    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    let mut last_tick = Instant::now();
    loop {
        if state.take_render_due() {
            session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, &state, &geometry))?;
        }

        while let Some(input) = poll_input()? {
            if exit_requested(&state, input) {
                return Ok(Summary {
                    score: state.score,
                    end_reason: state.end_reason(),
                });
            }
            state.apply_input(input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(frame_interval);
    }
}

/// Returns true when `input` should terminate the run loop.
///
/// Quit always exits. Once the game has ended any keypress exits as well,
/// the terminal equivalent of the original waiting for one key after the
/// crash message; a resize is not a keypress and only forces a redraw.
fn exit_requested(state: &GameState, input: GameInput) -> bool {
    if input == GameInput::Quit {
        return true;
    }

    state.status == GameStatus::Ended && input != GameInput::Redraw
}

/// Prints the closing score line. A crash is an ordinary game outcome, not
/// a process failure, so the exit code stays zero either way.
fn report(summary: &Summary) {
    match summary.end_reason {
        Some(reason @ (EndReason::WallCrash | EndReason::SelfCrash)) => {
            eprintln!("Crash! The snake {}.", reason.describe());
            println!("Finished with score: {}", summary.score);
        }
        Some(EndReason::BoardFull) => {
            println!("Board full! Finished with score: {}", summary.score);
        }
        None => println!("Finished with score: {}", summary.score),
    }
}
