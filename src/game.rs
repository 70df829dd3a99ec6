use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::{Apple, BoardFull};
use crate::field::GridPoint;
use crate::input::{Direction, GameInput};
use crate::snake::{MoveOutcome, Snake};

/// High-level controller state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    /// Terminal; no input or tick changes the state afterwards.
    Ended,
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCrash,
    SelfCrash,
    /// The snake covers the whole board. As good as winning gets.
    BoardFull,
}

impl EndReason {
    /// Short human description for the exit report.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::WallCrash => "hit the wall",
            Self::SelfCrash => "ran into itself",
            Self::BoardFull => "filled the board",
        }
    }
}

/// Complete mutable state for one game session.
///
/// Input handling only records intent; all simulation happens in
/// [`Self::tick`] so a session is deterministic for a given seed and input
/// schedule.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    end_reason: Option<EndReason>,
    pending_heading: Direction,
    render_due: bool,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(GridPoint { x: 0, y: 0 });
        let apple = Apple::spawn(&mut rng, &snake)
            .expect("a fresh board always has free cells for the first apple");

        Self {
            snake,
            apple,
            score: 0,
            status: GameStatus::Running,
            tick_count: 0,
            end_reason: None,
            pending_heading: Direction::Right,
            render_due: true,
            rng,
        }
    }

    /// Records one external input event without touching the simulation.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(d) => self.pending_heading = d,
            GameInput::PauseToggle => {
                self.status = match self.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    GameStatus::Ended => GameStatus::Ended,
                };
                self.render_due = true;
            }
            GameInput::Redraw => self.render_due = true,
            GameInput::Quit => {}
        }
    }

    /// Advances the simulation by one tick. No-op unless running.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.render_due = true;

        self.snake.set_heading(self.pending_heading);
        match self.snake.advance() {
            MoveOutcome::WallCrash => {
                self.end(EndReason::WallCrash);
                return;
            }
            MoveOutcome::SelfCrash => {
                self.end(EndReason::SelfCrash);
                return;
            }
            MoveOutcome::Ok => {}
        }

        if self.snake.head_location() == self.apple.location() {
            self.score += 1;
            self.snake.grow();

            if let Err(BoardFull) = self.apple.respawn(&mut self.rng, &self.snake) {
                self.end(EndReason::BoardFull);
            }
        }
    }

    /// Returns and clears the render-on-demand flag.
    pub fn take_render_due(&mut self) -> bool {
        std::mem::take(&mut self.render_due)
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    fn end(&mut self, reason: EndReason) {
        self.status = GameStatus::Ended;
        self.end_reason = Some(reason);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
