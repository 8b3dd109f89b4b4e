//! Simulation module - the state machine the runner drives
//!
//! Ties together the board, the RNG, the generation counter, and timing.
//! The runner owns the loop and the cadence decisions live here: call
//! [`Simulation::tick`] every frame with the elapsed milliseconds and the
//! simulation advances a generation whenever the accumulated time crosses
//! the step interval.

use crate::core::{Board, SimpleRng, PATTERNS};
use crate::life::step;
use crate::types::{
    SimAction, MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS, STEP_INTERVAL_DELTA_MS,
    STEP_INTERVAL_MS,
};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    rng: SimpleRng,
    /// Generations elapsed since the last reset.
    generation: u64,
    paused: bool,
    /// Time accumulated toward the next generation.
    step_timer_ms: u32,
    step_interval_ms: u32,
    /// Index into [`PATTERNS`] when the board was last seeded from one.
    pattern_index: Option<usize>,
}

impl Simulation {
    /// Create a running simulation with a randomly seeded board.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero (see [`Board::dead`]).
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::random(width, height, &mut rng);
        Self {
            board,
            rng,
            generation: 0,
            paused: false,
            step_timer_ms: 0,
            step_interval_ms: STEP_INTERVAL_MS,
            pattern_index: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    /// Name of the pattern the board was seeded from, if any.
    pub fn pattern_name(&self) -> Option<&'static str> {
        self.pattern_index.map(|i| PATTERNS[i].name)
    }

    /// Advance wall-clock time by `elapsed_ms`.
    ///
    /// Steps once per full interval crossed; a paused simulation
    /// accumulates nothing.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused {
            return;
        }
        self.step_timer_ms += elapsed_ms;
        while self.step_timer_ms >= self.step_interval_ms {
            self.step_timer_ms -= self.step_interval_ms;
            self.advance();
        }
    }

    /// Advance exactly one generation, pause state notwithstanding.
    pub fn advance(&mut self) {
        self.board = step(&self.board);
        self.generation += 1;
    }

    pub fn apply_action(&mut self, action: SimAction) {
        match action {
            SimAction::TogglePause => self.paused = !self.paused,
            SimAction::StepOnce => self.advance(),
            SimAction::Randomize => {
                self.board = Board::random(self.board.width(), self.board.height(), &mut self.rng);
                self.reset_progress(None);
            }
            SimAction::Clear => {
                self.board.clear();
                self.reset_progress(None);
            }
            SimAction::NextPattern => {
                let next = match self.pattern_index {
                    Some(i) => (i + 1) % PATTERNS.len(),
                    None => 0,
                };
                self.board.clear();
                PATTERNS[next].apply_centered(&mut self.board);
                self.reset_progress(Some(next));
            }
            SimAction::SpeedUp => {
                self.step_interval_ms = self
                    .step_interval_ms
                    .saturating_sub(STEP_INTERVAL_DELTA_MS)
                    .max(MIN_STEP_INTERVAL_MS);
            }
            SimAction::SlowDown => {
                self.step_interval_ms =
                    (self.step_interval_ms + STEP_INTERVAL_DELTA_MS).min(MAX_STEP_INTERVAL_MS);
            }
            SimAction::Restart => {
                self.board = Board::random(self.board.width(), self.board.height(), &mut self.rng);
                self.step_interval_ms = STEP_INTERVAL_MS;
                self.paused = false;
                self.reset_progress(None);
            }
        }
    }

    fn reset_progress(&mut self, pattern_index: Option<usize>) {
        self.generation = 0;
        self.step_timer_ms = 0;
        self.pattern_index = pattern_index;
    }
}
