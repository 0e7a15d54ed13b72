//! Session state machine: Idle → Running → Over → Running → …
//!
//! A `GameSession` owns every piece of mutable game state. Input
//! collaborators call [`GameSession::set_heading`] and the start/restart
//! entry points; the display host calls [`GameSession::frame`] once per
//! refresh and paints [`GameSession::render`]. Audio and UI collaborators
//! drain [`GameEvent`]s. Nothing here fails: out-of-phase calls are ignored.

use log::{debug, info, trace};

use crate::cell::{Cell, Direction};
use crate::clock::GameClock;
use crate::config::{ConfigError, GameConfig};
use crate::event::{GameEvent, OverCause};
use crate::food::FoodPlacer;
use crate::render::{self, Frame};
use crate::snake::Snake;
use crate::step::{self, Board, Collision, StepOutcome};
use crate::Grid;

/// Discriminant values are the phase codes the WASM host reads; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    /// Board shown, clock not yet started.
    #[default]
    Idle = 0,
    Running = 1,
    /// Terminal until an explicit start or restart.
    Over = 2,
}

/// Read-only view handed to the drawer and the UI.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub snake: &'a Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub phase: Phase,
    pub cell_px: u32,
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    board: Board,
    /// Heading for the next tick; last writer wins between ticks.
    heading: Direction,
    phase: Phase,
    clock: GameClock,
    placer: FoodPlacer,
    events: Vec<GameEvent>,
    cell_px: u32,
}

impl GameSession {
    /// An Idle session with a freshly reset board.
    ///
    /// # Errors
    /// Returns the config validation failure, if any.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        Self::with_seed(config, seed)
    }

    /// # Errors
    /// Returns the config validation failure, if any.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        let mut placer = FoodPlacer::new(seed);
        let heading = Direction::default();
        let board = Board::spawn(&grid, heading, &mut placer);
        debug!(
            "session created: {}x{} grid, {} ticks/s, seed {seed}",
            grid.width, grid.height, config.tick_rate
        );
        Ok(Self {
            clock: GameClock::new(config.tick_rate, config.catch_up),
            cell_px: config.cell_px,
            config,
            grid,
            board,
            heading,
            phase: Phase::Idle,
            placer,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.board.score
    }

    /// The heading the next tick will use.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.board.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.board.food
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.placer.seed()
    }

    #[must_use]
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Running with the clock stopped.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Running && !self.clock.is_running()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            snake: &self.board.snake,
            food: self.board.food,
            score: self.board.score,
            phase: self.phase,
            cell_px: self.cell_px,
        }
    }

    #[must_use]
    pub fn render(&self) -> Frame {
        render::project(&self.snapshot())
    }

    /// Pixel size of the drawing surface at the current cell size.
    #[must_use]
    pub fn surface_px(&self) -> (u32, u32) {
        self.grid
            .surface_px(self.cell_px)
            .unwrap_or((u32::MAX, u32::MAX))
    }

    /// Rendering scale only; grid logic is unaffected. Zero, and sizes
    /// whose surface would not fit in `u32` pixels, are ignored.
    pub fn set_cell_px(&mut self, cell_px: u32) {
        if cell_px == 0 || self.grid.surface_px(cell_px).is_none() {
            debug!("ignoring cell size {cell_px}");
            return;
        }
        self.cell_px = cell_px;
    }

    /// Back to Idle with a single centred segment, default heading, zero
    /// score and fresh food. The clock is stopped and undrained events of
    /// the previous game are dropped.
    pub fn reset(&mut self) {
        self.clock.stop();
        self.events.clear();
        self.heading = Direction::default();
        self.board = Board::spawn(&self.grid, self.heading, &mut self.placer);
        self.phase = Phase::Idle;
    }

    /// Reset and run, unless already Running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            debug!("start ignored: already running");
            return;
        }
        self.reset();
        self.begin();
    }

    /// Reset and run from any phase, dropping the current clock.
    pub fn restart(&mut self) {
        self.reset();
        self.begin();
    }

    fn begin(&mut self) {
        self.phase = Phase::Running;
        self.clock.start();
        info!("game started");
    }

    pub fn pause(&mut self) {
        if self.phase != Phase::Running || !self.clock.is_running() {
            debug!("pause ignored in {:?}", self.phase);
            return;
        }
        self.clock.stop();
        info!("game paused");
    }

    /// The paused interval does not count towards the next tick.
    pub fn resume(&mut self) {
        if !self.is_paused() {
            debug!("resume ignored in {:?}", self.phase);
            return;
        }
        self.clock.start();
        info!("game resumed");
    }

    /// Queue a heading for the next tick. Ignored outside Running and when
    /// it would reverse the last committed move.
    pub fn set_heading(&mut self, direction: Direction) {
        if self.phase != Phase::Running {
            debug!("heading {direction} ignored in {:?}", self.phase);
            return;
        }
        if direction.is_opposite(self.board.snake.heading()) {
            debug!("heading {direction} ignored: reverses {}", self.board.snake.heading());
            return;
        }
        self.heading = direction;
    }

    /// Run one simulation step now. `None` when no step may run (not
    /// Running, or paused).
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.phase != Phase::Running || !self.clock.is_running() {
            return None;
        }
        let outcome = step::step(
            &mut self.board,
            self.heading,
            &self.grid,
            &mut self.placer,
            self.config.food_reward,
        );
        match outcome {
            StepOutcome::Moved => trace!("head -> {}", self.board.snake.head()),
            StepOutcome::Ate { score } => {
                trace!("ate food at {}, score {score}", self.board.snake.head());
                self.events.push(GameEvent::AteFood { score });
            }
            StepOutcome::Filled { score } => {
                self.events.push(GameEvent::AteFood { score });
                self.finish(OverCause::GridFilled);
            }
            StepOutcome::Collided(Collision::Wall) => self.finish(OverCause::Wall),
            StepOutcome::Collided(Collision::SelfHit) => self.finish(OverCause::SelfCollision),
        }
        Some(outcome)
    }

    fn finish(&mut self, cause: OverCause) {
        self.phase = Phase::Over;
        self.clock.stop();
        self.events.push(GameEvent::GameOver { cause });
        info!("game over ({cause}), score {}", self.board.score);
    }

    /// Drive the clock for one display frame; returns how many ticks ran.
    /// The caller renders afterwards regardless.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let due = self.clock.advance(now_ms);
        let mut ran = 0;
        for _ in 0..due {
            if self.tick().is_none() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Events since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    #[cfg(test)]
    pub(crate) fn load_board(&mut self, board: Board) {
        self.heading = board.snake.heading();
        self.board = board;
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
