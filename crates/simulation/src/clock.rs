//! Fixed-rate tick scheduling, decoupled from the render rate.
//!
//! The host calls [`GameClock::advance`] once per display frame with a
//! monotonic timestamp in milliseconds (`requestAnimationFrame` time) and
//! runs as many simulation steps as it returns. Rendering happens every
//! frame whether or not a tick was due.

use serde::{Deserialize, Serialize};

/// What to do when a frame arrives more than one interval late.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CatchUp {
    /// At most one tick per frame; the baseline jumps to the frame time.
    /// A slow display slows the game down instead of fast-forwarding it.
    #[default]
    Collapse,
    /// Run up to `max_ticks` ticks for a late frame. Anything beyond that
    /// is dropped and the baseline jumps to the frame time.
    Replay { max_ticks: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    interval_ms: f64,
    policy: CatchUp,
    running: bool,
    /// Time of the last tick, or of the first frame after (re)starting.
    last_tick_ms: Option<f64>,
}

impl GameClock {
    /// A stopped clock ticking `tick_rate` times per second once started.
    #[must_use]
    pub fn new(tick_rate: u32, policy: CatchUp) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(tick_rate.max(1)),
            policy,
            running: false,
            last_tick_ms: None,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or restart) with a fresh baseline taken from the next frame.
    pub fn start(&mut self) {
        self.running = true;
        self.last_tick_ms = None;
    }

    /// No tick is reported after this until `start` is called again.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick_ms = None;
    }

    /// Number of ticks due at `now_ms`. Non-finite timestamps are ignored.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if !self.running || !now_ms.is_finite() {
            return 0;
        }
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return 0;
        };
        let elapsed = now_ms - last;
        if elapsed < self.interval_ms {
            return 0;
        }
        match self.policy {
            CatchUp::Collapse => {
                self.last_tick_ms = Some(now_ms);
                1
            }
            CatchUp::Replay { max_ticks } => {
                let due = (elapsed / self.interval_ms).floor();
                if due > f64::from(max_ticks) {
                    self.last_tick_ms = Some(now_ms);
                    max_ticks
                } else {
                    let due = due as u32;
                    self.last_tick_ms = Some(last + f64::from(due) * self.interval_ms);
                    due
                }
            }
        }
    }
}
