//! Discrete signals for audio and UI collaborators.

use std::fmt;

/// Why a session reached `Phase::Over`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum OverCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell; nowhere left to place food.
    GridFilled,
}

impl fmt::Display for OverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "wall"),
            Self::SelfCollision => write!(f, "self collision"),
            Self::GridFilled => write!(f, "grid filled"),
        }
    }
}

/// Emitted once per occurrence, during the tick that caused it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameEvent {
    AteFood { score: u32 },
    GameOver { cause: OverCause },
}

impl GameEvent {
    /// Wire code for the WASM host: 1 = ate food, 2 = game over.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::AteFood { .. } => 1,
            Self::GameOver { .. } => 2,
        }
    }
}
