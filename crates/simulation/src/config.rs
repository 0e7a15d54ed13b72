//! Session configuration, deserializable from a partial JSON object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::CatchUp;
use crate::Grid;

pub const DEFAULT_GRID_WIDTH: usize = 30;
pub const DEFAULT_GRID_HEIGHT: usize = 24;
pub const DEFAULT_TICK_RATE: u32 = 10;
pub const DEFAULT_FOOD_REWARD: u32 = 10;
pub const DEFAULT_CELL_PX: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} needs at least two cells")]
    GridTooSmall { width: usize, height: usize },
    #[error("grid {width}x{height} does not fit in i32 coordinates")]
    GridTooLarge { width: usize, height: usize },
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("{cell_px}px cells make a {width}x{height} grid wider than u32 pixels")]
    SurfaceTooLarge {
        width: usize,
        height: usize,
        cell_px: u32,
    },
    #[error("replay catch-up needs max_ticks >= 1")]
    ZeroCatchUp,
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    pub food_reward: u32,
    pub cell_px: u32,
    pub catch_up: CatchUp,
    /// Fixed seed for food placement; host entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_rate: DEFAULT_TICK_RATE,
            food_reward: DEFAULT_FOOD_REWARD,
            cell_px: DEFAULT_CELL_PX,
            catch_up: CatchUp::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    /// Returns the first JSON or validation failure.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns the first field that cannot drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        let Some(cells) = width.checked_mul(height) else {
            return Err(ConfigError::GridTooLarge { width, height });
        };
        if cells < 2 {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.cell_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if Grid::new(width, height).surface_px(self.cell_px).is_none() {
            return Err(ConfigError::SurfaceTooLarge {
                width,
                height,
                cell_px: self.cell_px,
            });
        }
        if self.catch_up == (CatchUp::Replay { max_ticks: 0 }) {
            return Err(ConfigError::ZeroCatchUp);
        }
        Ok(())
    }
}
