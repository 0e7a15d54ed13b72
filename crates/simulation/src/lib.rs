//! Snake game simulation core.
//!
//! Fixed-timestep updates on a discrete grid, collision detection, food
//! placement and the projection of grid state onto pixel rectangles. Input
//! devices, audio playback and page layout live in the host; they talk to
//! the core through [`session::GameSession`] (or the [`wasm::Game`] facade).

pub mod cell;
pub mod clock;
pub mod config;
pub mod event;
pub mod food;
pub mod render;
pub mod session;
pub mod snake;
pub mod step;
pub mod wasm;


use cell::Cell;

pub use config::{ConfigError, GameConfig};
pub use event::{GameEvent, OverCause};
pub use session::{GameSession, Phase, Snapshot};

/// Fixed logical grid, independent of display size. Pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && (cell.x as usize) < self.width
            && cell.y >= 0
            && (cell.y as usize) < self.height
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Spawn point: integer halves of each dimension.
    #[must_use]
    pub const fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Pixel size of the whole surface at `cell_px`, or `None` if it does
    /// not fit in `u32`.
    #[must_use]
    pub fn surface_px(&self, cell_px: u32) -> Option<(u32, u32)> {
        let width = u32::try_from(self.width).ok()?.checked_mul(cell_px)?;
        let height = u32::try_from(self.height).ok()?.checked_mul(cell_px)?;
        Some((width, height))
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }
}
