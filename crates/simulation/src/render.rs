//! Projection of grid state onto pixel rectangles.
//!
//! The drawer clears and repaints the whole surface every frame, so a
//! [`Frame`] always starts with a full-surface background rectangle.

use crate::cell::Cell;
use crate::session::Snapshot;

/// Fill colours as `0xRRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Paint {
    Background,
    Head,
    Body,
    Food,
}

impl Paint {
    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Self::Background => 0x00_00_00,
            Self::Head => 0x00_9b_00,
            Self::Body => 0x00_ff_00,
            Self::Food => 0xff_00_00,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub paint: Paint,
}

impl Rect {
    fn cell(cell: Cell, cell_px: u32, paint: Paint) -> Self {
        Self {
            x: (cell.x as u32).saturating_mul(cell_px),
            y: (cell.y as u32).saturating_mul(cell_px),
            w: cell_px,
            h: cell_px,
            paint,
        }
    }
}

/// Rectangles in paint order: background, head, body (head to tail), food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width_px: u32,
    pub height_px: u32,
    pub rects: Vec<Rect>,
}

impl Frame {
    /// Flat `[x, y, w, h, rgb]` quintuples for a JS canvas loop.
    #[must_use]
    pub fn to_flat(&self) -> Vec<u32> {
        self.rects
            .iter()
            .flat_map(|r| [r.x, r.y, r.w, r.h, r.paint.rgb()])
            .collect()
    }
}

/// Pure: reads the snapshot, mutates nothing.
#[must_use]
pub fn project(snapshot: &Snapshot<'_>) -> Frame {
    let cell_px = snapshot.cell_px;
    let (width_px, height_px) = snapshot
        .grid
        .surface_px(cell_px)
        .unwrap_or((u32::MAX, u32::MAX));

    let mut rects = Vec::with_capacity(snapshot.snake.len() + 2);
    rects.push(Rect {
        x: 0,
        y: 0,
        w: width_px,
        h: height_px,
        paint: Paint::Background,
    });
    for (i, segment) in snapshot.snake.segments().enumerate() {
        let paint = if i == 0 { Paint::Head } else { Paint::Body };
        rects.push(Rect::cell(segment, cell_px, paint));
    }
    if let Some(food) = snapshot.food {
        rects.push(Rect::cell(food, cell_px, Paint::Food));
    }

    Frame {
        width_px,
        height_px,
        rects,
    }
}
