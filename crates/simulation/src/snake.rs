//! Snake body: ordered segments (head first) plus the heading of the last move.

use std::collections::{HashSet, VecDeque};

use crate::cell::{Cell, Direction};

/// Segments are unique and never empty. The `occupied` set mirrors `body`
/// so membership tests stay O(1) as the snake grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
    heading: Direction,
}

impl Snake {
    /// A one-segment snake at `head`.
    #[must_use]
    pub fn new(head: Cell, heading: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            occupied: HashSet::from([head]),
            heading,
        }
    }

    /// Build from explicit segments, head first. Returns `None` for an empty
    /// or self-overlapping body.
    #[must_use]
    pub fn from_segments(segments: &[Cell], heading: Direction) -> Option<Self> {
        let occupied: HashSet<Cell> = segments.iter().copied().collect();
        if segments.is_empty() || occupied.len() != segments.len() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            occupied,
            heading,
        })
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction of the last committed move (or the spawn heading).
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    #[must_use]
    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    #[must_use]
    pub fn peek_next_head(&self, direction: Direction) -> Cell {
        self.head().offset(direction)
    }

    /// Membership against every current segment, tail included.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Prepend `new_head`; drop the tail unless `grow`.
    ///
    /// Callers check collisions first. The tail is released before the head
    /// is recorded so the occupancy set stays in step with `body`.
    pub fn advance(&mut self, new_head: Cell, heading: Direction, grow: bool) {
        if !grow {
            if let Some(old_tail) = self.body.pop_back() {
                self.occupied.remove(&old_tail);
            }
        }
        self.body.push_front(new_head);
        self.occupied.insert(new_head);
        self.heading = heading;
    }
}
