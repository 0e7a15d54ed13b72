//! One discrete simulation tick.
//!
//! Every collision check runs before anything is mutated, so a tick either
//! commits completely (move, optional growth, optional food respawn) or
//! aborts with the board untouched.

use crate::cell::{Cell, Direction};
use crate::food::FoodPlacer;
use crate::snake::Snake;
use crate::Grid;

/// Mutable per-game state owned by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid.
    pub food: Option<Cell>,
    pub score: u32,
}

impl Board {
    /// Fresh board: one segment at the grid centre, food placed, score zero.
    pub fn spawn(grid: &Grid, heading: Direction, placer: &mut FoodPlacer) -> Self {
        let snake = Snake::new(grid.center(), heading);
        let food = placer.place(snake.occupied(), grid);
        Self {
            snake,
            food,
            score: 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Collision {
    Wall,
    SelfHit,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StepOutcome {
    Moved,
    /// Food eaten and respawned; carries the new score.
    Ate { score: u32 },
    /// Food eaten and the snake now fills the grid.
    Filled { score: u32 },
    Collided(Collision),
}

impl StepOutcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Filled { .. } | Self::Collided(_))
    }
}

/// Advance `board` one cell along `heading`.
///
/// `heading` is already validated against reversal. The self-collision test
/// runs against the pre-move body, so the tail cell about to be vacated
/// still counts as occupied.
pub fn step(
    board: &mut Board,
    heading: Direction,
    grid: &Grid,
    placer: &mut FoodPlacer,
    reward: u32,
) -> StepOutcome {
    let new_head = board.snake.peek_next_head(heading);

    if !grid.in_bounds(new_head) {
        return StepOutcome::Collided(Collision::Wall);
    }
    if board.snake.occupies(new_head) {
        return StepOutcome::Collided(Collision::SelfHit);
    }

    if board.food != Some(new_head) {
        board.snake.advance(new_head, heading, false);
        return StepOutcome::Moved;
    }

    board.snake.advance(new_head, heading, true);
    board.score = board.score.saturating_add(reward);
    board.food = placer.place(board.snake.occupied(), grid);
    match board.food {
        Some(_) => StepOutcome::Ate { score: board.score },
        None => StepOutcome::Filled { score: board.score },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(segments: &[Cell], heading: Direction, food: Option<Cell>) -> Board {
        Board {
            snake: Snake::from_segments(segments, heading).unwrap(),
            food,
            score: 0,
        }
    }

    #[test]
    fn spawn_centres_snake_and_places_food() {
        let grid = Grid::new(30, 24);
        let mut placer = FoodPlacer::new(5);
        let b = Board::spawn(&grid, Direction::Right, &mut placer);
        assert_eq!(b.snake.head(), Cell::new(15, 12));
        assert_eq!(b.snake.len(), 1);
        assert_eq!(b.score, 0);
        let food = b.food.unwrap();
        assert!(grid.in_bounds(food));
        assert_ne!(food, b.snake.head());
    }

    #[test]
    fn eating_grows_scores_and_respawns() {
        let grid = Grid::new(5, 5);
        let mut placer = FoodPlacer::new(42);
        let mut b = board(&[Cell::new(2, 2)], Direction::Right, Some(Cell::new(3, 2)));

        let outcome = step(&mut b, Direction::Right, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Ate { score: 10 });
        let segs: Vec<Cell> = b.snake.segments().collect();
        assert_eq!(segs, vec![Cell::new(3, 2), Cell::new(2, 2)]);
        assert_eq!(b.score, 10);
        let food = b.food.unwrap();
        assert!(food != Cell::new(3, 2) && food != Cell::new(2, 2));
    }

    #[test]
    fn wall_collision_leaves_board_untouched() {
        let grid = Grid::new(5, 5);
        let mut placer = FoodPlacer::new(1);
        let mut b = board(&[Cell::new(4, 2)], Direction::Right, Some(Cell::new(0, 0)));
        let before = b.clone();

        let outcome = step(&mut b, Direction::Right, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Collided(Collision::Wall));
        assert!(outcome.is_terminal());
        assert_eq!(b, before);
    }

    #[test]
    fn neck_collision_is_self_hit() {
        let grid = Grid::new(5, 5);
        let mut placer = FoodPlacer::new(1);
        let mut b = board(&[Cell::new(2, 2), Cell::new(2, 3)], Direction::Up, None);
        let before = b.clone();

        let outcome = step(&mut b, Direction::Down, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Collided(Collision::SelfHit));
        assert_eq!(b, before);
    }

    #[test]
    fn vacating_tail_still_counts_as_occupied() {
        // Head at (0,0) facing the tail at (0,1) across a 2x2 loop.
        let grid = Grid::new(4, 4);
        let mut placer = FoodPlacer::new(1);
        let segs = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)];
        let mut b = board(&segs, Direction::Left, Some(Cell::new(3, 3)));

        let outcome = step(&mut b, Direction::Down, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Collided(Collision::SelfHit));
    }

    #[test]
    fn eating_last_free_cell_fills_grid() {
        let grid = Grid::new(2, 1);
        let mut placer = FoodPlacer::new(3);
        let mut b = board(&[Cell::new(0, 0)], Direction::Right, Some(Cell::new(1, 0)));

        let outcome = step(&mut b, Direction::Right, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Filled { score: 10 });
        assert!(outcome.is_terminal());
        assert_eq!(b.food, None);
        assert_eq!(b.snake.len(), 2);
    }

    #[test]
    fn plain_move_drops_tail() {
        let grid = Grid::new(5, 5);
        let mut placer = FoodPlacer::new(1);
        let mut b = board(&[Cell::new(1, 1), Cell::new(0, 1)], Direction::Right, Some(Cell::new(4, 4)));

        let outcome = step(&mut b, Direction::Down, &grid, &mut placer, 10);

        assert_eq!(outcome, StepOutcome::Moved);
        let segs: Vec<Cell> = b.snake.segments().collect();
        assert_eq!(segs, vec![Cell::new(1, 2), Cell::new(1, 1)]);
        assert_eq!(b.snake.heading(), Direction::Down);
        assert_eq!(b.score, 0);
    }

    proptest! {
        #[test]
        fn prop_eating_adds_exactly_one_segment_and_reward(
            x in 1i32..9,
            y in 0i32..10,
            reward in 1u32..100,
            seed in any::<u64>(),
        ) {
            let grid = Grid::new(10, 10);
            let head = Cell::new(x, y);
            let food = Cell::new(x - 1, y);

            let mut eating = board(&[head], Direction::Left, Some(food));
            let mut plain = board(&[head], Direction::Left, Some(Cell::new(x, (y + 5) % 10)));
            let mut placer = FoodPlacer::new(seed);

            step(&mut eating, Direction::Left, &grid, &mut placer, reward);
            step(&mut plain, Direction::Left, &grid, &mut placer, reward);

            prop_assert_eq!(eating.score, reward);
            prop_assert_eq!(plain.score, 0);
            prop_assert_eq!(eating.snake.len(), plain.snake.len() + 1);
            let new_food = eating.food.unwrap();
            prop_assert!(!eating.snake.occupies(new_food));
        }
    }
}
