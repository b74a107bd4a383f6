//! A single applicable move on a grid and its cost.

use crate::map::direction::Direction;

/// Cost of a single cardinal step.
pub const UNIT_COST: u32 = 1;

/// One move from a tile, as reported by [`GridMap::get_moves`](crate::map::grid::GridMap::get_moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub direction: Direction,
    pub cost: u32,
}

impl Action {
    pub const fn new(direction: Direction, cost: u32) -> Self {
        Self { direction, cost }
    }

    /// A unit-cost step in the given direction.
    pub const fn unit(direction: Direction) -> Self {
        Self::new(direction, UNIT_COST)
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::unit(Direction::Wait)
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Self::unit(direction)
    }
}
