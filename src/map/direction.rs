use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

/// The four cardinal directions, plus staying in place.
///
/// Discriminants are the stable numeric action codes used by grid search tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up = 0,
    Left = 1,
    Right = 2,
    Down = 3,
    #[default]
    Wait = 9,
}

impl Direction {
    /// Cardinal moves in the order they are reported by [`GridMap::get_moves`](crate::map::grid::GridMap::get_moves).
    pub const MOVES: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Right, Direction::Left];

    /// Returns the opposite direction. `Wait` is its own opposite.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Wait => Direction::Wait,
        }
    }

    /// Returns the grid displacement for this direction (y grows downward).
    pub fn offset(self) -> IVec2 {
        self.into()
    }

    /// Returns the numeric action code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
            Direction::Wait => IVec2::ZERO,
        }
    }
}
