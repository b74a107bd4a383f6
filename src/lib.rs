//! Octile grid map library crate.

pub mod config;
pub mod error;
pub mod logging;
pub mod map;

pub use error::{MapError, OctileError, OctileResult, ParseError};
pub use map::action::Action;
pub use map::direction::Direction;
pub use map::grid::GridMap;
