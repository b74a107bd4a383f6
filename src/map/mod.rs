//! This module defines the grid map and provides functions for loading, querying and writing it.

pub mod action;
pub mod direction;
pub mod grid;
pub mod parser;
