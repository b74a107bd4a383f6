//! Centralized error types for the octile crate.
//!
//! This module defines all error types used throughout the library,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the octile crate.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while loading, querying or writing a map.
#[derive(thiserror::Error, Debug)]
pub enum OctileError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for map parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unsupported map format: expected 'type octile', found '{0}'")]
    UnsupportedFormat(String),

    #[error("Malformed map header: {0}")]
    MalformedHeader(String),

    #[error("Map body truncated: expected {expected} cells, found {found}")]
    TruncatedBody { expected: usize, found: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to map queries.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    #[error("Tile ({x}, {y}) is outside the {width}x{height} map")]
    OutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

/// Result type for octile operations.
pub type OctileResult<T> = Result<T, OctileError>;
