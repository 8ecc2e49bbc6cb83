//! Centralized error types for the simulation core.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    /// The requested player start cell is a wall. Starting there would
    /// pin the player in place for the whole session.
    #[error("Player start ({row}, {col}) is inside a wall")]
    BlockedPlayerStart { row: usize, col: usize },
}

/// Construction-time defects in a maze layout.
///
/// These are configuration errors: a layout that produces one must not
/// start a session.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Unknown tile code {code} at ({row}, {col})")]
    UnknownTileCode { code: u8, row: usize, col: usize },

    #[error("Tunnel row {row} has no partner on the opposite side")]
    UnpairedTunnelRow { row: usize },
}

/// Runtime maze query errors.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A grid query outside the maze bounds. Callers are expected to
    /// clamp coordinates before querying; seeing this is a logic bug.
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
