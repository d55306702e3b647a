//! Error types for board access and move processing.

use thiserror::Error;

use crate::types::Pos;

/// Errors raised when converting raw data into board values.
///
/// Board operations themselves take a [`Pos`] and cannot fail; these errors
/// only appear at the boundary where untyped input enters the game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside `0..3`.
    #[error("invalid board index: row {row}, col {col} (expected 0..=2)")]
    InvalidIndex { row: i64, col: i64 },

    /// Malformed text notation.
    #[error("invalid board notation: {0}")]
    Parse(String),
}

/// Reasons a placement is rejected by [`GameState::place`](crate::GameState::place).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("tile {0} is already occupied")]
    Occupied(Pos),

    #[error("the game is over; reset to play again")]
    GameOver,
}
