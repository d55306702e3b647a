//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management. It has no
//! dependencies on the terminal, the scene math or any I/O, so it can be
//! driven from a render loop, a test, or a benchmark alike.
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board with row/column/diagonal win checks
//! - [`game_state`]: turn order, placement rules, win status, reset
//! - [`snapshot`]: read-only per-frame view for renderers
//! - [`error`]: typed errors for raw index conversion and rejected moves
//!
//! # Win Rule
//!
//! A move at `(row, col)` wins when the row through it, the column through
//! it, or a diagonal is filled with the mover's piece. Both diagonals pass
//! through the centre and are only checked when the centre holds the piece.
//!
//! # Example
//!
//! ```
//! use tictactoe3d_core::{GameState, GameStatus};
//! use tictactoe3d_types::{Piece, Pos};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.place(Pos::new(row, col).unwrap()).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won(Piece::X));
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod snapshot;

pub use tictactoe3d_types as types;

// Re-export commonly used types for convenience
pub use board::{checked_pos, Board};
pub use error::{BoardError, MoveError};
pub use game_state::{GameState, GameStatus, MoveOutcome};
pub use snapshot::GameSnapshot;
