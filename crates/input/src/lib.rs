//! Terminal input module (game-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and tracks the mouse so the main
//! loop can pick tiles and highlight the one under the cursor.

pub mod map;
pub mod pointer;

pub use tictactoe3d_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{PointerEvent, PointerTracker};
