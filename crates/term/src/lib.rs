//! Terminal "game renderer" module.
//!
//! A small software renderer for the 3D board. It avoids widget toolkits and
//! instead ray-casts the scene into a framebuffer of half-block pixels that
//! can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw through the same camera that picking uses
//! - Flush only the cells that changed since the last frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tictactoe3d_core as core;
pub use tictactoe3d_scene as scene;
pub use tictactoe3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{
    piece_color, status_text, GameView, Viewport, CLEAR_COLOR, GRID_COLOR, HOVER_COLOR, O_COLOR,
    WIN_COLOR, X_COLOR,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
