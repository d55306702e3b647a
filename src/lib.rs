//! 3D tic-tac-toe (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `tictactoe3d::{types,core,scene,input,term}` and adds
//! the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tictactoe3d_core as core;
pub use tictactoe3d_input as input;
pub use tictactoe3d_scene as scene;
pub use tictactoe3d_term as term;
pub use tictactoe3d_types as types;

pub use config::GameConfig;
