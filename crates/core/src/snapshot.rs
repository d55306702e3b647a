//! Read-only view of the game handed to renderers once per frame.

use crate::game_state::GameStatus;
use crate::types::{Cell, Piece, Pos, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Row-major cells
    pub cells: [Cell; CELL_COUNT],
    pub turn: Piece,
    pub status: GameStatus,
    /// Pieces to highlight when the game has been won
    pub winning_line: Option<[Pos; 3]>,
    pub move_count: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.index()]
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True if `pos` is part of the highlighted winning line
    pub fn in_winning_line(&self, pos: Pos) -> bool {
        self.winning_line
            .map(|line| line.contains(&pos))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            turn: Piece::X,
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: 0,
            episode_id: 0,
        }
    }
}
