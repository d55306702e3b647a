//! Game state module - owns the board, the turn and the game status
//!
//! Turn processing lives here instead of in free-standing globals: the main
//! loop owns one `GameState` and passes it by reference to input handling and
//! rendering.
//!
//! # Lifecycle
//!
//! ```text
//! InProgress --place (completes a line)--> Won(piece)
//! any        --reset-->                    InProgress (X to move)
//! ```
//!
//! A full board without a winner stays `InProgress`; every further placement
//! is rejected as occupied until the board is reset.

use tracing::{debug, info};

use crate::error::MoveError;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Piece, Pos};
use crate::Board;

/// Whether the game can still be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Piece),
}

/// Result of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub pos: Pos,
    pub piece: Piece,
    /// The placement completed a line for `piece`
    pub won: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Piece,
    status: GameStatus,
    winning_line: Option<[Pos; 3]>,
    /// Pieces placed since the last reset.
    move_count: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
}

impl GameState {
    /// Create a new game: empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Piece::X,
            status: GameStatus::InProgress,
            winning_line: None,
            move_count: 0,
            episode_id: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece that will be placed by the next move
    pub fn turn(&self) -> Piece {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    pub fn winner(&self) -> Option<Piece> {
        match self.status {
            GameStatus::Won(piece) => Some(piece),
            GameStatus::InProgress => None,
        }
    }

    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        self.winning_line
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Place the current player's piece at `pos`
    ///
    /// Empty check, write and win check happen under one `&mut self` borrow,
    /// so the sequence cannot interleave with another caller.
    pub fn place(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let piece = self.turn;
        self.board.set(pos, Some(piece));
        self.move_count += 1;
        debug!(%pos, piece = piece.as_str(), move_count = self.move_count, "piece placed");

        let won = self.board.check_win(pos, piece);
        if won {
            self.status = GameStatus::Won(piece);
            self.winning_line = self.board.winning_line(pos, piece);
            info!(
                winner = piece.as_str(),
                move_count = self.move_count,
                board = %self.board,
                "game won"
            );
        }

        self.turn = piece.opponent();
        Ok(MoveOutcome { pos, piece, won })
    }

    /// Clear the board and start a new episode with X to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Piece::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.move_count = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode_id = self.episode_id, "game reset");
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place(pos) => match self.place(pos) {
                Ok(_) => true,
                Err(err) => {
                    debug!(%pos, %err, "placement rejected");
                    false
                }
            },
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Write a read-only view of the game into `out`
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cells = *self.board.cells();
        out.turn = self.turn;
        out.status = self.status;
        out.winning_line = self.winning_line;
        out.move_count = self.move_count;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
