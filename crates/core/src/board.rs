//! Board module - manages the 3x3 game grid
//!
//! The board is a 3x3 grid where each cell is empty or holds an X or an O.
//! Uses a flat row-major array (`row * 3 + col`), zero-allocation.
//! Coordinates: (row, col) with row 0 at the top and col 0 on the left.
//!
//! The board only stores pieces and answers win queries. It does not enforce
//! turn order or refuse to overwrite a cell; [`GameState`](crate::GameState)
//! does that.

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::types::{Cell, Piece, Pos, BOARD_SIZE, CELL_COUNT};

/// The game board - 3 columns x 3 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * 3 + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    #[inline(always)]
    fn at(&self, row: u8, col: u8) -> Cell {
        self.cells[(row as usize) * (BOARD_SIZE as usize) + (col as usize)]
    }

    /// Get cell at position
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.index()]
    }

    /// Set cell at position
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// One row, left to right; `None` when `row` is off the board
    pub fn row(&self, row: u8) -> Option<[Cell; BOARD_SIZE as usize]> {
        (row < BOARD_SIZE).then(|| [self.at(row, 0), self.at(row, 1), self.at(row, 2)])
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> ArrayVec<Pos, CELL_COUNT> {
        Pos::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Check if every cell of `row` holds `piece`
    ///
    /// Returns false for an out-of-range row.
    pub fn check_row(&self, row: u8, piece: Piece) -> bool {
        if row >= BOARD_SIZE {
            return false;
        }
        let p = Some(piece);
        self.at(row, 0) == p && self.at(row, 1) == p && self.at(row, 2) == p
    }

    /// Check if every cell of `col` holds `piece`
    ///
    /// Returns false for an out-of-range column.
    pub fn check_col(&self, col: u8, piece: Piece) -> bool {
        if col >= BOARD_SIZE {
            return false;
        }
        let p = Some(piece);
        self.at(0, col) == p && self.at(1, col) == p && self.at(2, col) == p
    }

    /// Check both diagonals, gated on the centre cell
    ///
    /// Corners alone never count: with the centre not holding `piece` this is
    /// always false.
    pub fn check_diagonals(&self, piece: Piece) -> bool {
        let p = Some(piece);
        self.at(1, 1) == p
            && ((self.at(0, 0) == p && self.at(2, 2) == p)
                || (self.at(0, 2) == p && self.at(2, 0) == p))
    }

    /// Does the board hold a winning line for `piece` through `pos`?
    ///
    /// The row and column are the ones through `pos`; the diagonal term is
    /// independent of `pos`. This is a pure query: write the piece with
    /// [`set`](Self::set) first to test a prospective move.
    pub fn check_win(&self, pos: Pos, piece: Piece) -> bool {
        self.check_row(pos.row(), piece)
            || self.check_col(pos.col(), piece)
            || self.check_diagonals(piece)
    }

    /// The line that makes [`check_win`](Self::check_win) true, if any
    ///
    /// Lines are tried in the same order as the win check: row, column, main
    /// diagonal, anti-diagonal.
    pub fn winning_line(&self, pos: Pos, piece: Piece) -> Option<[Pos; 3]> {
        let line = |a: (u8, u8), b: (u8, u8), c: (u8, u8)| -> Option<[Pos; 3]> {
            Some([
                Pos::new(a.0, a.1)?,
                Pos::new(b.0, b.1)?,
                Pos::new(c.0, c.1)?,
            ])
        };

        let (row, col) = (pos.row(), pos.col());
        if self.check_row(row, piece) {
            return line((row, 0), (row, 1), (row, 2));
        }
        if self.check_col(col, piece) {
            return line((0, col), (1, col), (2, col));
        }
        if !self.check_diagonals(piece) {
            return None;
        }

        let p = Some(piece);
        if self.at(0, 0) == p && self.at(2, 2) == p {
            line((0, 0), (1, 1), (2, 2))
        } else {
            line((0, 2), (1, 1), (2, 0))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert raw integers into a [`Pos`]
///
/// This is where untyped coordinates (collider user indices, parsed input)
/// enter the game.
pub fn checked_pos(row: i64, col: i64) -> Result<Pos, BoardError> {
    let invalid = || BoardError::InvalidIndex { row, col };
    let r = u8::try_from(row).map_err(|_| invalid())?;
    let c = u8::try_from(col).map_err(|_| invalid())?;
    Pos::new(r, c).ok_or_else(invalid)
}

/// Text notation: three rows of `X`, `O` or `.`, separated by `/`
///
/// ```
/// use tictactoe3d_core::Board;
///
/// let board: Board = "XO./.X./..O".parse().unwrap();
/// assert_eq!(board.to_string(), "XO./.X./..O");
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                f.write_str("/")?;
            }
            for col in 0..BOARD_SIZE {
                let ch = self.at(row, col).map(Piece::glyph).unwrap_or('.');
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: ArrayVec<&str, 4> = s
            .trim()
            .split('/')
            .take(4)
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::Parse(format!(
                "expected 3 rows separated by '/', got {}",
                s.trim()
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let text = text.trim();
            if text.chars().count() != BOARD_SIZE as usize {
                return Err(BoardError::Parse(format!(
                    "row {row} must have 3 cells, got {text:?}"
                )));
            }
            for (col, ch) in text.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    'x' | 'X' => Some(Piece::X),
                    'o' | 'O' => Some(Piece::O),
                    other => {
                        return Err(BoardError::Parse(format!(
                            "unexpected cell {other:?} at row {row}"
                        )))
                    }
                };
                board.cells[row * BOARD_SIZE as usize + col] = cell;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Pos {
        Pos::new(row, col).unwrap()
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(pos(0, 0), Some(Piece::X));
        board.set(pos(2, 1), Some(Piece::O));

        assert_eq!(board.get(pos(0, 0)), Some(Piece::X));
        assert_eq!(board.get(pos(2, 1)), Some(Piece::O));

        assert_eq!(board.cells[0], Some(Piece::X));
        assert_eq!(board.cells[2 * 3 + 1], Some(Piece::O));
    }

    #[test]
    fn test_check_row_out_of_range_is_false() {
        let board: Board = "XXX/XXX/XXX".parse().unwrap();
        assert!(!board.check_row(3, Piece::X));
        assert!(!board.check_col(7, Piece::X));
    }

    #[test]
    fn test_center_gate_blocks_corner_only_diagonals() {
        let board: Board = "X.X/.O./X.X".parse().unwrap();
        assert!(!board.check_diagonals(Piece::X));
        for p in Pos::ALL {
            assert!(board.winning_line(p, Piece::X).is_none());
        }
    }

    #[test]
    fn test_winning_line_prefers_row_then_column() {
        // Row 0 and column 0 both complete through (0,0).
        let board: Board = "XXX/X../X..".parse().unwrap();
        assert_eq!(
            board.winning_line(pos(0, 0), Piece::X),
            Some([pos(0, 0), pos(0, 1), pos(0, 2)])
        );
        assert_eq!(
            board.winning_line(pos(2, 0), Piece::X),
            Some([pos(0, 0), pos(1, 0), pos(2, 0)])
        );
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!("XO./.X.".parse::<Board>().is_err());
        assert!("XO./.X./..O/...".parse::<Board>().is_err());
        assert!("XO./.X./..".parse::<Board>().is_err());
        assert!("XO./.Z./...".parse::<Board>().is_err());
    }

    #[test]
    fn test_checked_pos_bounds() {
        assert_eq!(checked_pos(2, 0), Ok(pos(2, 0)));
        assert_eq!(
            checked_pos(-1, 0),
            Err(BoardError::InvalidIndex { row: -1, col: 0 })
        );
        assert_eq!(
            checked_pos(0, 3),
            Err(BoardError::InvalidIndex { row: 0, col: 3 })
        );
    }
}
