//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the game logic, the scene/picking math, input mapping and rendering alike.
//!
//! # Board
//!
//! The board is a fixed 3x3 grid addressed by `(row, col)`, both in `0..3`.
//! Row 0 is the top row, column 0 the left column. Cells are stored row-major,
//! so the flat index of `(row, col)` is `row * 3 + col`.
//!
//! A [`Pos`] can only be built from in-range coordinates, which makes an
//! out-of-range board access unrepresentable.
//!
//! # Scene Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 1.5 | Distance between neighbouring tile centres |
//! | `TILE_HALF_EXTENTS` | (0.5, 0.5, 0.105) | Half size of a tile's pick box |
//! | `CAMERA_DISTANCE` | 4.0 | Camera distance from the board plane |
//! | `DEFAULT_FOV_DEG` | 60 | Vertical field of view |
//! | `NEAR_PLANE` / `FAR_PLANE` | 0.1 / 100 | Clip planes |
//! | `PICK_RAY_LENGTH` | 1000 | Length of the mouse pick segment |
//!
//! # Examples
//!
//! ```
//! use tictactoe3d_types::{GameAction, Piece, Pos};
//!
//! let center = Pos::new(1, 1).unwrap();
//! assert_eq!(center, Pos::CENTER);
//! assert_eq!(center.index(), 4);
//! assert!(Pos::new(3, 0).is_none());
//!
//! assert_eq!(Piece::X.opponent(), Piece::O);
//! assert_eq!(Piece::from_str("o"), Some(Piece::O));
//!
//! let action = GameAction::Place(center);
//! assert_eq!(action.as_str(), "place");
//! ```

/// Board side length (3 rows, 3 columns)
pub const BOARD_SIZE: u8 = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Distance between the centres of neighbouring tiles (world units)
pub const TILE_SIZE: f32 = 1.5;

/// Half extents of a tile's pick box: 1x1 face, thin along z
pub const TILE_HALF_EXTENTS: [f32; 3] = [0.5, 0.5, 0.105];

/// The camera sits on +z, this far from the board plane, looking down -z
pub const CAMERA_DISTANCE: f32 = 4.0;

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_DEG: f32 = 60.0;

/// Near clipping plane distance (world units)
pub const NEAR_PLANE: f32 = 0.1;

/// Far clipping plane distance (world units)
pub const FAR_PLANE: f32 = 100.0;

/// Length of the segment tested when picking a tile with the mouse
pub const PICK_RAY_LENGTH: f32 = 1000.0;

/// The two piece kinds
///
/// X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// The piece that moves after this one
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Parse piece from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe3d_types::Piece;
    ///
    /// assert_eq!(Piece::from_str("x"), Some(Piece::X));
    /// assert_eq!(Piece::from_str("O"), Some(Piece::O));
    /// assert_eq!(Piece::from_str("."), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Piece::X),
            "o" => Some(Piece::O),
            _ => None,
        }
    }

    /// Convert to uppercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Piece::X => "X",
            Piece::O => "O",
        }
    }

    /// Single-character glyph used by the text notation
    pub fn glyph(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }
}

/// Cell on the board (None = empty, Some = holds a piece)
pub type Cell = Option<Piece>;

/// A board coordinate with `row` and `col` both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    pub const CENTER: Pos = Pos { row: 1, col: 1 };

    /// All nine positions in row-major order
    pub const ALL: [Pos; CELL_COUNT] = [
        Pos { row: 0, col: 0 },
        Pos { row: 0, col: 1 },
        Pos { row: 0, col: 2 },
        Pos { row: 1, col: 0 },
        Pos { row: 1, col: 1 },
        Pos { row: 1, col: 2 },
        Pos { row: 2, col: 0 },
        Pos { row: 2, col: 1 },
        Pos { row: 2, col: 2 },
    ];

    /// Build a position, returning None when either coordinate is out of range
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Build a position from its row-major flat index (0-8)
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major flat index (0-8)
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + (self.col as usize)
    }

    /// True for (0,0), (1,1) and (2,2)
    pub const fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True for (0,2), (1,1) and (2,0)
    pub const fn on_anti_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current player's piece at the given tile
    Place(Pos),
    /// Clear the board and hand the first move back to X
    Reset,
}

impl GameAction {
    /// Convert to string (for logging)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Place(_) => "place",
            GameAction::Reset => "reset",
        }
    }
}
