use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta a pawn of this side advances by.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Row this side's pawns start on (and may double-step from).
    pub fn pawn_start_row(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Row holding this side's king and minor/major pieces at the start.
    pub fn back_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Display letter, as used by the presentation layer.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Home-row order from column 0 to column 7.
    pub const BACK_ROW: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
}

/// A `(row, col)` board coordinate.
///
/// Any pair of values can be constructed so callers may pass raw input
/// straight through; every engine operation treats off-board squares as
/// "no such square" instead of indexing with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i8, i8)", into = "(i8, i8)")]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Grid index `row * 8 + col`, or `None` off the board.
    pub fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.row as usize) * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    pub(crate) fn from_index(idx: usize) -> Square {
        debug_assert!(idx < 64);
        Square::new((idx / 8) as i8, (idx % 8) as i8)
    }

    pub(crate) fn offset(self, drow: i8, dcol: i8) -> Square {
        Square::new(
            self.row.saturating_add(drow),
            self.col.saturating_add(dcol),
        )
    }

    /// Every on-board square, row-major from (0,0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square::new(row, col)
    }
}

impl From<Square> for (i8, i8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
