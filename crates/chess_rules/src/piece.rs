//! Piece values as stored on the board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, Side, Square};

/// A piece on the board.
///
/// Kind and side never change. `square` mirrors the cell the piece sits in
/// and is rewritten by the engine whenever the piece moves. Two pieces with
/// equal fields are interchangeable; the board, not the piece, is the source
/// of truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Self { kind, side, square }
    }

    /// Single-letter symbol (`K Q R B N P`), independent of side.
    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    /// Copy of this piece relocated to `square`.
    pub fn moved_to(self, square: Square) -> Self {
        Self { square, ..self }
    }

    /// Symbol cased by side: upper case for White, lower case for Black.
    pub fn cased_symbol(&self) -> char {
        match self.side {
            Side::White => self.symbol(),
            Side::Black => self.symbol().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} on {}", self.side, self.kind, self.square)
    }
}
