//! Declarative starting arrangements.
//!
//! A [`Setup`] lists the pieces to place and the side to move. It is the
//! configuration surface of the engine: tests and puzzles build custom
//! positions from it, and it round-trips through TOML:
//!
//! ```toml
//! side_to_move = "black"
//!
//! [[pieces]]
//! kind = "king"
//! side = "white"
//! square = [0, 4]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SetupError;
use crate::piece::Piece;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    #[serde(default = "default_side")]
    pub side_to_move: Side,
    #[serde(default)]
    pub pieces: Vec<Piece>,
}

fn default_side() -> Side {
    Side::White
}

impl Default for Setup {
    fn default() -> Self {
        Self::empty(Side::White)
    }
}

impl Setup {
    /// No pieces at all, `side_to_move` to play.
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            side_to_move,
            pieces: Vec::new(),
        }
    }

    /// The classic 32-piece start, White to move.
    pub fn standard() -> Self {
        Self {
            side_to_move: Side::White,
            pieces: Board::standard().pieces().collect(),
        }
    }

    /// Builder-style helper for hand-written positions.
    pub fn with(mut self, kind: PieceKind, side: Side, row: i8, col: i8) -> Self {
        self.pieces.push(Piece::new(kind, side, Square::new(row, col)));
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the board, rejecting off-board pieces and doubled squares.
    ///
    /// Nothing else is checked: a setup without kings, or with several, is
    /// accepted as given.
    pub fn to_board(&self) -> Result<Board, SetupError> {
        let mut board = Board::empty();
        for &piece in &self.pieces {
            if !piece.square.is_on_board() {
                return Err(SetupError::OffBoard(piece.square));
            }
            if board.piece_at(piece.square).is_some() {
                return Err(SetupError::Occupied(piece.square));
            }
            board.put(piece);
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod setup_tests;
