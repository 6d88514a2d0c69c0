use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::Piece;
use crate::types::*;

/// Classification of a side's position, as surfaced after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate. The engine itself keeps accepting moves
    /// either way; stopping play is up to the caller.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// Read-only copy of the board for renderers on the far side of a process
/// or FFI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub side_to_move: Side,
    pub status: GameStatus,
    pub pieces: Vec<Piece>,
}

impl BoardSnapshot {
    pub(crate) fn capture(board: &Board, side_to_move: Side, status: GameStatus) -> Self {
        Self {
            side_to_move,
            status,
            pieces: board.pieces().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
