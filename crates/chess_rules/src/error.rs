//! Error types for move commits and setup construction.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Side, Square};

/// Why a commit was refused. A refused commit never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is off the board")]
    OffBoard(Square),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece on {square} belongs to {owner}, but it is {to_move}'s turn")]
    WrongSide {
        square: Square,
        owner: Side,
        to_move: Side,
    },
    #[error("{to} is not a legal destination from {from}")]
    IllegalDestination { from: Square, to: Square },
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("piece placed off the board at {0}")]
    OffBoard(Square),
    #[error("square {0} is occupied twice")]
    Occupied(Square),
    #[error("invalid setup: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read setup {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
