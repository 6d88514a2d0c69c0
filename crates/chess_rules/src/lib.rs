//! Rules engine for standard chess.
//!
//! [`GameEngine`] owns the board and the side to move, validates every move
//! against per-piece geometry and king safety, and answers check, checkmate
//! and stalemate queries. Rendering and input handling live elsewhere; they
//! read the board, ask for legal destinations and commit moves through this
//! API.
//!
//! Castling, en passant and promotion are not part of the rules implemented
//! here.

pub mod board;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod piece;
pub mod setup;
pub mod snapshot;
pub mod types;

pub use board::Board;
pub use engine::*;
pub use error::*;
pub use movegen::{count_legal_moves, has_legal_move, legal_destinations, legal_destinations_into};
pub use piece::Piece;
pub use setup::Setup;
pub use snapshot::*;
pub use types::*;
