//! The game engine: authoritative board, turn order and rule queries.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{MoveError, SetupError};
use crate::movegen::{has_legal_move, legal_destinations};
use crate::piece::Piece;
use crate::setup::Setup;
use crate::snapshot::{BoardSnapshot, GameStatus};
use crate::types::*;

/// A committed move, as reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommittedMove {
    /// The moving piece, already carrying its new square.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Piece removed from `to`, if any. It is gone for good.
    pub captured: Option<Piece>,
}

/// Owns the board and the side to move.
///
/// Queries take `&self` and never change observable state. The only
/// mutations are [`GameEngine::commit_move`] (and its `try_` form) and
/// [`GameEngine::reset`]. Reaching checkmate or stalemate does not stop the
/// engine from accepting further moves; callers decide when play is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    side_to_move: Side,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Side::White,
        }
    }

    pub fn from_setup(setup: &Setup) -> Result<Self, SetupError> {
        let board = setup.to_board()?;
        debug!(
            pieces = setup.pieces.len(),
            side_to_move = %setup.side_to_move,
            "engine built from setup"
        );
        Ok(Self {
            board,
            side_to_move: setup.side_to_move,
        })
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.side_to_move = Side::White;
        debug!("engine reset");
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of `sq`; `None` when empty or off the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Squares the piece on `from` may move to, whichever side owns it.
    ///
    /// Empty for an empty or off-board `from`.
    pub fn legal_destinations(&self, from: Square) -> BTreeSet<Square> {
        legal_destinations(&self.board, from)
    }

    /// Validate and play `from -> to` for the side to move.
    pub fn try_commit_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<CommittedMove, MoveError> {
        let piece = match self.check_move(from, to) {
            Ok(p) => p,
            Err(err) => {
                trace!(%from, %to, reason = %err, "move rejected");
                return Err(err);
            }
        };

        let captured = self.board.relocate(from, to);
        self.side_to_move = self.side_to_move.other();

        debug!(
            %from,
            %to,
            kind = ?piece.kind,
            captured = ?captured.map(|c| c.kind),
            next = %self.side_to_move,
            "move committed"
        );

        Ok(CommittedMove {
            piece: piece.moved_to(to),
            from,
            to,
            captured,
        })
    }

    /// Boolean form of [`GameEngine::try_commit_move`]. `false` leaves the
    /// engine exactly as it was.
    pub fn commit_move(&mut self, from: Square, to: Square) -> bool {
        self.try_commit_move(from, to).is_ok()
    }

    fn check_move(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        for sq in [from, to] {
            if !sq.is_on_board() {
                return Err(MoveError::OffBoard(sq));
            }
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if piece.side != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                owner: piece.side,
                to_move: self.side_to_move,
            });
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }
        Ok(piece)
    }

    /// King of `side` attacked by raw geometry. A side with no king is never
    /// in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        self.board.in_check(side)
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !has_legal_move(&self.board, side)
    }

    pub fn is_stalemate(&self, side: Side) -> bool {
        !self.is_in_check(side) && !has_legal_move(&self.board, side)
    }

    /// Position of `side` in a single pass: check first, then mobility.
    pub fn status_of(&self, side: Side) -> GameStatus {
        let in_check = self.is_in_check(side);
        let can_move = has_legal_move(&self.board, side);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (true, true) => GameStatus::Check,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Status of the side to move, i.e. what to announce after a commit.
    pub fn status(&self) -> GameStatus {
        self.status_of(self.side_to_move)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, self.side_to_move, self.status())
    }

    /// Current arrangement as a [`Setup`], e.g. to save a puzzle.
    pub fn to_setup(&self) -> Setup {
        Setup {
            side_to_move: self.side_to_move,
            pieces: self.board.pieces().collect(),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
