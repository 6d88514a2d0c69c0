use std::collections::BTreeSet;

use crate::{board::Board, types::*};

/// Every square the piece on `from` may legally move to.
///
/// Clones the board once and runs the king-safety trials on the copy, so
/// `board` itself is never touched.
pub fn legal_destinations(board: &Board, from: Square) -> BTreeSet<Square> {
    let mut scratch = *board;
    let mut out = Vec::with_capacity(32);
    legal_destinations_into(&mut scratch, from, &mut out);
    out.into_iter().collect()
}

/// Legal destinations of the piece on `from`, written into a reusable buffer.
///
/// `board` is used as scratch space for trial moves and is restored before
/// this returns.
pub fn legal_destinations_into(board: &mut Board, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    out.extend(Square::all().filter(|&to| board.is_pseudo_legal(from, to)));

    let mover = piece.side;
    // Drop destinations that leave the mover's king attacked.
    out.retain(|&to| {
        let trial = board.simulate(from, to);
        !trial.in_check(mover)
    });
}

/// True if any piece of `side` has at least one legal destination.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    let mut scratch = *board;
    let mut buf = Vec::with_capacity(32);
    board.pieces_of(side).any(|p| {
        legal_destinations_into(&mut scratch, p.square, &mut buf);
        !buf.is_empty()
    })
}

/// Total number of legal destinations across all pieces of `side`.
pub fn count_legal_moves(board: &Board, side: Side) -> usize {
    let mut scratch = *board;
    let mut buf = Vec::with_capacity(32);
    let mut total = 0;
    for piece in board.pieces_of(side) {
        legal_destinations_into(&mut scratch, piece.square, &mut buf);
        total += buf.len();
    }
    total
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
