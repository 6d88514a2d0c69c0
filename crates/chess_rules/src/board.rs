use std::fmt;
use std::ops::Deref;

use crate::piece::Piece;
use crate::types::*;

/// The 8x8 grid, row-major (`row * 8 + col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    pub fn standard() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..BOARD_SIZE {
            for side in Side::BOTH {
                b.put(Piece::new(
                    PieceKind::Pawn,
                    side,
                    Square::new(side.pawn_start_row(), col),
                ));
            }
        }
        // Back rows
        for (col, &kind) in PieceKind::BACK_ROW.iter().enumerate() {
            for side in Side::BOTH {
                b.put(Piece::new(kind, side, Square::new(side.back_row(), col as i8)));
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.cells[i])
    }

    /// Place `piece` on its own square, replacing any occupant. Off-board
    /// pieces are ignored.
    pub(crate) fn put(&mut self, piece: Piece) {
        if let Some(i) = piece.square.index() {
            self.cells[i] = Some(piece);
        }
    }

    /// Move the piece on `from` to `to`, destroying whatever stood on `to`.
    /// Returns the captured piece. Both squares must be on the board.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let (Some(fi), Some(ti)) = (from.index(), to.index()) else {
            return None;
        };
        let moving = self.cells[fi].take()?;
        self.cells[ti].replace(moving.moved_to(to))
    }

    /// Play `from -> to` on this board until the returned guard is dropped.
    ///
    /// The guard restores both cells on drop, so the board is back to its
    /// prior contents on every exit path, unwinding included.
    pub(crate) fn simulate(&mut self, from: Square, to: Square) -> Simulation<'_> {
        let saved_from = self.piece_at(from);
        let saved_to = self.piece_at(to);
        self.relocate(from, to);
        Simulation {
            board: self,
            from,
            to,
            saved_from,
            saved_to,
        }
    }

    /// All pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.side == side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces_of(side).count()
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// True if every square strictly between `from` and `to` is empty.
    ///
    /// Walks the unit step given by the sign of each delta. Squares off the
    /// board, or not sharing a row, column or diagonal, have no path and
    /// yield `false`.
    pub fn path_clear(&self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let drow = to.row - from.row;
        let dcol = to.col - from.col;
        if drow != 0 && dcol != 0 && drow.abs() != dcol.abs() {
            return false;
        }
        let step_row = drow.signum();
        let step_col = dcol.signum();

        let mut cur = from.offset(step_row, step_col);
        while cur != to {
            if self.piece_at(cur).is_some() {
                return false;
            }
            cur = cur.offset(step_row, step_col);
        }
        true
    }

    /// Movement geometry and occupancy, ignoring king safety.
    ///
    /// Both squares must be on the board, `from` must hold a piece and `to`
    /// must not hold a piece of the same side.
    pub fn is_pseudo_legal(&self, from: Square, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let target = self.piece_at(to);
        if let Some(t) = target
            && t.side == piece.side
        {
            return false;
        }

        let drow = to.row - from.row;
        let dcol = to.col - from.col;

        match piece.kind {
            PieceKind::Pawn => self.pawn_reaches(piece.side, from, to, target.is_some()),
            PieceKind::Rook => (drow == 0 || dcol == 0) && self.path_clear(from, to),
            PieceKind::Bishop => drow.abs() == dcol.abs() && self.path_clear(from, to),
            PieceKind::Queen => {
                (drow == 0 || dcol == 0 || drow.abs() == dcol.abs()) && self.path_clear(from, to)
            }
            PieceKind::Knight => matches!((drow.abs(), dcol.abs()), (1, 2) | (2, 1)),
            PieceKind::King => drow.abs() <= 1 && dcol.abs() <= 1,
        }
    }

    fn pawn_reaches(&self, side: Side, from: Square, to: Square, occupied: bool) -> bool {
        let dir = side.pawn_direction();
        let drow = to.row - from.row;
        let dcol = to.col - from.col;

        if dcol == 0 && !occupied {
            if drow == dir {
                return true;
            }
            if from.row == side.pawn_start_row() && drow == 2 * dir {
                return self.piece_at(from.offset(dir, 0)).is_none();
            }
            return false;
        }

        // Diagonal steps only ever capture; the caller already ruled out
        // same-side targets.
        dcol.abs() == 1 && drow == dir && occupied
    }

    /// Whether any piece of `by` could move onto `target` by geometry and
    /// path clearance alone.
    ///
    /// Pawns only count diagonally onto an occupied `target`, which is the
    /// case for the king squares this is asked about.
    pub fn is_square_attacked(&self, target: Square, by: Side) -> bool {
        self.pieces_of(by)
            .any(|p| self.is_pseudo_legal(p.square, target))
    }

    pub fn in_check(&self, side: Side) -> bool {
        match self.king_square(side) {
            Some(ksq) => self.is_square_attacked(ksq, side.other()),
            None => false,
        }
    }
}

/// Scoped trial move created by [`Board::simulate`].
pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    saved_from: Option<Piece>,
    saved_to: Option<Piece>,
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some(i) = self.from.index() {
            self.board.cells[i] = self.saved_from;
        }
        if let Some(i) = self.to.index() {
            self.board.cells[i] = self.saved_to;
        }
    }
}

impl fmt::Display for Board {
    /// Row 7 at the top, upper case for White, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                let c = match self.piece_at(Square::new(row, col)) {
                    Some(p) => p.cased_symbol(),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
