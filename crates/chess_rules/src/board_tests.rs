use super::*;

fn board_with(pieces: &[(PieceKind, Side, i8, i8)]) -> Board {
    let mut b = Board::empty();
    for &(kind, side, row, col) in pieces {
        b.put(Piece::new(kind, side, Square::new(row, col)));
    }
    b
}

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_standard_layout() {
    let b = Board::standard();
    assert_eq!(b.count(Side::White), 16);
    assert_eq!(b.count(Side::Black), 16);
    assert_eq!(b.king_square(Side::White), Some(s(0, 4)));
    assert_eq!(b.king_square(Side::Black), Some(s(7, 4)));

    let queen = b.piece_at(s(0, 3)).unwrap();
    assert_eq!((queen.kind, queen.side), (PieceKind::Queen, Side::White));
    let pawn = b.piece_at(s(6, 0)).unwrap();
    assert_eq!((pawn.kind, pawn.side), (PieceKind::Pawn, Side::Black));

    // Every piece records the cell it sits in.
    for sq in Square::all() {
        if let Some(p) = b.piece_at(sq) {
            assert_eq!(p.square, sq);
        }
    }
}

#[test]
fn test_piece_at_off_board() {
    let b = Board::standard();
    assert_eq!(b.piece_at(s(-1, 0)), None);
    assert_eq!(b.piece_at(s(0, 8)), None);
}

#[test]
fn test_path_clear() {
    let b = Board::standard();
    assert!(!b.path_clear(s(0, 0), s(0, 7)));
    assert!(b.path_clear(s(0, 0), s(0, 1)));
    assert!(!b.path_clear(s(0, 3), s(3, 3)));
    assert!(b.path_clear(s(2, 0), s(5, 3)));
}

#[test]
fn test_rook_blocked_by_own_pawn() {
    let b = Board::standard();
    assert!(!b.is_pseudo_legal(s(0, 0), s(1, 0)));
    assert!(!b.is_pseudo_legal(s(0, 0), s(2, 0)));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let b = Board::standard();
    assert!(b.is_pseudo_legal(s(0, 1), s(2, 2)));
    assert!(b.is_pseudo_legal(s(0, 1), s(2, 0)));
    assert!(!b.is_pseudo_legal(s(0, 1), s(1, 3)));
}

#[test]
fn test_pawn_pushes() {
    let b = Board::standard();
    assert!(b.is_pseudo_legal(s(1, 4), s(2, 4)));
    assert!(b.is_pseudo_legal(s(1, 4), s(3, 4)));
    assert!(!b.is_pseudo_legal(s(1, 4), s(4, 4)));
    // No quiet diagonal steps
    assert!(!b.is_pseudo_legal(s(1, 4), s(2, 5)));
    // No backwards steps
    assert!(!b.is_pseudo_legal(s(1, 4), s(0, 4)));

    assert!(b.is_pseudo_legal(s(6, 4), s(5, 4)));
    assert!(b.is_pseudo_legal(s(6, 4), s(4, 4)));
}

#[test]
fn test_pawn_double_step_needs_clear_path() {
    let b = board_with(&[
        (PieceKind::Pawn, Side::White, 1, 4),
        (PieceKind::Knight, Side::Black, 2, 4),
    ]);
    assert!(!b.is_pseudo_legal(s(1, 4), s(2, 4)));
    assert!(!b.is_pseudo_legal(s(1, 4), s(3, 4)));

    let b = board_with(&[
        (PieceKind::Pawn, Side::White, 1, 4),
        (PieceKind::Knight, Side::Black, 3, 4),
    ]);
    assert!(b.is_pseudo_legal(s(1, 4), s(2, 4)));
    assert!(!b.is_pseudo_legal(s(1, 4), s(3, 4)));
}

#[test]
fn test_pawn_double_step_only_from_start_row() {
    let b = board_with(&[(PieceKind::Pawn, Side::Black, 5, 3)]);
    assert!(b.is_pseudo_legal(s(5, 3), s(4, 3)));
    assert!(!b.is_pseudo_legal(s(5, 3), s(3, 3)));
    assert!(!b.is_pseudo_legal(s(5, 3), s(6, 3)));
}

#[test]
fn test_pawn_captures_diagonally() {
    let b = board_with(&[
        (PieceKind::Pawn, Side::White, 3, 3),
        (PieceKind::Pawn, Side::Black, 4, 4),
        (PieceKind::Pawn, Side::Black, 4, 3),
    ]);
    assert!(b.is_pseudo_legal(s(3, 3), s(4, 4)));
    assert!(b.is_pseudo_legal(s(4, 4), s(3, 3)));
    // Straight ahead is blocked, even by an enemy piece.
    assert!(!b.is_pseudo_legal(s(3, 3), s(4, 3)));
    assert!(!b.is_pseudo_legal(s(3, 3), s(4, 2)));
}

#[test]
fn test_sliders_and_king_geometry() {
    let b = board_with(&[
        (PieceKind::Queen, Side::White, 3, 3),
        (PieceKind::Bishop, Side::White, 0, 0),
        (PieceKind::King, Side::Black, 7, 7),
    ]);
    assert!(b.is_pseudo_legal(s(3, 3), s(7, 7)));
    assert!(b.is_pseudo_legal(s(3, 3), s(3, 0)));
    assert!(!b.is_pseudo_legal(s(3, 3), s(5, 4)));
    // Bishop path runs through the queen.
    assert!(b.is_pseudo_legal(s(0, 0), s(2, 2)));
    assert!(!b.is_pseudo_legal(s(0, 0), s(4, 4)));
    assert!(b.is_pseudo_legal(s(7, 7), s(6, 6)));
    assert!(!b.is_pseudo_legal(s(7, 7), s(5, 7)));
}

#[test]
fn test_off_board_destinations_rejected() {
    let b = Board::standard();
    assert!(!b.is_pseudo_legal(s(0, 1), s(-1, 3)));
    assert!(!b.is_pseudo_legal(s(8, 0), s(7, 0)));
}

#[test]
fn test_in_check_from_rook() {
    let b = board_with(&[
        (PieceKind::King, Side::White, 0, 4),
        (PieceKind::Rook, Side::Black, 7, 4),
    ]);
    assert!(b.in_check(Side::White));
    // No black king on the board: never in check.
    assert!(!b.in_check(Side::Black));

    let blocked = board_with(&[
        (PieceKind::King, Side::White, 0, 4),
        (PieceKind::Pawn, Side::White, 1, 4),
        (PieceKind::Rook, Side::Black, 7, 4),
    ]);
    assert!(!blocked.in_check(Side::White));
}

#[test]
fn test_simulation_restores_board() {
    let mut b = Board::standard();
    {
        let trial = b.simulate(s(1, 4), s(3, 4));
        assert_eq!(trial.piece_at(s(1, 4)), None);
        let moved = trial.piece_at(s(3, 4)).unwrap();
        assert_eq!(moved.square, s(3, 4));
    }
    assert_eq!(b, Board::standard());
}

#[test]
fn test_simulation_restores_captures_on_unwind() {
    let mut b = board_with(&[
        (PieceKind::Rook, Side::White, 0, 0),
        (PieceKind::Knight, Side::Black, 5, 0),
    ]);
    let before = b;

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let trial = b.simulate(s(0, 0), s(5, 0));
        assert_eq!(trial.count(Side::Black), 0);
        panic!("trial aborted");
    }));

    assert!(result.is_err());
    assert_eq!(b, before);
}

#[test]
fn test_relocate_returns_capture() {
    let mut b = board_with(&[
        (PieceKind::Rook, Side::White, 0, 0),
        (PieceKind::Knight, Side::Black, 5, 0),
    ]);
    let captured = b.relocate(s(0, 0), s(5, 0)).unwrap();
    assert_eq!(captured.kind, PieceKind::Knight);
    assert_eq!(b.piece_at(s(5, 0)).unwrap().square, s(5, 0));
    assert_eq!(b.piece_at(s(0, 0)), None);
}

#[test]
fn test_display_standard() {
    let text = Board::standard().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "7  r n b q k b n r");
    assert_eq!(lines[1], "6  p p p p p p p p");
    assert_eq!(lines[7], "0  R N B Q K B N R");
    assert_eq!(lines[8], "   0 1 2 3 4 5 6 7");
}

#[test]
fn test_path_clear_unaligned_or_off_board() {
    let b = Board::empty();
    assert!(!b.path_clear(s(0, 0), s(1, 2)));
    assert!(!b.path_clear(s(7, 7), s(0, 1)));
    assert!(!b.path_clear(s(0, 0), s(-3, 0)));
    assert!(!b.path_clear(s(i8::MAX, 0), s(i8::MIN, 0)));
    assert!(b.path_clear(s(0, 0), s(7, 7)));
    assert!(b.path_clear(s(2, 2), s(2, 2)));
}
