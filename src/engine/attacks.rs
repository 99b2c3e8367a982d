//! Attack detection primitives shared by legality filtering and castling.

use super::board::Board;
use super::types::{Color, PieceKind, Pos};

/// Knight jump offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets (the eight neighbours).
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal ray directions (rook, queen).
pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions (bishop, queen).
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Locate the king of `color`, scanning row-major. `None` if absent (bare
/// positions are representable, so callers must tolerate this).
pub fn find_king(board: &Board, color: Color) -> Option<Pos> {
    for row in 0..8 {
        for col in 0..8 {
            let pos = Pos::new(row, col);
            if let Some(piece) = board.piece_at(pos) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some(pos);
                }
            }
        }
    }
    None
}

/// Is `target` attacked by any piece of `by`?
///
/// Pure pseudo-attack test: pins and legality are the caller's concern.
pub fn is_square_attacked(board: &Board, target: Pos, by: Color) -> bool {
    // Pawns. A white pawn attacks upward (toward row 0), so it sits one row
    // below the target; black the mirror image.
    let pawn_row = match by {
        Color::White => 1,
        Color::Black => -1,
    };
    for dc in [-1, 1] {
        let from = target.offset(pawn_row, dc);
        if let Some(piece) = board.piece_at(from) {
            if piece.color == by && piece.kind == PieceKind::Pawn {
                return true;
            }
        }
    }

    // Knights.
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(piece) = board.piece_at(target.offset(dr, dc)) {
            if piece.color == by && piece.kind == PieceKind::Knight {
                return true;
            }
        }
    }

    // Adjacent enemy king.
    for (dr, dc) in KING_OFFSETS {
        if let Some(piece) = board.piece_at(target.offset(dr, dc)) {
            if piece.color == by && piece.kind == PieceKind::King {
                return true;
            }
        }
    }

    // Sliding attacks: walk each ray to the first occupied square.
    for (dr, dc) in ROOK_DIRS {
        if ray_hits(board, target, dr, dc, by, PieceKind::Rook) {
            return true;
        }
    }
    for (dr, dc) in BISHOP_DIRS {
        if ray_hits(board, target, dr, dc, by, PieceKind::Bishop) {
            return true;
        }
    }

    false
}

/// Walk from `target` along (dr, dc); true if the first piece met is a
/// `slider` or queen of color `by`.
fn ray_hits(board: &Board, target: Pos, dr: i8, dc: i8, by: Color, slider: PieceKind) -> bool {
    let mut pos = target.offset(dr, dc);
    while pos.is_valid() {
        if let Some(piece) = board.piece_at(pos) {
            return piece.color == by
                && (piece.kind == slider || piece.kind == PieceKind::Queen);
        }
        pos = pos.offset(dr, dc);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Pos {
        Pos::from_algebraic(s).unwrap()
    }

    #[test]
    fn finds_kings_in_start_position() {
        let board = Board::starting();
        assert_eq!(find_king(&board, Color::White), Some(sq("e1")));
        assert_eq!(find_king(&board, Color::Black), Some(sq("e8")));
    }

    #[test]
    fn find_king_on_bare_board() {
        assert_eq!(find_king(&Board::empty(), Color::White), None);
    }

    #[test]
    fn pawn_attacks_diagonally_forward() {
        let board = Board::from_fen("8/8/8/8/4P3/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));
    }

    #[test]
    fn black_pawn_attacks_downward() {
        let board = Board::from_fen("8/8/8/4p3/8/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(is_square_attacked(&board, sq("f4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }

    #[test]
    fn knight_attacks() {
        let board = Board::from_fen("8/8/8/8/4N3/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d6"), Color::White));
        assert!(is_square_attacked(&board, sq("f2"), Color::White));
        assert!(is_square_attacked(&board, sq("c3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
    }

    #[test]
    fn slider_attacks_stop_at_blockers() {
        // Rook on a1, own pawn on a4.
        let board = Board::from_fen("8/8/8/8/P7/8/8/R7").unwrap();
        assert!(is_square_attacked(&board, sq("a3"), Color::White));
        assert!(is_square_attacked(&board, sq("a4"), Color::White));
        assert!(!is_square_attacked(&board, sq("a5"), Color::White));
        assert!(is_square_attacked(&board, sq("h1"), Color::White));
    }

    #[test]
    fn queen_attacks_both_ray_families() {
        let board = Board::from_fen("8/8/8/3q4/8/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d1"), Color::Black));
        assert!(is_square_attacked(&board, sq("h1"), Color::Black));
        assert!(is_square_attacked(&board, sq("a5"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e3"), Color::Black));
    }

    #[test]
    fn king_adjacency() {
        let board = Board::from_fen("8/8/8/8/4K3/8/8/8").unwrap();
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
        assert!(!is_square_attacked(&board, sq("e6"), Color::White));
    }

    #[test]
    fn attack_colors_are_distinct() {
        let board = Board::from_fen("8/8/8/8/4N3/8/8/8").unwrap();
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }
}
