//! Pseudo-legal move generation.
//!
//! Produces every move that respects piece movement rules, ignoring whether
//! the mover's king is left in check. Legality filtering lives in
//! [`crate::engine::state`]. Output order is deterministic: board-scan order
//! (row-major), castling candidates last.

use super::attacks::{BISHOP_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};
use super::board::Board;
use super::types::{CastlingFlags, Color, Move, MoveKind, Piece, PieceKind, Pos};

/// Generate all pseudo-legal moves for `color`.
pub fn pseudo_legal_moves(
    board: &Board,
    color: Color,
    en_passant: Option<Pos>,
    castling: &CastlingFlags,
) -> Vec<Move> {
    let mut moves = Vec::with_capacity(48);
    for row in 0..8 {
        for col in 0..8 {
            let from = Pos::new(row, col);
            let Some(piece) = board.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => pawn_moves(board, from, color, en_passant, &mut moves),
                PieceKind::Knight => {
                    offset_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves)
                }
                PieceKind::Bishop => ray_moves(board, from, color, &BISHOP_DIRS, &mut moves),
                PieceKind::Rook => ray_moves(board, from, color, &ROOK_DIRS, &mut moves),
                PieceKind::Queen => {
                    ray_moves(board, from, color, &ROOK_DIRS, &mut moves);
                    ray_moves(board, from, color, &BISHOP_DIRS, &mut moves);
                }
                PieceKind::King => offset_moves(board, from, color, &KING_OFFSETS, &mut moves),
            }
        }
    }
    castling_moves(board, color, castling, &mut moves);
    moves
}

/// Push `from -> to` if the target is on the board and not occupied by a
/// friend. Returns true when the target square was empty, so ray walkers know
/// whether to continue.
fn push_if_valid(board: &Board, from: Pos, to: Pos, color: Color, moves: &mut Vec<Move>) -> bool {
    if !to.is_valid() {
        return false;
    }
    match board.piece_at(to) {
        None => {
            moves.push(Move::new(from, to));
            true
        }
        Some(piece) if piece.color != color => {
            let mut mv = Move::new(from, to);
            mv.captured = Some(piece);
            moves.push(mv);
            false
        }
        Some(_) => false,
    }
}

fn offset_moves(
    board: &Board,
    from: Pos,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        push_if_valid(board, from, from.offset(dr, dc), color, moves);
    }
}

fn ray_moves(board: &Board, from: Pos, color: Color, dirs: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while to.is_valid() && push_if_valid(board, from, to, color, moves) {
            to = to.offset(dr, dc);
        }
    }
}

fn pawn_moves(
    board: &Board,
    from: Pos,
    color: Color,
    en_passant: Option<Pos>,
    moves: &mut Vec<Move>,
) {
    let (dir, start_row, promo_row) = match color {
        Color::White => (-1i8, 6i8, 0i8),
        Color::Black => (1i8, 1i8, 7i8),
    };

    // Single push, and double push from the start row.
    let one = from.offset(dir, 0);
    if one.is_valid() && board.piece_at(one).is_none() {
        push_pawn_advance(from, one, promo_row, moves);
        let two = from.offset(dir * 2, 0);
        if from.row == start_row && board.piece_at(two).is_none() {
            moves.push(Move::new(from, two));
        }
    }

    // Diagonal captures and en passant.
    for dc in [-1, 1] {
        let to = from.offset(dir, dc);
        if !to.is_valid() {
            continue;
        }
        match board.piece_at(to) {
            Some(piece) if piece.color != color => {
                let kind = if to.row == promo_row {
                    MoveKind::Promotion
                } else {
                    MoveKind::Normal
                };
                let mut mv = Move::with_kind(from, to, kind);
                mv.captured = Some(piece);
                if kind == MoveKind::Promotion {
                    mv.promotion = Some(PieceKind::Queen);
                }
                moves.push(mv);
            }
            None if en_passant == Some(to) => {
                let mut mv = Move::with_kind(from, to, MoveKind::EnPassant);
                mv.captured = Some(Piece::new(PieceKind::Pawn, !color));
                moves.push(mv);
            }
            _ => {}
        }
    }
}

fn push_pawn_advance(from: Pos, to: Pos, promo_row: i8, moves: &mut Vec<Move>) {
    if to.row == promo_row {
        let mut mv = Move::with_kind(from, to, MoveKind::Promotion);
        mv.promotion = Some(PieceKind::Queen);
        moves.push(mv);
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Castling candidates: rights intact, squares between king and rook empty,
/// rook still on its origin square. Check constraints (king not in check,
/// crossing square not attacked) are applied by the legality filter.
fn castling_moves(board: &Board, color: Color, castling: &CastlingFlags, moves: &mut Vec<Move>) {
    let row = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    let king_from = Pos::new(row, 4);

    if castling.can_castle_kingside(color)
        && board.piece_at(Pos::new(row, 5)).is_none()
        && board.piece_at(Pos::new(row, 6)).is_none()
        && rook_on(board, Pos::new(row, 7), color)
    {
        moves.push(Move::with_kind(
            king_from,
            Pos::new(row, 6),
            MoveKind::CastleKingside,
        ));
    }

    if castling.can_castle_queenside(color)
        && board.piece_at(Pos::new(row, 1)).is_none()
        && board.piece_at(Pos::new(row, 2)).is_none()
        && board.piece_at(Pos::new(row, 3)).is_none()
        && rook_on(board, Pos::new(row, 0), color)
    {
        moves.push(Move::with_kind(
            king_from,
            Pos::new(row, 2),
            MoveKind::CastleQueenside,
        ));
    }
}

fn rook_on(board: &Board, pos: Pos, color: Color) -> bool {
    matches!(
        board.piece_at(pos),
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color
    )
}
