//! Full game state: turn, castling rights, en passant, history, and the
//! legality layer on top of pseudo-legal generation.

use tracing::trace;

use super::attacks::{find_king, is_square_attacked};
use super::board::Board;
use super::movegen::pseudo_legal_moves;
use super::types::{CastlingFlags, ChessError, Color, Move, MoveKind, Piece, PieceKind, Pos};

/// A complete game position plus its move history.
///
/// All mutation funnels through [`GameState::make_move`]; a rejected move
/// leaves the state untouched. Check and game-end queries are pure and take
/// the side to examine explicitly.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    castling: CastlingFlags,
    en_passant: Option<Pos>,
    history: Vec<Move>,
    captured: Vec<Piece>,
}

impl GameState {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            turn: Color::White,
            castling: CastlingFlags::default(),
            en_passant: None,
            history: Vec::new(),
            captured: Vec::new(),
        }
    }

    /// Back to the starting position, discarding history.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling(&self) -> &CastlingFlags {
        &self.castling
    }

    pub fn en_passant(&self) -> Option<Pos> {
        self.en_passant
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    // -----------------------------------------------------------------------
    // Legality
    // -----------------------------------------------------------------------

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.turn)
    }

    /// Legal moves for `color`, regardless of whose turn it is.
    ///
    /// A pseudo-legal move survives if applying it does not leave `color`'s
    /// own king attacked. Castling additionally requires the king not to be
    /// in check now and the square it crosses to be safe; the landing square
    /// is covered by the ordinary king-safety test.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        let pseudo = pseudo_legal_moves(&self.board, color, self.en_passant, &self.castling);
        let in_check_now = self.is_in_check(color);

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            match mv.kind {
                MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                    if in_check_now {
                        continue;
                    }
                    let crossing = match mv.kind {
                        MoveKind::CastleKingside => Pos::new(mv.from.row, 5),
                        _ => Pos::new(mv.from.row, 3),
                    };
                    if is_square_attacked(&self.board, crossing, !color) {
                        continue;
                    }
                }
                _ => {}
            }
            let mut board = self.board.clone();
            apply(&mut board, &mv);
            let king_safe = match find_king(&board, color) {
                Some(king) => !is_square_attacked(&board, king, !color),
                None => true,
            };
            if king_safe {
                legal.push(mv);
            }
        }
        legal
    }

    // -----------------------------------------------------------------------
    // Move execution
    // -----------------------------------------------------------------------

    /// Validate and execute `mv` for the side to move.
    ///
    /// The move is matched against the legal list by (from, to); the matched
    /// move carries the authoritative category, so "e1g1" replays a castle
    /// with its rook shift and "e5d6" an en passant with its victim removal.
    /// The caller's promotion choice, when present, overrides the queen
    /// default. On error nothing changes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let legal = self.legal_moves();
        let Some(mut chosen) = legal
            .iter()
            .find(|m| m.from == mv.from && m.to == mv.to)
            .copied()
        else {
            return Err(ChessError::IllegalMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            });
        };

        if chosen.kind == MoveKind::Promotion {
            if let Some(choice) = mv.promotion {
                chosen.promotion = Some(choice);
            }
        }

        let Some(mover) = self.board.piece_at(chosen.from) else {
            // Unreachable for a matched legal move; guard instead of panic.
            return Err(ChessError::IllegalMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            });
        };

        // Record the capture before the board changes.
        if let Some(victim) = self.board.piece_at(chosen.to) {
            chosen.captured = Some(victim);
            self.captured.push(victim);
        } else if chosen.kind == MoveKind::EnPassant {
            if let Some(victim) = chosen.captured {
                self.captured.push(victim);
            }
        }

        apply(&mut self.board, &chosen);

        // Castling bookkeeping on king or rook departures.
        match mover.kind {
            PieceKind::King => self.castling.mark_king_moved(mover.color),
            PieceKind::Rook => self.castling.mark_rook_moved(mover.color, chosen.from),
            _ => {}
        }

        // En passant target appears only after a pawn double step.
        self.en_passant = if mover.kind == PieceKind::Pawn
            && (chosen.to.row - chosen.from.row).abs() == 2
        {
            Some(Pos::new((chosen.from.row + chosen.to.row) / 2, chosen.from.col))
        } else {
            None
        };

        trace!(mv = %chosen, color = %mover.color, "move executed");
        self.history.push(chosen);
        self.turn = !self.turn;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Game-end queries
    // -----------------------------------------------------------------------

    /// Is `color`'s king currently attacked? A missing king is not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match find_king(&self.board, color) {
            Some(king) => is_square_attacked(&self.board, king, !color),
            None => false,
        }
    }

    /// In check with no legal moves.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves_for(color).is_empty()
    }

    /// Not in check, yet no legal moves.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves_for(color).is_empty()
    }

    /// Sum of material values for `color`'s pieces on the board.
    pub fn material_value(&self, color: Color) -> i32 {
        let mut total = 0;
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = self.board.piece_at(Pos::new(row, col)) {
                    if piece.color == color {
                        total += piece.value();
                    }
                }
            }
        }
        total
    }

    // -----------------------------------------------------------------------
    // FEN
    // -----------------------------------------------------------------------

    /// Four-field FEN: placement, side to move, castling, en passant.
    pub fn to_fen(&self) -> String {
        let turn = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = match self.en_passant {
            Some(pos) => pos.to_algebraic(),
            None => "-".to_string(),
        };
        format!("{} {} {} {}", self.board.to_fen(), turn, self.castling.to_fen(), ep)
    }

    /// Parse a FEN string with at least four fields; halfmove and fullmove
    /// counters, when present, are accepted and ignored. History and captures
    /// start empty.
    pub fn from_fen(fen: &str) -> Result<GameState, ChessError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(ChessError::InvalidFen(fen.to_string()));
        }

        let board = Board::from_fen(fields[0])?;
        let turn = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(ChessError::InvalidFen(fen.to_string())),
        };
        let castling = CastlingFlags::from_fen(fields[2])
            .ok_or_else(|| ChessError::InvalidFen(fen.to_string()))?;
        let en_passant = match fields[3] {
            "-" => None,
            s => Some(
                Pos::from_algebraic(s).ok_or_else(|| ChessError::InvalidFen(fen.to_string()))?,
            ),
        };

        Ok(GameState {
            board,
            turn,
            castling,
            en_passant,
            history: Vec::new(),
            captured: Vec::new(),
        })
    }

    /// Replace this state with the parsed position. On error nothing changes.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), ChessError> {
        *self = GameState::from_fen(fen)?;
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Apply a validated move to a board. Castling shifts the rook, en passant
/// removes the bypassed pawn, promotions swap in the chosen piece.
fn apply(board: &mut Board, mv: &Move) {
    let mover = board.piece_at(mv.from);
    match mv.kind {
        MoveKind::Normal => {
            board.set_piece(mv.to, mover);
            board.set_piece(mv.from, None);
        }
        MoveKind::CastleKingside => {
            board.set_piece(mv.to, mover);
            board.set_piece(mv.from, None);
            let rook = board.piece_at(Pos::new(mv.from.row, 7));
            board.set_piece(Pos::new(mv.from.row, 5), rook);
            board.set_piece(Pos::new(mv.from.row, 7), None);
        }
        MoveKind::CastleQueenside => {
            board.set_piece(mv.to, mover);
            board.set_piece(mv.from, None);
            let rook = board.piece_at(Pos::new(mv.from.row, 0));
            board.set_piece(Pos::new(mv.from.row, 3), rook);
            board.set_piece(Pos::new(mv.from.row, 0), None);
        }
        MoveKind::EnPassant => {
            board.set_piece(mv.to, mover);
            board.set_piece(mv.from, None);
            board.set_piece(Pos::new(mv.from.row, mv.to.col), None);
        }
        MoveKind::Promotion => {
            let promoted = mover.map(|p| {
                Piece::new(mv.promotion.unwrap_or(PieceKind::Queen), p.color)
            });
            board.set_piece(mv.to, promoted);
            board.set_piece(mv.from, None);
        }
    }
}
