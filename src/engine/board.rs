//! Mailbox board: 64 squares, row-major, row 0 = rank 8.

use std::fmt;

use super::types::{ChessError, Piece, Pos};

/// The piece placement. Knows nothing about turns, rights, or legality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        // The literal is a compile-time constant layout; parsing cannot fail.
        Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .expect("starting layout is valid")
    }

    /// The piece on `pos`, or `None` if the square is empty or off the board.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.index()]
        } else {
            None
        }
    }

    /// Place (or clear) a square. Off-board writes are silently dropped.
    pub fn set_piece(&mut self, pos: Pos, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.index()] = piece;
        }
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Encode the placement as the board field of a FEN string, rank 8 first.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(72);
        for row in 0..8 {
            if row > 0 {
                fen.push('/');
            }
            let mut empties = 0;
            for col in 0..8 {
                match self.squares[(row * 8 + col) as usize] {
                    Some(piece) => {
                        if empties > 0 {
                            fen.push(char::from(b'0' + empties));
                            empties = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empties += 1,
                }
            }
            if empties > 0 {
                fen.push(char::from(b'0' + empties));
            }
        }
        fen
    }

    /// Decode the board field of a FEN string.
    ///
    /// Requires exactly 8 ranks of exactly 8 files each. Piece legality is not
    /// checked; positions with zero or several kings parse fine.
    pub fn from_fen(fen: &str) -> Result<Board, ChessError> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = fen.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(fen.to_string()));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(ChessError::InvalidFen(fen.to_string()));
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or_else(|| ChessError::InvalidFen(fen.to_string()))?;
                    if col >= 8 {
                        return Err(ChessError::InvalidFen(fen.to_string()));
                    }
                    board.squares[row * 8 + col] = Some(piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(ChessError::InvalidFen(fen.to_string()));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(fen.to_string()));
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.squares[(row * 8 + col) as usize] {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", 8 - row)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
