use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value used by the static evaluator.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a FEN piece letter (case decides the color).
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }

    /// Parse a promotion letter (q/r/b/n).
    pub fn from_promotion_char(c: char) -> Option<PieceKind> {
        match c {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// Lowercase promotion letter for move notation.
    pub fn promotion_char(self) -> Option<char> {
        match self {
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Knight => Some('n'),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece on the board. An empty square is `Option<Piece>` = `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Material value, derived from the kind.
    pub fn value(self) -> i32 {
        self.kind.value()
    }

    pub fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }

    pub fn from_char(c: char) -> Option<Piece> {
        PieceKind::from_char(c).map(|(color, kind)| Piece { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A board coordinate. Row 0 is rank 8 (Black's back rank), row 7 is rank 1;
/// column 0 is file 'a'. Coordinates may leave the board while probing
/// neighbour squares; `is_valid` gates every board access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub fn new(row: i8, col: i8) -> Self {
        Pos { row, col }
    }

    /// Both coordinates in [0,7]?
    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// The square displaced by (dr, dc). May be off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Pos {
        Pos {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Index into a row-major 64-cell array. Caller must ensure validity.
    pub fn index(self) -> usize {
        debug_assert!(self.is_valid(), "indexing off-board position {self:?}");
        (self.row * 8 + self.col) as usize
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Option<Pos> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col < 8 && rank < 8 {
            Some(Pos::new(7 - rank as i8, col as i8))
        } else {
            None
        }
    }

    /// Convert to algebraic notation like "e4".
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_algebraic())
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

// ---------------------------------------------------------------------------
// MoveKind & Move
// ---------------------------------------------------------------------------

/// Category of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    Promotion,
}

/// A chess move.
///
/// `captured` is undo/history bookkeeping and is excluded from equality;
/// two moves are the same move if (from, to, kind, promotion) agree.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub kind: MoveKind,
    pub captured: Option<Piece>,
    /// Promotion choice. Only meaningful when `kind == Promotion`; the
    /// generator fills in Queen as a placeholder for the caller to override.
    pub promotion: Option<PieceKind>,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.kind == other.kind
            && self.promotion == other.promotion
    }
}

impl Move {
    pub fn new(from: Pos, to: Pos) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
            captured: None,
            promotion: None,
        }
    }

    pub fn with_kind(from: Pos, to: Pos, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            captured: None,
            promotion: None,
        }
    }

    /// Coordinate notation: "e2e4", or "e7e8q" for promotions.
    pub fn to_notation(&self) -> String {
        let mut s = format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic());
        if self.kind == MoveKind::Promotion {
            if let Some(c) = self.promotion.and_then(PieceKind::promotion_char) {
                s.push(c);
            }
        }
        s
    }

    /// Parse coordinate notation ("e2e4", "e7e8q").
    ///
    /// The result carries no category beyond promotion; `make_move` matches
    /// on (from, to) against the legal list and supplies the rest.
    pub fn from_notation(s: &str) -> Result<Move, ChessError> {
        if !s.is_ascii() || (s.len() != 4 && s.len() != 5) {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        let from = Pos::from_algebraic(&s[0..2])
            .ok_or_else(|| ChessError::InvalidSquare(s[0..2].to_string()))?;
        let to = Pos::from_algebraic(&s[2..4])
            .ok_or_else(|| ChessError::InvalidSquare(s[2..4].to_string()))?;
        let mut mv = Move::new(from, to);
        if s.len() == 5 {
            let promo = s
                .chars()
                .nth(4)
                .and_then(PieceKind::from_promotion_char)
                .ok_or_else(|| ChessError::InvalidNotation(s.to_string()))?;
            mv.kind = MoveKind::Promotion;
            mv.promotion = Some(promo);
        }
        Ok(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

// ---------------------------------------------------------------------------
// CastlingFlags
// ---------------------------------------------------------------------------

/// The six has-this-piece-moved booleans gating castling.
///
/// A side may castle on a wing iff its king has not moved and the rook on
/// that wing has not moved from its origin square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingFlags {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub white_rook_kingside_moved: bool,
    pub white_rook_queenside_moved: bool,
    pub black_rook_kingside_moved: bool,
    pub black_rook_queenside_moved: bool,
}

impl CastlingFlags {
    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn rook_kingside_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_rook_kingside_moved,
            Color::Black => self.black_rook_kingside_moved,
        }
    }

    pub fn rook_queenside_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_rook_queenside_moved,
            Color::Black => self.black_rook_queenside_moved,
        }
    }

    pub fn can_castle_kingside(&self, color: Color) -> bool {
        !self.king_moved(color) && !self.rook_kingside_moved(color)
    }

    pub fn can_castle_queenside(&self, color: Color) -> bool {
        !self.king_moved(color) && !self.rook_queenside_moved(color)
    }

    pub fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    /// Record a rook leaving one of the four origin corners.
    pub fn mark_rook_moved(&mut self, color: Color, from: Pos) {
        match color {
            Color::White => {
                if from == Pos::new(7, 0) {
                    self.white_rook_queenside_moved = true;
                }
                if from == Pos::new(7, 7) {
                    self.white_rook_kingside_moved = true;
                }
            }
            Color::Black => {
                if from == Pos::new(0, 0) {
                    self.black_rook_queenside_moved = true;
                }
                if from == Pos::new(0, 7) {
                    self.black_rook_kingside_moved = true;
                }
            }
        }
    }

    /// Parse a FEN castling field ("KQkq", "Kq", "-", ...).
    pub fn from_fen(s: &str) -> Option<CastlingFlags> {
        // Start from "everything has moved" and clear per letter.
        let mut flags = CastlingFlags {
            white_king_moved: true,
            black_king_moved: true,
            white_rook_kingside_moved: true,
            white_rook_queenside_moved: true,
            black_rook_kingside_moved: true,
            black_rook_queenside_moved: true,
        };
        if s == "-" {
            return Some(flags);
        }
        if s.is_empty() {
            return None;
        }
        for c in s.chars() {
            match c {
                'K' => {
                    flags.white_king_moved = false;
                    flags.white_rook_kingside_moved = false;
                }
                'Q' => {
                    flags.white_king_moved = false;
                    flags.white_rook_queenside_moved = false;
                }
                'k' => {
                    flags.black_king_moved = false;
                    flags.black_rook_kingside_moved = false;
                }
                'q' => {
                    flags.black_king_moved = false;
                    flags.black_rook_queenside_moved = false;
                }
                _ => return None,
            }
        }
        Some(flags)
    }

    /// FEN castling field; availability requires king AND rook unmoved.
    pub fn to_fen(&self) -> String {
        let mut s = String::with_capacity(4);
        if self.can_castle_kingside(Color::White) {
            s.push('K');
        }
        if self.can_castle_queenside(Color::White) {
            s.push('Q');
        }
        if self.can_castle_kingside(Color::Black) {
            s.push('k');
        }
        if self.can_castle_queenside(Color::Black) {
            s.push('q');
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Display for CastlingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors. Nothing here is fatal; every failure leaves the target
/// value unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
