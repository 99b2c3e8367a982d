//! Core chess engine: board representation, move generation, and game state.

pub mod attacks;
pub mod board;
pub mod movegen;
pub mod state;
pub mod types;

pub use board::Board;
pub use movegen::pseudo_legal_moves;
pub use state::GameState;
pub use types::{CastlingFlags, ChessError, Color, Move, MoveKind, Piece, PieceKind, Pos};
