//! chesskit: a rules-complete chess engine with a minimax opponent.
//!
//! The [`engine`] module covers board representation, pseudo-legal move
//! generation, the legality layer, and FEN serialization. The [`ai`] module
//! provides a random baseline and a fixed-depth alpha-beta player for Black.
//!
//! ```
//! use chesskit::{GameState, Move};
//!
//! let mut game = GameState::new();
//! game.make_move(Move::from_notation("e2e4")?)?;
//! assert_eq!(game.legal_moves().len(), 20);
//! # Ok::<(), chesskit::ChessError>(())
//! ```

pub mod ai;
pub mod config;
pub mod engine;

pub use ai::{AiEngine, AiPlayer, RandomAi};
pub use config::AppConfig;
pub use engine::{Board, CastlingFlags, ChessError, Color, GameState, Move, MoveKind, Piece, PieceKind, Pos};
