//! Computer opponents and position evaluation.

pub mod engine;
pub mod evaluation;

pub use engine::{AiEngine, AiPlayer, RandomAi, SearchStats};
pub use evaluation::{evaluate, MATE_BONUS};
