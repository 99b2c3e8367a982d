//! Computer opponents: a uniform-random baseline and a fixed-depth
//! alpha-beta minimax player for Black.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use tracing::debug;

use super::evaluation::evaluate;
use crate::engine::{Color, GameState, Move};

/// A move-picking engine. `None` means no legal move exists for Black.
pub trait AiEngine {
    fn best_move(&self, state: &GameState) -> Option<Move>;
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// RandomAi
// ---------------------------------------------------------------------------

/// Picks a uniformly random legal move. Useful as a baseline and in tests.
#[derive(Debug, Default)]
pub struct RandomAi;

impl AiEngine for RandomAi {
    fn best_move(&self, state: &GameState) -> Option<Move> {
        let moves = state.legal_moves_for(Color::Black);
        moves.choose(&mut rand::thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

// ---------------------------------------------------------------------------
// AiPlayer
// ---------------------------------------------------------------------------

/// Counters reported by a completed search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub depth: u32,
    pub score: i32,
    pub time_ms: u64,
}

/// Minimax with alpha-beta pruning. Black maximizes the material balance;
/// each branch searches a cloned state, so the caller's state is never
/// touched.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    depth: u32,
    time_limit: Option<Duration>,
}

impl AiPlayer {
    pub fn new(depth: u32) -> Self {
        AiPlayer {
            depth,
            time_limit: None,
        }
    }

    /// A player that stops expanding root moves once `limit` has elapsed.
    /// The move found so far is still returned.
    pub fn with_time_limit(depth: u32, limit: Duration) -> Self {
        AiPlayer {
            depth,
            time_limit: Some(limit),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_difficulty(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Pick Black's best move and report search statistics.
    pub fn search(&self, state: &GameState) -> (Option<Move>, SearchStats) {
        let started = Instant::now();
        let deadline = self.time_limit.map(|limit| started + limit);

        let mut nodes = 0u64;
        let mut best: Option<Move> = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for mv in state.legal_moves_for(Color::Black) {
            if let Some(deadline) = deadline {
                if best.is_some() && Instant::now() >= deadline {
                    break;
                }
            }
            let mut child = state.clone();
            if child.make_move(mv).is_err() {
                continue;
            }
            let score = self.minimax(
                &child,
                self.depth.saturating_sub(1),
                false,
                alpha,
                beta,
                &mut nodes,
            );
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(mv);
            }
            alpha = alpha.max(best_score);
        }

        let stats = SearchStats {
            nodes,
            depth: self.depth,
            score: if best.is_some() { best_score } else { 0 },
            time_ms: started.elapsed().as_millis() as u64,
        };
        debug!(
            nodes = stats.nodes,
            depth = stats.depth,
            score = stats.score,
            time_ms = stats.time_ms,
            "search finished"
        );
        (best, stats)
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return evaluate(state);
        }

        let color = if maximizing { Color::Black } else { Color::White };
        let moves = state.legal_moves_for(color);
        if moves.is_empty() {
            // Checkmate or stalemate; the evaluator scores terminals.
            return evaluate(state);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let mut child = state.clone();
                if child.make_move(mv).is_err() {
                    continue;
                }
                best = best.max(self.minimax(&child, depth - 1, false, alpha, beta, nodes));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let mut child = state.clone();
                if child.make_move(mv).is_err() {
                    continue;
                }
                best = best.min(self.minimax(&child, depth - 1, true, alpha, beta, nodes));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        AiPlayer::new(3)
    }
}

impl AiEngine for AiPlayer {
    fn best_move(&self, state: &GameState) -> Option<Move> {
        self.search(state).0
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
