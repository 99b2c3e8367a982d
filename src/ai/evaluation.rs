//! Static evaluation from Black's point of view.

use crate::engine::{Color, GameState};

/// Score adjustment for a delivered checkmate.
pub const MATE_BONUS: i32 = 10_000;

/// Evaluate a position for the maximizing side (Black).
///
/// Material difference plus terminal adjustments: mating White is worth
/// `MATE_BONUS`, being mated costs it, and any stalemate collapses the score
/// to zero regardless of material. The stalemate rule is applied last.
pub fn evaluate(state: &GameState) -> i32 {
    let mut score =
        state.material_value(Color::Black) - state.material_value(Color::White);

    if state.is_checkmate(Color::White) {
        score += MATE_BONUS;
    } else if state.is_checkmate(Color::Black) {
        score -= MATE_BONUS;
    }

    if state.is_stalemate(Color::White) || state.is_stalemate(Color::Black) {
        return 0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_start_scores_zero() {
        assert_eq!(evaluate(&GameState::new()), 0);
    }

    #[test]
    fn material_deficit_is_signed_for_black() {
        // White is up a queen.
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - -").unwrap();
        assert_eq!(evaluate(&state), -90);

        let state = GameState::from_fen("3qk3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(evaluate(&state), 90);
    }

    #[test]
    fn mated_white_is_a_huge_plus() {
        // Back-rank mate: white king cornered by queen and king.
        let state = GameState::from_fen("8/8/8/8/8/2k5/1q6/K7 w - -").unwrap();
        assert!(state.is_checkmate(Color::White));
        assert!(evaluate(&state) > 9_000);
    }

    #[test]
    fn stalemate_zeroes_any_material_edge() {
        // Black to move is stalemated while White is a queen up.
        let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - -").unwrap();
        assert!(state.is_stalemate(Color::Black));
        assert_eq!(evaluate(&state), 0);
    }
}
