//! Rules-level integration tests: shallow perft counts plus end-to-end game
//! scenarios (en passant, castling, checkmate, AI replies).

use chesskit::{AiEngine, AiPlayer, Color, GameState, Move, MoveKind, PieceKind, Pos};

fn sq(s: &str) -> Pos {
    Pos::from_algebraic(s).unwrap()
}

fn play(state: &mut GameState, moves: &[&str]) {
    for m in moves {
        let mv = Move::from_notation(m).unwrap();
        state.make_move(mv).unwrap_or_else(|e| panic!("{m}: {e}"));
    }
}

/// Count leaf nodes of the legal-move tree. Kept shallow: the generator
/// offers a single queen-default candidate per promotion square, so standard
/// deep perft totals do not apply past promotion-free depths.
fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in state.legal_moves() {
        let mut next = state.clone();
        next.make_move(mv).unwrap();
        nodes += perft(&next, depth - 1);
    }
    nodes
}

// ---------------------------------------------------------------------------
// Perft
// ---------------------------------------------------------------------------

#[test]
fn perft_startpos_depth_1() {
    assert_eq!(perft(&GameState::new(), 1), 20);
}

#[test]
fn perft_startpos_depth_2() {
    assert_eq!(perft(&GameState::new(), 2), 400);
}

#[test]
fn perft_startpos_depth_3() {
    assert_eq!(perft(&GameState::new(), 3), 8_902);
}

#[test]
fn perft_rook_endgame() {
    let state = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -").unwrap();
    assert_eq!(perft(&state, 1), 14);
    assert_eq!(perft(&state, 2), 191);
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn double_step_opens_en_passant_window() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4"]);
    assert!(game.to_fen().ends_with(" e3"));
    // No black pawn stands beside e4, so no en passant reply exists yet.
    assert!(game
        .legal_moves()
        .iter()
        .all(|m| m.kind != MoveKind::EnPassant));
}

#[test]
fn en_passant_capture_full_round() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let ep = game
        .legal_moves()
        .iter()
        .find(|m| m.kind == MoveKind::EnPassant)
        .copied()
        .unwrap();
    assert_eq!(ep.from, sq("e5"));
    assert_eq!(ep.to, sq("d6"));
    game.make_move(ep).unwrap();
    assert_eq!(game.board().piece_at(sq("d5")), None);
    assert_eq!(game.captured_pieces().len(), 1);
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = GameState::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(game.is_checkmate(Color::White));
    assert!(!game.is_stalemate(Color::White));
    assert!(game.legal_moves_for(Color::White).is_empty());
}

#[test]
fn both_castles_offered_on_open_back_rank() {
    let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
    let moves = game.legal_moves();
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CastleKingside && m.to == sq("g1")));
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CastleQueenside && m.to == sq("c1")));
}

#[test]
fn castle_blocked_by_covered_crossing_square() {
    // Black rook on f8 covers f1: kingside is out, queenside survives.
    let game = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
    let moves = game.legal_moves();
    assert!(moves.iter().all(|m| m.kind != MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
}

#[test]
fn castle_replayed_from_plain_notation() {
    let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ -").unwrap();
    play(&mut game, &["e1g1"]);
    assert_eq!(
        game.board().piece_at(sq("f1")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert_eq!(game.board().piece_at(sq("h1")), None);
}

#[test]
fn ai_takes_the_hanging_queen() {
    let game = GameState::from_fen("3qk3/8/8/3Q4/8/8/8/4K3 b - -").unwrap();
    let mv = AiPlayer::new(1).best_move(&game).unwrap();
    assert_eq!(mv.from, sq("d8"));
    assert_eq!(mv.to, sq("d5"));
}

#[test]
fn ai_reply_is_legal_and_applies() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4"]);
    let reply = AiPlayer::new(2).best_move(&game).unwrap();
    assert!(game.legal_moves().contains(&reply));
    game.make_move(reply).unwrap();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.history().len(), 2);
}

// ---------------------------------------------------------------------------
// Serialization and state invariants
// ---------------------------------------------------------------------------

#[test]
fn fen_round_trip_mid_game() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "c7c5", "g1f3", "d7d6"]);
    let fen = game.to_fen();
    let restored = GameState::from_fen(&fen).unwrap();
    assert_eq!(restored.to_fen(), fen);
    assert_eq!(restored.legal_moves(), game.legal_moves());
}

#[test]
fn illegal_move_rejected_without_side_effects() {
    let mut game = GameState::new();
    let fen = game.to_fen();
    assert!(game.make_move(Move::from_notation("e1e3").unwrap()).is_err());
    assert!(game.make_move(Move::from_notation("e7e5").unwrap()).is_err());
    assert_eq!(game.to_fen(), fen);
    assert!(game.history().is_empty());
    assert!(game.captured_pieces().is_empty());
}

#[test]
fn checkmate_and_stalemate_are_mutually_exclusive() {
    let mate = GameState::from_fen("k7/1Q6/2K5/8/8/8/8/8 b - -").unwrap();
    assert!(mate.is_checkmate(Color::Black));
    assert!(!mate.is_stalemate(Color::Black));

    let stale = GameState::from_fen("k7/8/1Q6/8/8/8/8/4K3 b - -").unwrap();
    assert!(stale.is_stalemate(Color::Black));
    assert!(!stale.is_checkmate(Color::Black));
}
