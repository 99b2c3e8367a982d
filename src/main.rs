//! Terminal driver: human plays White from stdin, the minimax player
//! answers as Black.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use chesskit::{AiEngine, AiPlayer, AppConfig, GameState, Move};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chesskit=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let ai = AiPlayer::with_time_limit(config.ai_depth, config.ai_timeout());
    info!(depth = config.ai_depth, "starting game against {}", ai.name());

    let mut game = GameState::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", game.board());
    println!("You are White. Enter moves like e2e4 (e7e8q to promote).");
    println!("Commands: fen, quit");

    loop {
        if report_game_over(&game) {
            break;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "fen" => {
                println!("{}", game.to_fen());
                continue;
            }
            _ => {}
        }

        let mv = match Move::from_notation(&input) {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if let Err(e) = game.make_move(mv) {
            println!("{e}");
            continue;
        }

        if report_game_over(&game) {
            break;
        }

        match ai.best_move(&game) {
            Some(reply) => {
                // best_move only returns moves from the legal list.
                if game.make_move(reply).is_ok() {
                    println!("Black plays {reply}");
                }
            }
            None => break,
        }

        println!("{}", game.board());
    }

    Ok(())
}

/// Print any terminal verdict for the side to move. True if the game ended.
fn report_game_over(game: &GameState) -> bool {
    let side = game.turn();
    if game.is_checkmate(side) {
        println!("Checkmate. {} wins.", !side);
        return true;
    }
    if game.is_stalemate(side) {
        println!("Stalemate. Draw.");
        return true;
    }
    if game.is_in_check(side) {
        println!("{side} is in check.");
    }
    false
}
