use std::io::{self, BufRead};

use indicatif::ProgressBar;
use tempo::board::Board;
use tempo::logger::init_logging;
use tempo::moves::execute::apply_uci_move;
use tempo::moves::perft::perft;
use tempo::search::search::{DEFAULT_DEPTH, search_best_move};
use tempo::search::tt::TranspositionTable;
use tracing::debug;

fn main() {
    // Diagnostics only on request; the engine itself keeps no state on disk.
    if std::env::var_os("RUST_LOG").is_some() {
        init_logging("logs/tempo.log", "info");
    }

    let mut board = Board::new();
    let mut tt = TranspositionTable::new();

    // Main UCI loop
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "uci" => handle_uci(),
            "isready" => println!("readyok"),
            "ucinewgame" => {
                board = Board::new();
            }
            "position" => handle_position(&parts, &mut board),
            "go" => handle_go(&mut board, &mut tt),
            "d" | "display" => {
                println!("{}", board);
            }
            "perft" => run_perft(&parts, &mut board),
            "quit" => break,
            _ => {} // unknown tokens are ignored
        }
    }
}

fn handle_uci() {
    println!("id name ChessEngineTP");
    println!("id author ThanasisPantelakis");
    println!("uciok");
}

/// `position startpos [moves m1 m2 ...]`. Only the start position is
/// supported; a move that matches nothing leaves the board unchanged.
fn handle_position(parts: &[&str], board: &mut Board) {
    if parts.len() < 2 || parts[1] != "startpos" {
        return;
    }
    *board = Board::new();

    if let Some(moves_idx) = parts.iter().position(|&p| p == "moves") {
        for move_str in &parts[moves_idx + 1..] {
            if !apply_uci_move(board, move_str) {
                debug!(%move_str, "unmatched move in position command");
            }
        }
    }
}

/// Fixed-depth search; any trailing `go` arguments (time controls, depth
/// overrides) are ignored.
fn handle_go(board: &mut Board, tt: &mut TranspositionTable) {
    let result = search_best_move(board, tt, DEFAULT_DEPTH);
    if result.best_move.is_none() {
        println!("bestmove (none)");
    } else {
        println!("bestmove {}", result.best_move.to_uci());
    }
}

/// `perft <depth>`: node counts for every depth up to the requested one.
fn run_perft(parts: &[&str], board: &mut Board) {
    let max_depth: u32 = parts
        .get(1)
        .and_then(|d| d.parse().ok())
        .unwrap_or(4)
        .min(8);

    let bar = ProgressBar::new(max_depth as u64);
    let mut results = Vec::new();
    for depth in 1..=max_depth {
        results.push(perft(board, depth));
        bar.inc(1);
    }
    bar.finish_and_clear();

    for (depth, nodes) in (1..).zip(results) {
        println!("perft {}: {}", depth, nodes);
    }
}
