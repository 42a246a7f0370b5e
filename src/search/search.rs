//! Fixed-depth negamax alpha-beta with a quiescence extension and the
//! transposition table. Single-threaded: the search mutates the one board in
//! place and restores it before returning.

use crate::board::{Board, Color};
use crate::moves::attacks::in_check;
use crate::moves::execute::{make_move, undo_move};
use crate::moves::movegen::generate_pseudo_legal;
use crate::moves::types::{CAPTURE, EN_PASSANT, KNIGHT_PROMO_CAPTURE, Move, MoveList};
use crate::search::eval::evaluate;
use crate::search::ordering::sort_moves;
use crate::search::tt::{Bound, TranspositionTable};
use tracing::debug;

pub const MAX_DEPTH: usize = 64;
/// The engine searches to this fixed depth; there is no time management.
pub const DEFAULT_DEPTH: i16 = 6;

pub const MIN_SCORE: i32 = -999_999;
pub const MAX_SCORE: i32 = 999_999;
/// Mate scores prefer the shorter mate: `CHECKMATE_SCORE + ply`.
pub const CHECKMATE_SCORE: i32 = -10_000;

// Quiescence gives up on a capture line this far below alpha.
const DELTA_MARGIN: i32 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// `Move::NONE` when the position has no legal move.
    pub best_move: Move,
    pub score: i32,
}

/// Entry point: full-window negamax for the side to move.
pub fn search_best_move(board: &mut Board, tt: &mut TranspositionTable, depth: i16) -> SearchResult {
    let result = negamax(board, tt, MIN_SCORE, MAX_SCORE, depth, 0);
    debug!(
        depth = depth as i32,
        score = result.score,
        best_move = %result.best_move,
        "search finished"
    );
    result
}

/// Captures-only extension past the nominal depth. Scores are from the
/// perspective of the side to move.
pub fn quiescence(board: &mut Board, mut alpha: i32, beta: i32, ply: usize) -> i32 {
    let side = board.side_to_move;

    if ply >= MAX_DEPTH - 1 {
        let eval = evaluate(board);
        return if side == Color::White { eval } else { -eval };
    }

    let mut stand_pat = evaluate(board);
    if side == Color::Black {
        stand_pat = -stand_pat;
    }

    // Stand pat: the static score bounds the node from below
    let mut best_value = stand_pat;
    if best_value >= beta {
        return best_value;
    }
    if best_value + DELTA_MARGIN < alpha {
        return alpha; // skip hopeless captures
    }
    if best_value > alpha {
        alpha = best_value;
    }

    let mut moves = MoveList::new();
    generate_pseudo_legal(board, &mut moves);

    for i in 0..moves.len() {
        let mv = moves[i];
        let flag = mv.flag();
        if flag != CAPTURE && flag != EN_PASSANT && flag < KNIGHT_PROMO_CAPTURE {
            continue; // ignore non captures
        }

        let undo = make_move(board, mv);
        if in_check(board, side) {
            undo_move(board, mv, undo);
            continue;
        }
        let score = -quiescence(board, -beta, -alpha, ply + 1);
        undo_move(board, mv, undo);

        if score >= beta {
            return score;
        }
        if score > best_value {
            best_value = score;
        }
        if score > alpha {
            alpha = score;
        }
    }

    best_value
}

pub fn negamax(
    board: &mut Board,
    tt: &mut TranspositionTable,
    mut alpha: i32,
    beta: i32,
    depth_left: i16,
    ply: usize,
) -> SearchResult {
    let side = board.side_to_move;
    let original_alpha = alpha;

    let entry = tt.probe(board.key);
    if let Some(e) = entry {
        if e.depth >= depth_left {
            match e.bound {
                Bound::Exact => {
                    return SearchResult {
                        best_move: e.best_move,
                        score: e.score,
                    };
                }
                // Upper bound at or below alpha: the node cannot raise it
                Bound::Alpha if e.score <= alpha => {
                    return SearchResult {
                        best_move: e.best_move,
                        score: alpha,
                    };
                }
                // Lower bound at or above beta: the node refutes the line
                Bound::Beta if e.score >= beta => {
                    return SearchResult {
                        best_move: e.best_move,
                        score: beta,
                    };
                }
                _ => {}
            }
        }
    }

    if depth_left == 0 {
        return SearchResult {
            best_move: Move::NONE,
            score: quiescence(board, alpha, beta, ply),
        };
    }

    // The mover repeating one of its own recent moves is usually shuffling;
    // snapshot the comparison values before the log grows.
    let log = board.log(side);
    let log_len = log.len();
    let (repeat2, repeat4) = if log_len > 4 {
        (log[log_len - 2], log[log_len - 4])
    } else {
        (Move::NONE, Move::NONE)
    };

    let mut best_value = MIN_SCORE;
    let mut best_move = Move::NONE;
    let mut has_legal_moves = false;

    let mut moves = MoveList::new();
    generate_pseudo_legal(board, &mut moves);
    sort_moves(board, &mut moves);

    // Try the stored move first, even when the entry was too shallow to cut.
    let tt_move = entry.map(|e| e.best_move).unwrap_or(Move::NONE);
    if !tt_move.is_none() {
        let undo = make_move(board, tt_move);
        if in_check(board, side) {
            undo_move(board, tt_move, undo);
        } else {
            has_legal_moves = true;
            let score = -negamax(board, tt, -beta, -alpha, depth_left - 1, ply + 1).score;
            undo_move(board, tt_move, undo);

            if score > best_value {
                best_value = score;
                best_move = tt_move;
                if score > alpha {
                    alpha = score;
                }
            }
            if score >= beta {
                tt.store(board.key, best_value, depth_left, best_move, Bound::Beta);
                return SearchResult {
                    best_move,
                    score: best_value,
                };
            }
        }
    }

    for i in 0..moves.len() {
        let mv = moves[i];
        if log_len > 4 && (mv == repeat2 || mv == repeat4) {
            continue; // crude cycle avoidance
        }
        if mv == tt_move {
            continue; // already searched
        }

        let undo = make_move(board, mv);
        if in_check(board, side) {
            undo_move(board, mv, undo);
            continue;
        }
        has_legal_moves = true;

        let score = -negamax(board, tt, -beta, -alpha, depth_left - 1, ply + 1).score;
        undo_move(board, mv, undo);

        if score > best_value {
            best_value = score;
            best_move = mv;
            if score > alpha {
                alpha = score;
            }
        }
        if score >= beta {
            // cut node
            return SearchResult {
                best_move,
                score,
            };
        }
    }

    let bound = if best_value <= original_alpha {
        Bound::Alpha
    } else if best_value >= beta {
        Bound::Beta
    } else {
        Bound::Exact
    };
    tt.store(board.key, best_value, depth_left, best_move, bound);

    if !has_legal_moves {
        if in_check(board, side) {
            // mate: prefer the shorter one
            return SearchResult {
                best_move: Move::NONE,
                score: CHECKMATE_SCORE + ply as i32,
            };
        }
        return SearchResult {
            best_move: Move::NONE,
            score: 0, // stalemate
        };
    }

    SearchResult {
        best_move,
        score: best_value,
    }
}
