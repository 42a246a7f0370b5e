use crate::board::Board;
use crate::moves::attacks::in_check;
use crate::moves::execute::generate_legal;
use crate::moves::types::{Move, MoveList};

/// Outcome classification for the current position. This engine only
/// detects the move-based outcomes; clocks and repetition counting are out
/// of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Checkmate,
    Stalemate,
}

/// Determine whether the side to move has any legal reply.
pub fn position_status(board: &mut Board) -> GameStatus {
    let mut legal: Vec<Move> = Vec::with_capacity(64);
    let mut scratch = MoveList::new();
    generate_legal(board, &mut legal, &mut scratch);

    if legal.is_empty() {
        if in_check(board, board.side_to_move) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else {
        GameStatus::InPlay
    }
}
