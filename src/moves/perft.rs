//! Perft: count the legal-move tree to a fixed depth. Used to validate the
//! generator and make/unmake against the published reference node counts.

use crate::board::Board;
use crate::moves::attacks::in_check;
use crate::moves::execute::{make_move, undo_move};
use crate::moves::movegen::generate_pseudo_legal;
use crate::moves::types::MoveList;
use tracing::{debug, instrument};

fn perft_recursive(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mover = board.side_to_move;
    let mut moves = MoveList::new();
    generate_pseudo_legal(board, &mut moves);

    let mut nodes = 0;
    for &mv in moves.iter() {
        let undo = make_move(board, mv);
        if !in_check(board, mover) {
            nodes += perft_recursive(board, depth - 1);
        }
        undo_move(board, mv, undo);
    }
    nodes
}

#[instrument(skip(board))]
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    let nodes = perft_recursive(board, depth);
    debug!(depth = depth, nodes = nodes, "perft finished");
    nodes
}
