//! Static evaluation, always from White's perspective: positive favours
//! White. The search negates as needed for negamax.

use crate::board::{
    B_BISHOP, B_KING, B_KNIGHT, B_PAWN, B_QUEEN, B_ROOK, Board, W_BISHOP, W_KING, W_KNIGHT,
    W_PAWN, W_QUEEN, W_ROOK,
};
use crate::square::{A1, A2, A7, A8, B1, B8, C1, C8, D1, D8, F1, F8, G1, G8, H1, H2, H7, H8};
use crate::utils::{bit, file_of, on_board, rank_of};

// Material, indexed by piece kind. Kings carry no material term.
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 300;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

const DOUBLED_PAWN_PENALTY: i32 = 25;
const MOBILITY_OPEN: i32 = 20;
const MOBILITY_CAPTURE: i32 = 5;
const CORNER_ROOK_PENALTY: i32 = 5;
const SHIELD_FRONT: i32 = 50;
const SHIELD_DIAGONAL: i32 = 20;
const UNDEVELOPED_MINOR_PENALTY: i32 = 25;
const CASTLED_KING_SIDE: i32 = 60;
const CASTLED_QUEEN_SIDE: i32 = 40;

// The king table only applies while enough knights, bishops, rooks and
// queens remain on the board (both sides summed). The counter accumulates
// during the scan, so the gate reads its value as of the king's square.
const HEAVY_PIECE_GATE: i32 = 4;

// Bonus for pawns in the center, white orientation (rank 8 first).
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
    100, 100, 100, 100, 100, 100, 100, 100,
     10,  10,  20,  80,  80,  20,  10,  10,
      5,   5,  10,  60,  60,  10,   5,   5,
      0,   0,  20,  50,  50,  20,   0,   0,
      5,  -5, -10,  10,  10, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

// Bonus for knights in the center.
#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -40,   0,  10,  15,  15,  10,   0, -40,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -40,   5,  10,  15,  15,  10,   5, -40,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

// Keeps the king at home while the middlegame lasts.
#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -80, -70, -70, -70, -70, -70, -70, -80,
    -60, -60, -60, -60, -60, -60, -60, -60,
    -40, -40, -40, -40, -40, -40, -40, -40,
    -20, -20, -20, -20, -20, -20, -20, -20,
      0,   0,   0,   0,   0,   0,   0,   0,
     20,  20,  20,  20,  20,  20,  20,  20,
     40,  40,  40,  40,  40,  40,  40,  40,
     60, 100,  40,  20,  20,  40, 100,  60,
];

const DIAGONAL_OFFSETS: [i32; 4] = [7, 9, -7, -9];

/// Single-step mobility along the four diagonals: +20 when not blocked by a
/// friendly piece, +5 more would-be-capture credit when the blocker check
/// falls through to an enemy.
fn diagonal_mobility(sq: i32, own_occ: u64, opp_occ: u64) -> i32 {
    let mut score = 0;
    for offset in DIAGONAL_OFFSETS {
        let t = sq + offset;
        if !on_board(t) {
            continue;
        }
        if (file_of(t) - file_of(sq)).abs() != 1 || (rank_of(t) - rank_of(sq)).abs() != 1 {
            continue;
        }
        if !bit(own_occ, t) {
            score += MOBILITY_OPEN;
        } else if bit(opp_occ, t) {
            score += MOBILITY_CAPTURE;
        }
    }
    score
}

/// Same idea along the rank and file neighbours.
fn orthogonal_mobility(sq: i32, own_occ: u64, opp_occ: u64) -> i32 {
    let mut score = 0;
    for i in 0..4 {
        let t = match i {
            0 => sq - 1,
            1 => sq + 1,
            2 => sq - 8,
            _ => sq + 8,
        };
        if !on_board(t) {
            continue;
        }
        if i < 2 && rank_of(t) != rank_of(sq) {
            continue;
        }
        if !bit(own_occ, t) {
            score += MOBILITY_OPEN;
        } else if bit(opp_occ, t) {
            score += MOBILITY_CAPTURE;
        }
    }
    score
}

/// A rook still in its corner loses a little for each blocked neighbour.
fn corner_rook_penalty(occ: u64, sq: i32, corner: u8, side_sq: u8, front_sq: u8) -> i32 {
    let mut penalty = 0;
    if sq == corner as i32 {
        if bit(occ, side_sq as i32) {
            penalty += CORNER_ROOK_PENALTY;
        }
        if bit(occ, front_sq as i32) {
            penalty += CORNER_ROOK_PENALTY;
        }
    }
    penalty
}

pub fn evaluate(board: &Board) -> i32 {
    // Adds when white benefits, subtracts when black benefits.
    let mut evaluation = 0;
    let mut heavy_pieces = 0;

    let wp = board.pieces[W_PAWN];
    let bp = board.pieces[B_PAWN];

    for sq in 0..64i32 {
        // White pawn
        if bit(wp, sq) {
            evaluation += PAWN_VALUE + PAWN_TABLE[sq as usize];
            if sq >= 8 && bit(wp, sq - 8) {
                evaluation -= DOUBLED_PAWN_PENALTY;
            }
        }
        // Black pawn
        else if bit(bp, sq) {
            evaluation -= PAWN_VALUE;
            evaluation -= PAWN_TABLE[(63 - sq) as usize]; // flip board
            if sq >= 8 && bit(bp, sq - 8) {
                evaluation += DOUBLED_PAWN_PENALTY;
            }
        }
        // White knight
        else if bit(board.pieces[W_KNIGHT], sq) {
            heavy_pieces += 1;
            evaluation += KNIGHT_VALUE + KNIGHT_TABLE[sq as usize];
        }
        // Black knight
        else if bit(board.pieces[B_KNIGHT], sq) {
            heavy_pieces += 1;
            evaluation -= KNIGHT_VALUE + KNIGHT_TABLE[sq as usize];
        }
        // White bishop or queen: material plus diagonal mobility
        else if bit(board.pieces[W_BISHOP], sq) || bit(board.pieces[W_QUEEN], sq) {
            if bit(board.pieces[W_BISHOP], sq) {
                evaluation += BISHOP_VALUE;
            } else {
                evaluation += QUEEN_VALUE;
            }
            heavy_pieces += 1;
            evaluation += diagonal_mobility(sq, board.occ_white, board.occ_black);
        }
        // Black bishop or queen
        else if bit(board.pieces[B_BISHOP], sq) || bit(board.pieces[B_QUEEN], sq) {
            if bit(board.pieces[B_BISHOP], sq) {
                evaluation -= BISHOP_VALUE;
            } else {
                evaluation -= QUEEN_VALUE;
            }
            heavy_pieces += 1;
            evaluation -= diagonal_mobility(sq, board.occ_black, board.occ_white);
        }
        // White rook (queens were consumed by the branch above)
        else if bit(board.pieces[W_ROOK], sq) {
            evaluation += ROOK_VALUE;
            heavy_pieces += 1;
            evaluation -= corner_rook_penalty(board.occ_white, sq, A1, B1, A2);
            evaluation -= corner_rook_penalty(board.occ_white, sq, H1, G1, H2);
            evaluation += orthogonal_mobility(sq, board.occ_white, board.occ_black);
        }
        // Black rook
        else if bit(board.pieces[B_ROOK], sq) {
            evaluation -= ROOK_VALUE;
            heavy_pieces += 1;
            evaluation += corner_rook_penalty(board.occ_black, sq, A8, B8, A7);
            evaluation += corner_rook_penalty(board.occ_black, sq, H8, G8, H7);
            evaluation -= orthogonal_mobility(sq, board.occ_black, board.occ_white);
        }
        // White king: placement table while the middlegame lasts, plus the
        // pawn shield in front of it.
        else if bit(board.pieces[W_KING], sq) {
            if heavy_pieces > HEAVY_PIECE_GATE {
                evaluation += KING_TABLE[sq as usize];
            }
            if sq >= 8 && bit(wp, sq - 8) {
                evaluation += SHIELD_FRONT;
            }
            if sq >= 9 && bit(wp, sq - 9) {
                evaluation += SHIELD_DIAGONAL;
            }
            if sq >= 7 && bit(wp, sq - 7) {
                evaluation += SHIELD_DIAGONAL;
            }
        }
        // Black king
        else if bit(board.pieces[B_KING], sq) {
            if heavy_pieces > HEAVY_PIECE_GATE {
                evaluation -= KING_TABLE[(63 - sq) as usize]; // flip
            }
            if sq < 56 && bit(bp, sq + 8) {
                evaluation -= SHIELD_FRONT;
            }
            if sq < 57 && bit(bp, sq + 7) {
                evaluation -= SHIELD_DIAGONAL;
            }
            if sq < 55 && bit(bp, sq + 9) {
                evaluation -= SHIELD_DIAGONAL;
            }
        }
    }

    // Discourage early queen moves: once the queen has left home, any minor
    // still on its starting square is a liability.
    if !bit(board.pieces[W_QUEEN], D1 as i32) {
        for home in [B1, G1] {
            if bit(board.pieces[W_KNIGHT], home as i32) {
                evaluation -= UNDEVELOPED_MINOR_PENALTY;
            }
        }
        for home in [C1, F1] {
            if bit(board.pieces[W_BISHOP], home as i32) {
                evaluation -= UNDEVELOPED_MINOR_PENALTY;
            }
        }
    }
    if !bit(board.pieces[B_QUEEN], D8 as i32) {
        for home in [B8, G8] {
            if bit(board.pieces[B_KNIGHT], home as i32) {
                evaluation += UNDEVELOPED_MINOR_PENALTY;
            }
        }
        for home in [C8, F8] {
            if bit(board.pieces[B_BISHOP], home as i32) {
                evaluation += UNDEVELOPED_MINOR_PENALTY;
            }
        }
    }

    // Reward a castled king
    if bit(board.pieces[W_KING], G1 as i32) {
        evaluation += CASTLED_KING_SIDE;
    } else if bit(board.pieces[W_KING], C1 as i32) {
        evaluation += CASTLED_QUEEN_SIDE;
    }
    if bit(board.pieces[B_KING], G8 as i32) {
        evaluation -= CASTLED_KING_SIDE;
    } else if bit(board.pieces[B_KING], C8 as i32) {
        evaluation -= CASTLED_QUEEN_SIDE;
    }

    evaluation
}
