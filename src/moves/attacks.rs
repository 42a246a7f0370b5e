//! Square attack queries. `is_square_attacked` answers "does any piece of
//! `by` attack this square under the current occupancy" and is the single
//! source of truth for check detection and for the castling path tests.

use crate::board::{Board, Color, Piece};
use crate::utils::{bit, file_of, on_board, rank_of};

pub(crate) const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
pub(crate) const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Diagonal ray step for direction `i` (0..=3), `j` squares out.
#[inline(always)]
pub(crate) fn diagonal_step(sq: i32, i: usize, j: i32) -> i32 {
    match i {
        0 => sq - j * 7,
        1 => sq - j * 9,
        2 => sq + j * 7,
        _ => sq + j * 9,
    }
}

/// A knight jump keeps the (file, rank) deltas in {(1,2), (2,1)}; anything
/// else is a board wrap.
#[inline(always)]
pub(crate) fn knight_jump_ok(from: i32, to: i32) -> bool {
    let file_diff = (to % 8 - from % 8).abs();
    let rank_diff = (to / 8 - from / 8).abs();
    (file_diff == 1 && rank_diff == 2) || (file_diff == 2 && rank_diff == 1)
}

#[inline(always)]
pub(crate) fn king_step_ok(from: i32, to: i32) -> bool {
    (file_of(from) - file_of(to)).abs() <= 1 && (rank_of(from) - rank_of(to)).abs() <= 1
}

pub fn is_square_attacked(board: &Board, sq: u8, by: Color) -> bool {
    let sq = sq as i32;

    // Pawns: a white pawn attacking `sq` sits one rank below it (higher
    // index), a black pawn one rank above.
    let pawn_dir: i32 = match by {
        Color::White => 8,
        Color::Black => -8,
    };
    let pawns = board.pieces[Piece::Pawn.index(by)];
    let t = sq + pawn_dir + 1;
    if on_board(t) && file_of(sq) < 8 && bit(pawns, t) {
        return true;
    }
    let t = sq + pawn_dir - 1;
    if on_board(t) && file_of(sq) > 1 && bit(pawns, t) {
        return true;
    }

    // Knights
    let knights = board.pieces[Piece::Knight.index(by)];
    for offset in KNIGHT_OFFSETS {
        let t = sq + offset;
        if !on_board(t) || !knight_jump_ok(sq, t) {
            continue;
        }
        if bit(knights, t) {
            return true;
        }
    }

    // Bishops / queens along diagonals; each ray stops at the first
    // occupied square or when it would wrap a file or rank boundary.
    let bishops = board.pieces[Piece::Bishop.index(by)];
    let queens = board.pieces[Piece::Queen.index(by)];
    for i in 0..4 {
        for j in 1..8 {
            let t = diagonal_step(sq, i, j);
            if !on_board(t) {
                break;
            }
            if (file_of(t) - file_of(sq)).abs() != j || (rank_of(t) - rank_of(sq)).abs() != j {
                break;
            }
            if bit(bishops, t) || bit(queens, t) {
                return true;
            }
            if bit(board.occ_all, t) {
                break;
            }
        }
    }

    // Rooks / queens along ranks and files
    let rooks = board.pieces[Piece::Rook.index(by)];
    for i in 0..4 {
        for j in 1..8 {
            let t = match i {
                0 => sq - j,
                1 => sq + j,
                2 => sq - j * 8,
                _ => sq + j * 8,
            };
            if !on_board(t) {
                break;
            }
            if i < 2 && rank_of(t) != rank_of(sq) {
                break;
            }
            if bit(rooks, t) || bit(queens, t) {
                return true;
            }
            if bit(board.occ_all, t) {
                break;
            }
        }
    }

    // Kings (adjacency)
    let king = board.pieces[Piece::King.index(by)];
    for offset in KING_OFFSETS {
        let t = sq + offset;
        if !on_board(t) || !king_step_ok(sq, t) {
            continue;
        }
        if bit(king, t) {
            return true;
        }
    }

    false
}

#[inline(always)]
pub fn in_check(board: &Board, side: Color) -> bool {
    is_square_attacked(board, board.king_square(side), side.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{B_KING, B_QUEEN, B_ROOK, W_BISHOP, W_KING, W_KNIGHT, W_PAWN};
    use crate::square::{A1, A2, A8, E1, E4, E8, H1, H2, H7, Square};

    fn sq(name: &str) -> u8 {
        name.parse::<Square>().unwrap().index()
    }

    fn kings_at(wk: u8, bk: u8) -> Board {
        let mut b = Board::new_empty();
        b.put_piece(W_KING, wk);
        b.put_piece(B_KING, bk);
        b
    }

    #[test]
    fn start_position_attack_map() {
        let b = Board::new();
        // e2 pawn guards d3 and f3
        assert!(is_square_attacked(&b, sq("d3"), Color::White));
        // nothing attacks e4 yet
        assert!(!is_square_attacked(&b, E4, Color::White));
        assert!(!is_square_attacked(&b, E4, Color::Black));
        // the knights cover the third rank
        assert!(is_square_attacked(&b, sq("a3"), Color::White));
    }

    #[test]
    fn pawn_attacks_respect_file_edges() {
        let mut b = kings_at(E1, E8);
        // white pawn on h4 attacks g5 but must not wrap across the board
        b.put_piece(W_PAWN, sq("h4"));
        assert!(is_square_attacked(&b, sq("g5"), Color::White));
        assert!(!is_square_attacked(&b, sq("a5"), Color::White));
    }

    #[test]
    fn knight_attacks_do_not_wrap() {
        let mut b = kings_at(E1, E8);
        b.put_piece(W_KNIGHT, H1);
        assert!(is_square_attacked(&b, sq("g3"), Color::White));
        assert!(is_square_attacked(&b, sq("f2"), Color::White));
        // -10 from h1 would land on b2 only by wrapping
        assert!(!is_square_attacked(&b, sq("b2"), Color::White));
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let mut b = kings_at(H2, H7);
        b.put_piece(B_ROOK, A8);
        b.put_piece(W_BISHOP, A2);
        assert!(is_square_attacked(&b, sq("a4"), Color::Black));
        // the first occupied square along the ray is still attacked
        assert!(is_square_attacked(&b, A2, Color::Black));
        // but the ray stops there
        assert!(!is_square_attacked(&b, A1, Color::Black));
    }

    #[test]
    fn check_detection_via_king_square() {
        let mut b = kings_at(E1, E8);
        b.put_piece(B_QUEEN, sq("e5"));
        assert!(in_check(&b, Color::White));
        assert!(!in_check(&b, Color::Black));
    }
}
