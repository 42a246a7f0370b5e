//! Pseudo-legal move generation. "Pseudo-legal" means the mover's own king
//! safety is not verified here — callers filter with make/in_check/unmake —
//! with one exception: king moves are checked against the attack oracle at
//! generation time, and castling paths are fully validated.

use crate::board::{Board, Color, Piece};
use crate::moves::attacks::{
    KING_OFFSETS, KNIGHT_OFFSETS, diagonal_step, is_square_attacked, king_step_ok, knight_jump_ok,
};
use crate::moves::types::{
    BISHOP_PROMO, CAPTURE, DOUBLE_PAWN_PUSH, EN_PASSANT, KING_CASTLE, KNIGHT_PROMO, MAX_MOVES,
    Move, MoveBuffer, QUEEN_CASTLE, QUEEN_PROMO, QUIET, ROOK_PROMO,
};
use crate::square::{A1, A8, E1, E8, H1, H8};
use crate::utils::{bit, file_of, on_board, pop_lsb, rank_of};

// The four promotion flags in generation order: knight, bishop, rook, queen.
// Promotion captures sit four flag values higher.
const PROMO_FLAGS: [u8; 4] = [KNIGHT_PROMO, BISHOP_PROMO, ROOK_PROMO, QUEEN_PROMO];

/// Push one move, clamped to the buffer capacity. Generation can never
/// exceed 256 moves from a reachable position; the clamp is the
/// defence-in-depth guarantee.
#[inline(always)]
fn push_move(list: &mut impl MoveBuffer, from: i32, to: i32, flag: u8) {
    if list.len() < MAX_MOVES {
        list.push(Move::new(from as u8, to as u8, flag));
    }
}

/// All pseudo-legal moves for the side to move, written into `list`.
pub fn generate_pseudo_legal(board: &Board, list: &mut impl MoveBuffer) {
    list.clear();
    generate_pawn_moves(board, list);
    generate_knight_moves(board, list);
    generate_bishop_moves(board, list);
    generate_rook_moves(board, list);
    generate_queen_moves(board, list);
    generate_king_moves(board, list);
}

pub fn generate_pawn_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp_occ = board.opponent_occupancy(color);

    // White pawns move toward lower indices, black toward higher. The home
    // rank, the promotion rank and the en-passant rank follow the colour.
    let (forward, home_rank, promo_rank, ep_rank): (i32, i32, i32, i32) = match color {
        Color::White => (-8, 2, 7, 5),
        Color::Black => (8, 7, 2, 4),
    };

    // En passant only exists immediately after the opponent's double push.
    let ep_to = board
        .last_move(color.opposite())
        .filter(|last| last.flag() == DOUBLE_PAWN_PUSH)
        .map(|last| last.to_sq() as i32);

    let mut pawns = board.pieces[Piece::Pawn.index(color)];
    while pawns != 0 {
        let from = pop_lsb(&mut pawns) as i32;
        let rank = rank_of(from);
        let file = file_of(from);

        // Single push
        if rank != promo_rank && !bit(board.occ_all, from + forward) {
            push_move(list, from, from + forward, QUIET);
        }

        // Double push from the home rank
        if rank == home_rank
            && !bit(board.occ_all, from + forward)
            && !bit(board.occ_all, from + 2 * forward)
        {
            push_move(list, from, from + 2 * forward, DOUBLE_PAWN_PUSH);
        }

        // Diagonal captures
        if rank != promo_rank && file > 1 && bit(opp_occ, from + forward - 1) {
            push_move(list, from, from + forward - 1, CAPTURE);
        }
        if rank != promo_rank && file < 8 && bit(opp_occ, from + forward + 1) {
            push_move(list, from, from + forward + 1, CAPTURE);
        }

        // En passant: the opponent's double push must have landed right next
        // to this pawn, and this pawn must be on the en-passant rank.
        if rank == ep_rank {
            if file > 1 && ep_to == Some(from - 1) {
                push_move(list, from, from + forward - 1, EN_PASSANT);
            }
            if file < 8 && ep_to == Some(from + 1) {
                push_move(list, from, from + forward + 1, EN_PASSANT);
            }
        }

        // Promotions: one pawn step becomes four moves (N, B, R, Q)
        if rank == promo_rank {
            if !bit(board.occ_all, from + forward) {
                for flag in PROMO_FLAGS {
                    push_move(list, from, from + forward, flag);
                }
            }
            if file > 1 && bit(opp_occ, from + forward - 1) {
                for flag in PROMO_FLAGS {
                    push_move(list, from, from + forward - 1, flag + 4);
                }
            }
            if file < 8 && bit(opp_occ, from + forward + 1) {
                for flag in PROMO_FLAGS {
                    push_move(list, from, from + forward + 1, flag + 4);
                }
            }
        }
    }
}

pub fn generate_knight_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp_occ = board.opponent_occupancy(color);

    let mut knights = board.pieces[Piece::Knight.index(color)];
    while knights != 0 {
        let from = pop_lsb(&mut knights) as i32;
        for offset in KNIGHT_OFFSETS {
            let to = from + offset;
            if !on_board(to) || !knight_jump_ok(from, to) {
                continue;
            }
            if !bit(board.occ_all, to) {
                push_move(list, from, to, QUIET);
            } else if bit(opp_occ, to) {
                push_move(list, from, to, CAPTURE);
            }
        }
    }
}

/// Walk one sliding ray, emitting quiet moves until the first occupied
/// square; an enemy there becomes a capture, a friend ends the ray.
#[inline(always)]
fn slide_ray(
    board: &Board,
    opp_occ: u64,
    from: i32,
    step: impl Fn(i32) -> i32,
    wrap_ok: impl Fn(i32, i32) -> bool,
    list: &mut impl MoveBuffer,
) {
    for j in 1..8 {
        let to = step(j);
        if !on_board(to) || !wrap_ok(to, j) {
            break;
        }
        if !bit(board.occ_all, to) {
            push_move(list, from, to, QUIET);
        } else if bit(opp_occ, to) {
            push_move(list, from, to, CAPTURE);
            break;
        } else {
            break;
        }
    }
}

fn slide_diagonals(board: &Board, opp_occ: u64, from: i32, list: &mut impl MoveBuffer) {
    for i in 0..4 {
        slide_ray(
            board,
            opp_occ,
            from,
            |j| diagonal_step(from, i, j),
            |to, j| {
                (file_of(to) - file_of(from)).abs() == j && (rank_of(to) - rank_of(from)).abs() == j
            },
            list,
        );
    }
}

fn slide_orthogonals(board: &Board, opp_occ: u64, from: i32, list: &mut impl MoveBuffer) {
    for i in 0..4 {
        slide_ray(
            board,
            opp_occ,
            from,
            |j| match i {
                0 => from - j,
                1 => from + j,
                2 => from - j * 8,
                _ => from + j * 8,
            },
            |to, _| i >= 2 || rank_of(to) == rank_of(from),
            list,
        );
    }
}

pub fn generate_bishop_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp_occ = board.opponent_occupancy(color);
    let mut bishops = board.pieces[Piece::Bishop.index(color)];
    while bishops != 0 {
        let from = pop_lsb(&mut bishops) as i32;
        slide_diagonals(board, opp_occ, from, list);
    }
}

pub fn generate_rook_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp_occ = board.opponent_occupancy(color);
    let mut rooks = board.pieces[Piece::Rook.index(color)];
    while rooks != 0 {
        let from = pop_lsb(&mut rooks) as i32;
        slide_orthogonals(board, opp_occ, from, list);
    }
}

pub fn generate_queen_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp_occ = board.opponent_occupancy(color);
    let mut queens = board.pieces[Piece::Queen.index(color)];
    while queens != 0 {
        let from = pop_lsb(&mut queens) as i32;
        slide_orthogonals(board, opp_occ, from, list);
        slide_diagonals(board, opp_occ, from, list);
    }
}

/// King moves are generated almost-legal: each destination is rejected if the
/// opponent attacks it under the current occupancy. Castling additionally
/// requires the rights, the king and rook on their home squares, an empty
/// span, and an unattacked king path. Queen-side needs the b-file square
/// empty but its attacked status is not tested.
pub fn generate_king_moves(board: &Board, list: &mut impl MoveBuffer) {
    let color = board.side_to_move;
    let opp = color.opposite();
    let opp_occ = board.opponent_occupancy(color);
    let king_bb = board.pieces[Piece::King.index(color)];
    if king_bb == 0 {
        return; // illegal position safeguard
    }
    let from = king_bb.trailing_zeros() as i32;

    for offset in KING_OFFSETS {
        let to = from + offset;
        if !on_board(to) || !king_step_ok(from, to) {
            continue;
        }
        if is_square_attacked(board, to as u8, opp) {
            continue;
        }
        if !bit(board.occ_all, to) {
            push_move(list, from, to, QUIET);
        } else if bit(opp_occ, to) {
            push_move(list, from, to, CAPTURE);
        }
    }

    let (home, rook_ks, rook_qs) = match color {
        Color::White => (E1 as i32, H1 as i32, A1 as i32),
        Color::Black => (E8 as i32, H8 as i32, A8 as i32),
    };
    if from != home {
        return;
    }
    let rooks = board.pieces[Piece::Rook.index(color)];

    // King side: f- and g-file squares empty, e/f/g unattacked
    if board.has_kingside_castle(color)
        && bit(rooks, rook_ks)
        && !bit(board.occ_all, from + 1)
        && !bit(board.occ_all, from + 2)
        && !is_square_attacked(board, from as u8, opp)
        && !is_square_attacked(board, (from + 1) as u8, opp)
        && !is_square_attacked(board, (from + 2) as u8, opp)
    {
        push_move(list, from, from + 2, KING_CASTLE);
    }

    // Queen side: b/c/d squares empty, e/d/c unattacked
    if board.has_queenside_castle(color)
        && bit(rooks, rook_qs)
        && !bit(board.occ_all, from - 1)
        && !bit(board.occ_all, from - 2)
        && !bit(board.occ_all, from - 3)
        && !is_square_attacked(board, from as u8, opp)
        && !is_square_attacked(board, (from - 1) as u8, opp)
        && !is_square_attacked(board, (from - 2) as u8, opp)
    {
        push_move(list, from, from - 2, QUEEN_CASTLE);
    }
}
