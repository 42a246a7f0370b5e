use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};

// Fixed seed: identical positions must hash identically across runs, so the
// transposition table stays meaningful between games in one process and the
// engine behaves reproducibly under test.
const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

/// Per piece-index, per square keys plus the side-to-move term.
///
/// The key deliberately has no castling-rights or en-passant components:
/// positions differing only in those attributes share a key. The probe-side
/// key-equality check still rejects genuine collisions.
pub struct ZobristKeys {
    /// `[piece_index][square]` with the wpawn..bking ordering of
    /// `crate::board` and `a8 = 0` squares.
    pub piece: [[u64; 64]; 12],
    pub side_to_move: u64,
}

/// Global keys, initialized on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_zobrist_keys_with_rng(StdRng::seed_from_u64(ZOBRIST_SEED)))
}

fn generate_zobrist_keys_with_rng(mut rng: StdRng) -> ZobristKeys {
    #[inline]
    fn non_zero(r: &mut StdRng) -> u64 {
        // avoid zero keys to reduce degenerate collisions
        let mut v = r.next_u64();
        while v == 0 {
            v = r.next_u64();
        }
        v
    }

    let mut keys = ZobristKeys {
        piece: [[0u64; 64]; 12],
        side_to_move: 0,
    };

    for p in 0..12 {
        for sq in 0..64 {
            keys.piece[p][sq] = non_zero(&mut rng);
        }
    }

    // side to move (XOR when Black to move)
    keys.side_to_move = non_zero(&mut rng);

    keys
}
