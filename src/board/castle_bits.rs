//! Castling rights bitfield: bit 0 = White kingside, 1 = White queenside,
//! 2 = Black kingside, 3 = Black queenside.

pub const CASTLE_WK: u8 = 1 << 0;
pub const CASTLE_WQ: u8 = 1 << 1;
pub const CASTLE_BK: u8 = 1 << 2;
pub const CASTLE_BQ: u8 = 1 << 3;

pub const CASTLE_ALL: u8 = CASTLE_WK | CASTLE_WQ | CASTLE_BK | CASTLE_BQ;
