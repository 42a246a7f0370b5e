pub mod eval;
pub mod ordering;
pub mod search;
pub mod tt;
