//! Score tables for the line heuristic.

#[rustfmt::skip]
pub mod run {
  pub const FIVE: i64            = 1_000_000;

  pub const OPEN_FOUR: i64       = 100_000;
  pub const SEMIOPEN_FOUR: i64   = 10_000;

  pub const OPEN_THREE: i64      = 5_000;
  pub const SEMIOPEN_THREE: i64  = 500;

  pub const OPEN_TWO: i64        = 200;
  pub const SEMIOPEN_TWO: i64    = 50;

  pub const OPEN_ONE: i64        = 10;
  pub const SEMIOPEN_ONE: i64    = 1;

  pub const CLOSED: i64          = 0;
}

// Bonuses for split shapes found by sliding windows over a line
#[rustfmt::skip]
pub mod gap {
  pub const FOUR_IN_FIVE: i64    = 25_000; // 4 stones + 1 empty in 5 cells
  pub const THREE_IN_FIVE: i64   = 1_200;  // 3 stones + 2 empty in 5 cells
  pub const FOUR_IN_SIX: i64     = 4_000;  // 4 stones + 2 empty in 6 cells
  pub const FIVE_IN_SIX: i64     = 60_000; // 5 stones + 1 empty in 6 cells
}

/// Score of a maximal run of `len` stones with `open_ends` (0, 1 or 2)
/// empty cells directly next to it.
pub fn run_score(len: usize, open_ends: usize) -> i64 {
  match (len, open_ends) {
    (0, _) => 0,
    (5.., _) => run::FIVE,
    (4, 2) => run::OPEN_FOUR,
    (4, 1) => run::SEMIOPEN_FOUR,
    (3, 2) => run::OPEN_THREE,
    (3, 1) => run::SEMIOPEN_THREE,
    (2, 2) => run::OPEN_TWO,
    (2, 1) => run::SEMIOPEN_TWO,
    (1, 2) => run::OPEN_ONE,
    (1, 1) => run::SEMIOPEN_ONE,
    _ => run::CLOSED,
  }
}
