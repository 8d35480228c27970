//! Static evaluation of a position.
//!
//! Every row, column and diagonal is scanned as a one-dimensional line. A
//! line earns points for each maximal run of a player's stones (scaled by how
//! many of its ends are open) and extra points for split shapes that are one
//! or two moves away from five.

use crate::board::{Board, BOARD_SIZE};
use crate::player::{Cell, Role};
use crate::scores::{gap, run_score};

/// Default weight applied to the opponent's score in [`evaluate`].
pub const OPPONENT_WEIGHT: f64 = 1.1;

/// Sum of run scores for `role` along `line`. An end is open when the cell
/// just outside the run is on the line and empty.
pub fn score_line(line: &[Cell], role: Role) -> i64 {
  let stone = role.cell();
  let mut total = 0;
  let mut i = 0;
  while i < line.len() {
    if line[i] != stone {
      i += 1;
      continue;
    }
    let start = i;
    while i < line.len() && line[i] == stone {
      i += 1;
    }
    let left_open = start > 0 && line[start - 1].is_empty();
    let right_open = i < line.len() && line[i].is_empty();
    total += run_score(i - start, left_open as usize + right_open as usize);
  }
  total
}

/// [`score_line`] plus sliding-window bonuses for gapped shapes.
/// Cells already counted by a run are counted again here.
pub fn score_line_with_gaps(line: &[Cell], role: Role) -> i64 {
  let stone = role.cell();
  let count = |window: &[Cell]| {
    window.iter().fold((0, 0), |(mine, empty), &cell| {
      if cell == stone {
        (mine + 1, empty)
      } else if cell.is_empty() {
        (mine, empty + 1)
      } else {
        (mine, empty)
      }
    })
  };

  let mut extra = 0;
  for window in line.windows(5) {
    match count(window) {
      (4, 1) => extra += gap::FOUR_IN_FIVE,
      (3, 2) => extra += gap::THREE_IN_FIVE,
      _ => {}
    }
  }
  for window in line.windows(6) {
    match count(window) {
      (4, 2) => extra += gap::FOUR_IN_SIX,
      (5, 1) => extra += gap::FIVE_IN_SIX,
      _ => {}
    }
  }
  score_line(line, role) + extra
}

/// Calls `f` once for every row, column and diagonal of both families,
/// including the single-cell diagonals in the corners.
pub fn for_each_line(board: &Board, mut f: impl FnMut(&[Cell])) {
  let n = BOARD_SIZE as isize;
  let starts = (0..n)
    .flat_map(|i| [(i, 0, 0, 1), (0, i, 1, 0)])
    // "\" diagonals start on the left edge or the top edge
    .chain((0..n).map(|row| (row, 0, 1, 1)))
    .chain((1..n).map(|col| (0, col, 1, 1)))
    // "/" diagonals start on the right edge or the top edge
    .chain((0..n).map(|row| (row, n - 1, 1, -1)))
    .chain((0..n - 1).rev().map(|col| (0, col, 1, -1)));

  let mut buf = [Cell::Empty; BOARD_SIZE];
  for (mut row, mut col, dr, dc) in starts {
    let mut len = 0;
    while let Some(cell) = board.cell_at(row, col) {
      buf[len] = cell;
      len += 1;
      row += dr;
      col += dc;
    }
    f(&buf[..len]);
  }
}

/// Total line score for `role` over the whole board.
pub fn score_for(board: &Board, role: Role) -> i64 {
  let mut total = 0;
  for_each_line(board, |line| total += score_line_with_gaps(line, role));
  total
}

/// Position value from `ai`'s point of view. The opponent's score is
/// weighted by `opponent_weight` so threats against `ai` count for more than
/// its own equally strong shapes.
pub fn evaluate(board: &Board, ai: Role, opponent_weight: f64) -> f64 {
  score_for(board, ai) as f64 - opponent_weight * score_for(board, ai.opponent()) as f64
}
