//! Five-in-a-row detection around a freshly placed stone.

use crate::board::{Board, Move};
use crate::player::{Cell, Role};

/// Number of stones in a row needed to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// Vertical, horizontal, diagonal "\" and diagonal "/". When a stone
/// completes fives in several directions, the first one in this order wins.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Win(Role),
  Draw,
}

// Count same-coloured stones walking away from (row, col), excluding the start
fn count_direction(board: &Board, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
  let mut count = 0;
  let (mut r, mut c) = (row as isize + dr, col as isize + dc);
  while board.cell_at(r, c) == Some(cell) {
    count += 1;
    r += dr;
    c += dc;
  }
  count
}

/// True when the stone at (row, col) is part of a run of at least
/// [`WIN_LENGTH`] stones in any direction. Empty or off-board cells never win.
pub fn is_win_at(board: &Board, row: usize, col: usize) -> bool {
  let cell = match board.cell_at(row as isize, col as isize) {
    Some(cell) if !cell.is_empty() => cell,
    _ => return false,
  };
  DIRECTIONS.iter().any(|&(dr, dc)| {
    1 + count_direction(board, row, col, dr, dc, cell) + count_direction(board, row, col, -dr, -dc, cell) >= WIN_LENGTH
  })
}

/// The five cells to highlight for a win through (row, col), in line order.
///
/// The window is centred on the pivot where the run allows it and clamped to
/// the ends of the run otherwise, so overlines still yield exactly five cells.
pub fn winning_five_cells(board: &Board, row: usize, col: usize) -> Option<[Move; WIN_LENGTH]> {
  let cell = match board.cell_at(row as isize, col as isize) {
    Some(cell) if !cell.is_empty() => cell,
    _ => return None,
  };
  for &(dr, dc) in &DIRECTIONS {
    let back = count_direction(board, row, col, -dr, -dc, cell);
    let forward = count_direction(board, row, col, dr, dc, cell);
    let run_len = back + 1 + forward;
    if run_len < WIN_LENGTH {
      continue;
    }
    // The pivot sits at index `back` of the run
    let start = back.saturating_sub(2).min(run_len - WIN_LENGTH);
    let first = (row as isize - dr * back as isize, col as isize - dc * back as isize);
    let mut cells = [(0, 0); WIN_LENGTH];
    for (i, slot) in cells.iter_mut().enumerate() {
      let step = (start + i) as isize;
      *slot = ((first.0 + dr * step) as usize, (first.1 + dc * step) as usize);
    }
    return Some(cells);
  }
  None
}

/// Result of the game after `last_move` was played, if it ended the game.
pub fn outcome_after(board: &Board, last_move: Move) -> Option<Outcome> {
  let (row, col) = last_move;
  if is_win_at(board, row, col) {
    board.get(row, col).role().map(Outcome::Win)
  } else if board.is_full() {
    Some(Outcome::Draw)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn board_with(stones: &[(usize, usize)], role: Role) -> Board {
    let mut board = Board::new();
    for &(row, col) in stones {
      board.apply_move(row, col, role);
    }
    board
  }

  fn assert_five(cells: [Move; 5], board: &Board, pivot: Move, role: Role) {
    assert!(cells.contains(&pivot));
    for &(r, c) in &cells {
      assert_eq!(board.get(r, c), role.cell());
    }
    let (dr, dc) = (cells[1].0 as isize - cells[0].0 as isize, cells[1].1 as isize - cells[0].1 as isize);
    assert!(DIRECTIONS.contains(&(dr, dc)) || DIRECTIONS.contains(&(-dr, -dc)));
    for pair in cells.windows(2) {
      assert_eq!(pair[1].0 as isize - pair[0].0 as isize, dr);
      assert_eq!(pair[1].1 as isize - pair[0].1 as isize, dc);
    }
  }

  #[test]
  fn five_in_each_direction_wins() {
    let lines: [&[(usize, usize)]; 4] = [
      &[(3, 3), (3, 4), (3, 5), (3, 6), (3, 7)],
      &[(2, 9), (3, 9), (4, 9), (5, 9), (6, 9)],
      &[(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
      &[(4, 14), (5, 13), (6, 12), (7, 11), (8, 10)],
    ];
    for stones in lines {
      let board = board_with(stones, Role::X);
      for &(row, col) in stones {
        assert!(is_win_at(&board, row, col), "{:?} should win at ({row}, {col})", stones);
      }
    }
  }

  #[test]
  fn four_is_not_a_win() {
    let board = board_with(&[(3, 3), (3, 4), (3, 5), (3, 6)], Role::O);
    assert!(!is_win_at(&board, 3, 6));
    assert!(winning_five_cells(&board, 3, 6).is_none());
  }

  #[test]
  fn interrupted_run_is_not_a_win() {
    let mut board = board_with(&[(3, 3), (3, 4), (3, 6), (3, 7)], Role::O);
    board.apply_move(3, 5, Role::X);
    assert!(!is_win_at(&board, 3, 7));
    assert!(!is_win_at(&board, 3, 5));
  }

  #[test]
  fn empty_or_off_board_cell_never_wins() {
    let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Role::X);
    assert!(!is_win_at(&board, 5, 5));
    assert!(!is_win_at(&board, 16, 0));
    assert!(winning_five_cells(&board, 5, 5).is_none());
  }

  #[test]
  fn overline_wins_and_yields_five_cells() {
    let stones: Vec<(usize, usize)> = (2..9).map(|col| (6, col)).collect();
    let board = board_with(&stones, Role::X);
    for &pivot in &stones {
      assert!(is_win_at(&board, pivot.0, pivot.1));
      let cells = winning_five_cells(&board, pivot.0, pivot.1).unwrap();
      assert_five(cells, &board, pivot, Role::X);
    }
  }

  #[test]
  fn window_is_centred_on_the_pivot_when_possible() {
    let stones: Vec<(usize, usize)> = (0..9).map(|i| (i, i)).collect();
    let board = board_with(&stones, Role::O);
    let cells = winning_five_cells(&board, 4, 4).unwrap();
    assert_eq!(cells, [(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);

    // Clamped to the start and the end of the run
    assert_eq!(winning_five_cells(&board, 0, 0).unwrap()[0], (0, 0));
    assert_eq!(winning_five_cells(&board, 8, 8).unwrap()[4], (8, 8));
  }

  #[test]
  fn anti_diagonal_cells_are_in_line_order() {
    let stones = [(4, 14), (5, 13), (6, 12), (7, 11), (8, 10)];
    let board = board_with(&stones, Role::X);
    let cells = winning_five_cells(&board, 6, 12).unwrap();
    assert_eq!(cells, [(4, 14), (5, 13), (6, 12), (7, 11), (8, 10)]);
    assert_five(cells, &board, (6, 12), Role::X);
  }

  #[test]
  fn crossing_fives_report_the_vertical_line() {
    let board = board_with(
      &[(7, 5), (7, 6), (7, 7), (7, 8), (7, 9), (5, 7), (6, 7), (8, 7), (9, 7)],
      Role::X,
    );
    assert_eq!(winning_five_cells(&board, 7, 7), Some([(5, 7), (6, 7), (7, 7), (8, 7), (9, 7)]));
    // Away from the crossing only the horizontal line exists
    assert_eq!(winning_five_cells(&board, 7, 5), Some([(7, 5), (7, 6), (7, 7), (7, 8), (7, 9)]));
  }

  #[test]
  fn outcome_reports_the_winner() {
    let board = board_with(&[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)], Role::O);
    assert_eq!(outcome_after(&board, (1, 5)), Some(Outcome::Win(Role::O)));

    let board = board_with(&[(1, 1)], Role::O);
    assert_eq!(outcome_after(&board, (1, 1)), None);
  }
}
