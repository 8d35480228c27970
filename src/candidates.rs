use crate::board::{Board, Move, BOARD_SIZE};

/// Opening move when the board is empty.
pub const CENTER: Move = (BOARD_SIZE / 2 - 1, BOARD_SIZE / 2 - 1);

/// Empty cells worth searching: everything within `radius` (Chebyshev) of a
/// stone that is also a legal move. On an empty board this is just the
/// centre. If nothing qualifies, every legal empty cell is returned instead,
/// which can be empty when no legal move is left.
///
/// The order is row-major, but callers must not rely on it for anything
/// beyond reproducibility.
pub fn candidate_moves(board: &Board, radius: usize) -> Vec<Move> {
  if !board.has_any_stone() {
    return vec![CENTER];
  }

  // Anything wider than the board covers the whole board
  let radius = radius.min(BOARD_SIZE);
  let mut marked = [[false; BOARD_SIZE]; BOARD_SIZE];
  for row in 0..BOARD_SIZE {
    for col in 0..BOARD_SIZE {
      if board.get(row, col).is_empty() {
        continue;
      }
      for r in row.saturating_sub(radius)..=(row + radius).min(BOARD_SIZE - 1) {
        for c in col.saturating_sub(radius)..=(col + radius).min(BOARD_SIZE - 1) {
          if board.get(r, c).is_empty() {
            marked[r][c] = true;
          }
        }
      }
    }
  }

  let mut moves = Vec::new();
  for (row, cols) in marked.iter().enumerate() {
    for (col, &near) in cols.iter().enumerate() {
      if near && board.is_legal(row, col) {
        moves.push((row, col));
      }
    }
  }
  if moves.is_empty() {
    moves = empty_cells(board);
    moves.retain(|&(row, col)| board.is_legal(row, col));
  }
  moves
}

pub fn empty_cells(board: &Board) -> Vec<Move> {
  (0..BOARD_SIZE)
    .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
    .filter(|&(row, col)| board.get(row, col).is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::player::Role;
  use std::collections::HashSet;

  #[test]
  fn empty_board_offers_only_the_centre() {
    assert_eq!(candidate_moves(&Board::new(), 2), vec![(7, 7)]);
  }

  #[test]
  fn single_stone_offers_its_neighbourhood() {
    let mut board = Board::new();
    board.apply_move(7, 7, Role::X);
    let moves = candidate_moves(&board, 2);

    assert_eq!(moves.len(), 24);
    assert!(!moves.contains(&(7, 7)));
    for &(row, col) in &moves {
      assert!(row.abs_diff(7) <= 2 && col.abs_diff(7) <= 2);
      assert!(board.is_legal(row, col));
    }
  }

  #[test]
  fn neighbourhoods_are_deduplicated_and_clipped() {
    let mut board = Board::new();
    board.apply_move(0, 0, Role::X);
    board.apply_move(0, 1, Role::O);
    let moves = candidate_moves(&board, 2);

    // Rows 0..=2 and columns 0..=3, minus the two stones
    assert_eq!(moves.len(), 3 * 4 - 2);
    let unique: HashSet<Move> = moves.iter().copied().collect();
    assert_eq!(unique.len(), moves.len());
  }

  #[test]
  fn smaller_radius_shrinks_the_set() {
    let mut board = Board::new();
    board.apply_move(7, 7, Role::X);
    assert_eq!(candidate_moves(&board, 1).len(), 8);
  }

  #[test]
  fn zero_radius_falls_back_to_legal_cells_only() {
    let mut board = Board::new();
    board.apply_move(7, 7, Role::X);
    let moves = candidate_moves(&board, 0);

    assert_eq!(moves.len(), 24);
    assert!(moves.iter().all(|&(row, col)| board.is_legal(row, col)));
  }

  #[test]
  fn full_board_has_no_candidates() {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
      for col in 0..BOARD_SIZE {
        let role = if (row + col) % 2 == 0 { Role::X } else { Role::O };
        board.apply_move(row, col, role);
      }
    }
    assert!(candidate_moves(&board, 2).is_empty());
    assert!(candidate_moves(&board, 0).is_empty());

    board.undo();
    assert_eq!(candidate_moves(&board, 0), vec![(15, 15)]);
  }

  #[test]
  fn huge_radius_covers_the_board_without_overflow() {
    let mut board = Board::new();
    board.apply_move(7, 7, Role::X);
    assert_eq!(candidate_moves(&board, usize::MAX).len(), 24);
  }

  #[test]
  fn empty_cells_lists_every_free_cell() {
    let mut board = Board::new();
    board.apply_move(3, 4, Role::O);
    let cells = empty_cells(&board);
    assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE - 1);
    assert!(!cells.contains(&(3, 4)));
  }
}
