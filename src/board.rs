use crate::player::{Cell, Role};
use std::fmt;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 16;
/// A move must lie within this Chebyshev distance of an existing stone.
pub const PROXIMITY_RADIUS: usize = 2;

/// (row, column), zero-indexed.
pub type Move = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
  #[error("({0}, {1}) is outside the board")]
  OutOfBounds(usize, usize),
  #[error("({0}, {1}) is already occupied")]
  Occupied(usize, usize),
  #[error("({0}, {1}) is too far from the stones on the board")]
  NotNearStones(usize, usize),
  #[error("the game is already over")]
  GameOver,
}

// Bounds check for signed coordinates produced by direction walks
pub fn inside(row: isize, col: isize) -> bool {
  row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

#[derive(Clone)]
pub struct Board {
  cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
  stones: usize,                      // Number of occupied cells
  history: Vec<(usize, usize, Role)>, // Moves played through apply_move, in order
}

impl Default for Board {
  fn default() -> Self {
    Self::new()
  }
}

impl Board {
  // Create an empty board
  pub fn new() -> Self {
    Self {
      cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
      stones: 0,
      history: Vec::new(),
    }
  }

  pub fn get(&self, row: usize, col: usize) -> Cell {
    self.cells[row][col]
  }

  /// Cell at a signed coordinate, `None` when it falls off the board.
  pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
    if inside(row, col) {
      Some(self.cells[row as usize][col as usize])
    } else {
      None
    }
  }

  pub fn has_any_stone(&self) -> bool {
    self.stones > 0
  }

  pub fn is_full(&self) -> bool {
    self.stones == BOARD_SIZE * BOARD_SIZE
  }

  pub fn stone_count(&self) -> usize {
    self.stones
  }

  /// A move is legal on an empty in-bounds cell that has a stone within
  /// [`PROXIMITY_RADIUS`] of it. The very first move may go anywhere.
  pub fn is_legal(&self, row: usize, col: usize) -> bool {
    self.check_legal(row, col).is_ok()
  }

  pub fn check_legal(&self, row: usize, col: usize) -> Result<(), MoveError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
      return Err(MoveError::OutOfBounds(row, col));
    }
    if !self.cells[row][col].is_empty() {
      return Err(MoveError::Occupied(row, col));
    }
    if !self.has_any_stone() || self.has_stone_near(row, col, PROXIMITY_RADIUS) {
      Ok(())
    } else {
      Err(MoveError::NotNearStones(row, col))
    }
  }

  // Any stone inside the (2 * radius + 1) square around (row, col), clipped to the grid
  pub fn has_stone_near(&self, row: usize, col: usize, radius: usize) -> bool {
    (row.saturating_sub(radius)..=(row + radius).min(BOARD_SIZE - 1))
      .any(|r| (col.saturating_sub(radius)..=(col + radius).min(BOARD_SIZE - 1)).any(|c| !self.cells[r][c].is_empty()))
  }

  /// Place a stone without checking the proximity rule and record it in the
  /// history. The cell must be empty: playing on an occupied cell is a caller
  /// error and trips a debug assertion.
  pub fn apply_move(&mut self, row: usize, col: usize, role: Role) {
    debug_assert!(self.cells[row][col].is_empty(), "({row}, {col}) is already occupied");
    self.set(row, col, role.cell());
    self.history.push((row, col, role));
  }

  /// Checked placement for callers that have not validated the move.
  pub fn place(&mut self, row: usize, col: usize, role: Role) -> Result<(), MoveError> {
    self.check_legal(row, col)?;
    self.apply_move(row, col, role);
    Ok(())
  }

  // Undo the last recorded move
  pub fn undo(&mut self) -> Option<(usize, usize, Role)> {
    let (row, col, role) = self.history.pop()?;
    self.set(row, col, Cell::Empty);
    Some((row, col, role))
  }

  pub fn history(&self) -> &[(usize, usize, Role)] {
    &self.history
  }

  /// Tentatively place a stone for the lifetime of the returned guard.
  /// Dropping the guard empties the cell again, so every exit path of a
  /// search branch restores the board. Guarded stones are not recorded in
  /// the history.
  pub fn play_scoped(&mut self, row: usize, col: usize, role: Role) -> MoveGuard<'_> {
    debug_assert!(self.cells[row][col].is_empty(), "({row}, {col}) is already occupied");
    self.set(row, col, role.cell());
    MoveGuard { board: self, row, col }
  }

  fn set(&mut self, row: usize, col: usize, cell: Cell) {
    let was_empty = self.cells[row][col].is_empty();
    self.cells[row][col] = cell;
    match (was_empty, cell.is_empty()) {
      (true, false) => self.stones += 1,
      (false, true) => self.stones -= 1,
      _ => {}
    }
  }
}

pub struct MoveGuard<'a> {
  board: &'a mut Board,
  row: usize,
  col: usize,
}

impl MoveGuard<'_> {
  pub fn position(&self) -> Move {
    (self.row, self.col)
  }
}

impl Deref for MoveGuard<'_> {
  type Target = Board;

  fn deref(&self) -> &Board {
    self.board
  }
}

impl DerefMut for MoveGuard<'_> {
  fn deref_mut(&mut self) -> &mut Board {
    self.board
  }
}

impl Drop for MoveGuard<'_> {
  fn drop(&mut self) {
    self.board.set(self.row, self.col, Cell::Empty);
  }
}

impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..BOARD_SIZE {
      write!(f, "{:3}", col)?;
    }
    writeln!(f)?;
    for (row, cells) in self.cells.iter().enumerate() {
      write!(f, "{:2} ", row)?;
      for cell in cells {
        write!(f, "  {}", cell.symbol())?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl fmt::Debug for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Board({} stones)\n{}", self.stones, self)
  }
}
