#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
  Human,
  AI,
}

// Role of the stone. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  X,
  O,
}

impl Role {
  // Get the opponent's role
  pub fn opponent(&self) -> Role {
    match self {
      Role::X => Role::O,
      Role::O => Role::X,
    }
  }

  // The cell value a stone of this role leaves on the board
  pub fn cell(&self) -> Cell {
    match self {
      Role::X => Cell::X,
      Role::O => Cell::O,
    }
  }

  pub fn symbol(&self) -> char {
    match self {
      Role::X => 'X',
      Role::O => 'O',
    }
  }
}

/// Content of a single board intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
  #[default]
  Empty,
  X,
  O,
}

impl Cell {
  pub fn is_empty(&self) -> bool {
    *self == Cell::Empty
  }

  // Owner of the stone, if any
  pub fn role(&self) -> Option<Role> {
    match self {
      Cell::Empty => None,
      Cell::X => Some(Role::X),
      Cell::O => Some(Role::O),
    }
  }

  pub fn symbol(&self) -> char {
    match self {
      Cell::Empty => '.',
      Cell::X => 'X',
      Cell::O => 'O',
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
  pub player_type: PlayerType,
  pub role: Role,
}
