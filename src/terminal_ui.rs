use crossterm::{
  cursor::{Hide, MoveTo, Show},
  event::{read, Event, KeyCode, KeyEvent, KeyEventKind},
  execute, queue,
  style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
  terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::board::{Board, Move, BOARD_SIZE};
use crate::player::{Cell, Role};
use crate::rules::WIN_LENGTH;
use std::io::{stdout, Result as IoResult, Write};

// Actions the player can trigger from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
  None,       // No action
  Quit,       // Quit the game
  NewGame,    // Start over
  Undo,       // Take back the last move
  MoveLeft,   // Move left
  MoveRight,  // Move right
  MoveUp,     // Move up
  MoveDown,   // Move down
  PlaceStone, // Place stone
}

impl GameAction {
  pub fn from_key(code: KeyCode) -> Self {
    match code {
      KeyCode::Esc | KeyCode::Char('q') => GameAction::Quit,
      KeyCode::Char('n') => GameAction::NewGame,
      KeyCode::Backspace | KeyCode::Char('u') => GameAction::Undo,
      KeyCode::Left => GameAction::MoveLeft,
      KeyCode::Right => GameAction::MoveRight,
      KeyCode::Up => GameAction::MoveUp,
      KeyCode::Down => GameAction::MoveDown,
      KeyCode::Enter | KeyCode::Char(' ') => GameAction::PlaceStone,
      _ => GameAction::None,
    }
  }
}

pub struct TerminalUI {
  /// Last message, redrawn below the board after every frame.
  last_message: String,
}

impl Default for TerminalUI {
  fn default() -> Self {
    Self::new()
  }
}

impl TerminalUI {
  /// "Light green" for the cursor
  const CURSOR_COLOR: Color = Color::Rgb { r: 120, g: 255, b: 120 };
  /// Background of the last stone, per role
  const LAST_X_COLOR: Color = Color::Rgb { r: 207, g: 246, b: 209 };
  const LAST_O_COLOR: Color = Color::Rgb { r: 214, g: 230, b: 255 };
  /// Background of the winning five
  const WIN_COLOR: Color = Color::Rgb { r: 255, g: 217, b: 102 };
  const STONE_X_COLOR: Color = Color::Rgb { r: 26, g: 26, b: 26 };
  const STONE_O_COLOR: Color = Color::Rgb { r: 26, g: 75, b: 154 };

  pub fn new() -> Self {
    Self {
      last_message: String::new(),
    }
  }

  pub fn init_screen(&mut self) -> IoResult<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
  }

  pub fn restore_terminal(&mut self) -> IoResult<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }

  // Block until a key is pressed and map it to an action
  pub fn read_input(&mut self) -> GameAction {
    match read() {
      Ok(Event::Key(KeyEvent {
        code,
        kind: KeyEventKind::Press,
        ..
      })) => GameAction::from_key(code),
      _ => GameAction::None,
    }
  }

  /// Set (and immediately draw) a new message
  pub fn show_message(&mut self, msg: &str) {
    self.last_message = msg.to_string();
    self.draw_message().ok();
  }

  fn draw_message(&mut self) -> IoResult<()> {
    let (cols, rows) = size().unwrap_or((80, 24));
    let y = rows.saturating_sub(2);

    let msg_len = self.last_message.chars().count() as u16;
    let x = cols.saturating_sub(msg_len) / 2;

    let mut out = stdout();
    queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine), MoveTo(x, y), Print(&self.last_message))?;
    out.flush()
  }

  pub fn draw_board(
    &mut self,
    board: &Board,
    cursor_row: usize,
    cursor_col: usize,
    last_move: Option<(Move, Role)>,
    winning_line: Option<&[Move; WIN_LENGTH]>,
  ) -> IoResult<()> {
    let (cols, rows) = size().unwrap_or((80, 24));

    let cell_width: u16 = 3;
    let used_width = BOARD_SIZE as u16 * cell_width;
    let used_height = BOARD_SIZE as u16 + 1;

    // Offsets that centre the board, leaving room for the top border
    let offset_x = cols.saturating_sub(used_width + 4) / 2;
    let offset_y = rows.saturating_sub(used_height + 2) / 2 + 1;

    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    // Column numbers
    queue!(out, MoveTo(offset_x + 3, offset_y.saturating_sub(1)))?;
    for col in 0..BOARD_SIZE {
      queue!(out, Print(format!("{:<3}", col)))?;
    }

    for row in 0..BOARD_SIZE {
      queue!(out, MoveTo(offset_x, offset_y + row as u16), Print(format!("{:>2} ", row)))?;
      for col in 0..BOARD_SIZE {
        let cell = board.get(row, col);
        let is_cursor = (row, col) == (cursor_row, cursor_col);
        let is_winning = winning_line.is_some_and(|line| line.contains(&(row, col)));

        let background = match last_move {
          _ if is_winning => Some(Self::WIN_COLOR),
          Some((mv, Role::X)) if mv == (row, col) => Some(Self::LAST_X_COLOR),
          Some((mv, Role::O)) if mv == (row, col) => Some(Self::LAST_O_COLOR),
          _ => None,
        };
        let (symbol, foreground) = match cell {
          Cell::Empty if is_cursor => ('+', Some(Self::CURSOR_COLOR)),
          Cell::Empty => ('.', None),
          _ if is_cursor => (cell.symbol(), Some(Self::CURSOR_COLOR)),
          Cell::X => ('X', background.map(|_| Self::STONE_X_COLOR)),
          Cell::O => ('O', Some(Self::STONE_O_COLOR)),
        };

        if let Some(color) = background {
          queue!(out, SetBackgroundColor(color))?;
        }
        if let Some(color) = foreground {
          queue!(out, SetForegroundColor(color))?;
        }
        queue!(out, Print(symbol), ResetColor, Print("  "))?;
      }
    }
    out.flush()?;

    // Redraw the saved message so the board never hides it
    self.draw_message()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_map_to_actions() {
    assert_eq!(GameAction::from_key(KeyCode::Char('q')), GameAction::Quit);
    assert_eq!(GameAction::from_key(KeyCode::Esc), GameAction::Quit);
    assert_eq!(GameAction::from_key(KeyCode::Enter), GameAction::PlaceStone);
    assert_eq!(GameAction::from_key(KeyCode::Char(' ')), GameAction::PlaceStone);
    assert_eq!(GameAction::from_key(KeyCode::Backspace), GameAction::Undo);
    assert_eq!(GameAction::from_key(KeyCode::Char('n')), GameAction::NewGame);
    assert_eq!(GameAction::from_key(KeyCode::Left), GameAction::MoveLeft);
    assert_eq!(GameAction::from_key(KeyCode::Char('z')), GameAction::None);
  }
}
