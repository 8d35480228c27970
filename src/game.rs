use crate::ai::{AIEngine, MoveChoice};
use crate::board::{Board, Move, MoveError, BOARD_SIZE};
use crate::candidates::CENTER;
use crate::config::EngineConfig;
use crate::player::{Player, PlayerType, Role};
use crate::rules::{outcome_after, winning_five_cells, Outcome, WIN_LENGTH};
use crate::terminal_ui::{GameAction, TerminalUI};
use log::{info, warn};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
  AIvAI,
  AIvHuman,
  HumanvHuman,
}

pub struct Game {
  pub board: Board,
  pub mode: GameMode,

  pub player_x: Player,
  pub player_o: Player,

  engine_x: Option<AIEngine>,
  engine_o: Option<AIEngine>,

  // Cursor for human moves
  pub cursor_row: usize,
  pub cursor_col: usize,

  pub current_role: Role,
  pub last_move: Option<(Move, Role)>,
  pub outcome: Option<Outcome>,
  pub winning_line: Option<[Move; WIN_LENGTH]>,
  pub round: u32,
}

impl Game {
  /// New game with X to move. In `AIvHuman` the human plays `human`.
  /// A `seed` makes the engines' tie-breaks reproducible.
  pub fn new(mode: GameMode, human: Role, config: EngineConfig, seed: Option<u64>) -> Self {
    let player_type = |role: Role| match mode {
      GameMode::HumanvHuman => PlayerType::Human,
      GameMode::AIvAI => PlayerType::AI,
      GameMode::AIvHuman if role == human => PlayerType::Human,
      GameMode::AIvHuman => PlayerType::AI,
    };
    let engine = |role: Role, offset: u64| match (player_type(role), seed) {
      (PlayerType::Human, _) => None,
      (PlayerType::AI, Some(seed)) => Some(AIEngine::seeded(role, config, seed.wrapping_add(offset))),
      (PlayerType::AI, None) => Some(AIEngine::new(role, config)),
    };

    Self {
      board: Board::new(),
      mode,
      player_x: Player {
        player_type: player_type(Role::X),
        role: Role::X,
      },
      player_o: Player {
        player_type: player_type(Role::O),
        role: Role::O,
      },
      engine_x: engine(Role::X, 0),
      engine_o: engine(Role::O, 1),
      cursor_row: CENTER.0,
      cursor_col: CENTER.1,
      current_role: Role::X,
      last_move: None,
      outcome: None,
      winning_line: None,
      round: 1,
    }
  }

  pub fn player(&self, role: Role) -> &Player {
    match role {
      Role::X => &self.player_x,
      Role::O => &self.player_o,
    }
  }

  pub fn is_over(&self) -> bool {
    self.outcome.is_some()
  }

  // Start over on an empty board, keeping players and engines
  pub fn reset(&mut self) {
    self.board = Board::new();
    self.current_role = Role::X;
    self.last_move = None;
    self.outcome = None;
    self.winning_line = None;
    self.round = 1;
    self.cursor_row = CENTER.0;
    self.cursor_col = CENTER.1;
    info!("New game");
  }

  /// Play a move for the side to move, enforcing the proximity rule.
  pub fn play_human(&mut self, mv: Move) -> Result<Option<Outcome>, MoveError> {
    if self.is_over() {
      return Err(MoveError::GameOver);
    }
    self.board.place(mv.0, mv.1, self.current_role)?;
    info!("{:?} played ({}, {})", self.current_role, mv.0, mv.1);
    Ok(self.finish_turn(mv))
  }

  /// Let the engine of the side to move choose and play its move. Returns
  /// `None` when that side is human, the game is over or no move is left.
  pub fn play_ai(&mut self) -> Option<MoveChoice> {
    if self.is_over() {
      return None;
    }
    let engine = match self.current_role {
      Role::X => self.engine_x.as_mut(),
      Role::O => self.engine_o.as_mut(),
    }?;
    let depth = engine.config.depth;
    let choice = engine.choose(&mut self.board, depth)?;
    let (row, col) = choice.mv;
    if let Err(err) = self.board.place(row, col, self.current_role) {
      warn!("Engine produced an unplayable move: {}", err);
      return None;
    }
    info!("AI ({:?}) moved to ({}, {}) with score={} [{:?}]", self.current_role, row, col, choice.value, choice.kind);
    self.finish_turn(choice.mv);
    Some(choice)
  }

  fn finish_turn(&mut self, mv: Move) -> Option<Outcome> {
    self.last_move = Some((mv, self.current_role));
    self.outcome = outcome_after(&self.board, mv);
    match self.outcome {
      Some(Outcome::Win(role)) => {
        self.winning_line = winning_five_cells(&self.board, mv.0, mv.1);
        info!("{:?} wins after {} moves", role, self.board.stone_count());
      }
      Some(Outcome::Draw) => info!("Draw: the board is full"),
      None => {
        self.current_role = self.current_role.opponent();
        self.round += 1;
      }
    }
    self.outcome
  }

  /// Take back the last move. Against an engine, moves are taken back until
  /// a human is to move again. Returns the number of moves undone.
  pub fn undo(&mut self) -> usize {
    let mut undone = 0;
    while let Some((_, _, role)) = self.board.undo() {
      undone += 1;
      self.current_role = role;
      if self.player(role).player_type == PlayerType::Human {
        break;
      }
    }
    if undone > 0 {
      self.round = self.board.history().len() as u32 + 1;
      self.outcome = None;
      self.winning_line = None;
      self.last_move = self.board.history().last().map(|&(row, col, role)| ((row, col), role));
    }
    undone
  }

  pub fn status(&self) -> String {
    match self.outcome {
      Some(Outcome::Win(role)) => format!("{} wins! Press n for a new game, q to quit.", role.symbol()),
      Some(Outcome::Draw) => "Draw, the board is full. Press n for a new game, q to quit.".to_string(),
      None => match self.player(self.current_role).player_type {
        PlayerType::Human => format!("Move #{} - your move ({})", self.round, self.current_role.symbol()),
        PlayerType::AI => format!("Move #{} - {} is thinking...", self.round, self.current_role.symbol()),
      },
    }
  }

  /// Interactive game in the terminal. Restores the terminal on every exit.
  pub fn run(&mut self) -> io::Result<()> {
    let mut ui = TerminalUI::new();
    ui.init_screen()?;
    let result = self.event_loop(&mut ui);
    ui.restore_terminal()?;
    result
  }

  fn event_loop(&mut self, ui: &mut TerminalUI) -> io::Result<()> {
    ui.show_message(&self.status());
    loop {
      ui.draw_board(
        &self.board,
        self.cursor_row,
        self.cursor_col,
        self.last_move,
        self.winning_line.as_ref(),
      )?;

      if !self.is_over() && self.player(self.current_role).player_type == PlayerType::AI {
        if self.play_ai().is_none() {
          warn!("AI ({:?}) chose no move", self.current_role);
          ui.show_message("AI chose no move");
          break;
        }
        ui.show_message(&self.status());
        continue;
      }

      match ui.read_input() {
        GameAction::Quit => break,
        GameAction::NewGame => {
          self.reset();
          ui.show_message(&self.status());
        }
        GameAction::Undo => {
          if self.undo() == 0 {
            ui.show_message("No moves to undo.");
          } else {
            ui.show_message(&self.status());
          }
        }
        GameAction::MoveLeft => self.cursor_col = self.cursor_col.saturating_sub(1),
        GameAction::MoveRight => self.cursor_col = (self.cursor_col + 1).min(BOARD_SIZE - 1),
        GameAction::MoveUp => self.cursor_row = self.cursor_row.saturating_sub(1),
        GameAction::MoveDown => self.cursor_row = (self.cursor_row + 1).min(BOARD_SIZE - 1),
        GameAction::PlaceStone => match self.play_human((self.cursor_row, self.cursor_col)) {
          Ok(_) => ui.show_message(&self.status()),
          Err(MoveError::GameOver) => {}
          Err(err) => ui.show_message(&format!("Illegal move: {}", err)),
        },
        GameAction::None => {}
      }
    }
    Ok(())
  }

  /// Engine-only game printed to stdout, stopped after `max_rounds` moves.
  pub fn run_headless(&mut self, max_rounds: u32) -> Option<Outcome> {
    println!("Starting AI vs AI game...");
    while !self.is_over() && self.round <= max_rounds {
      let round = self.round;
      let role = self.current_role;
      match self.play_ai() {
        Some(choice) => println!(
          "Move #{} - {:?} -> ({}, {}) score {} [{:?}, {} tied]",
          round, role, choice.mv.0, choice.mv.1, choice.value, choice.kind, choice.ties
        ),
        None => {
          println!("Move #{} - {:?} has no move", round, role);
          break;
        }
      }
    }

    println!("\n{}", self.board);
    match self.outcome {
      Some(Outcome::Win(role)) => println!("Result: {} WINS with {:?}", role.symbol(), self.winning_line.unwrap_or_default()),
      Some(Outcome::Draw) => println!("Result: DRAW"),
      None => println!("Result: stopped after {} moves", self.board.stone_count()),
    }
    self.outcome
  }
}
