use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use gomoku16::{EngineConfig, Role};
use std::path::PathBuf;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameModeArg {
  /// Human vs Human
  HumanHuman,
  /// Human vs AI
  HumanAi,
  /// AI vs AI, printed to stdout
  AiAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
  X,
  O,
}

impl From<RoleArg> for Role {
  fn from(role: RoleArg) -> Self {
    match role {
      RoleArg::X => Role::X,
      RoleArg::O => Role::O,
    }
  }
}

/// Five in a row on a 16x16 board
#[derive(Parser, Debug)]
#[command(name = "gomoku16", version)]
pub struct CliArgs {
  /// Game mode
  #[arg(long, value_enum, default_value_t = GameModeArg::HumanAi)]
  pub mode: GameModeArg,

  /// Stone played by the human in human-ai mode (X moves first)
  #[arg(long, value_enum, default_value_t = RoleArg::X)]
  pub human: RoleArg,

  /// AI search depth
  #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
  pub depth: u32,

  /// Moves kept per ply after ordering
  #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u64).range(1..))]
  pub move_limit: u64,

  /// Candidate radius around existing stones
  #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..=15))]
  pub radius: u64,

  /// Weight of the opponent's score in the evaluation
  #[arg(long, default_value_t = 1.1)]
  pub opponent_weight: f64,

  /// Seed for the AI's tie-breaks
  #[arg(long)]
  pub seed: Option<u64>,

  /// Write log output to this file
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  /// Print search traces to stderr (ai-ai mode only)
  #[arg(long, conflicts_with = "log_file")]
  pub trace: bool,

  /// Stop an ai-ai game after this many moves
  #[arg(long, default_value_t = 256)]
  pub max_rounds: u32,
}

impl CliArgs {
  /// Parse and check the flag combinations clap cannot express.
  pub fn try_parse_checked<I, T>(args: I) -> Result<Self, clap::Error>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let args = Self::try_parse_from(args)?;
    args.validate()?;
    Ok(args)
  }

  // Traces go to stderr, which the terminal UI owns in interactive modes
  fn validate(&self) -> Result<(), clap::Error> {
    if self.trace && self.mode != GameModeArg::AiAi {
      return Err(Self::command().error(ErrorKind::ArgumentConflict, "--trace is only available with --mode ai-ai"));
    }
    Ok(())
  }

  pub fn engine_config(&self) -> EngineConfig {
    EngineConfig {
      depth: self.depth,
      move_limit: self.move_limit as usize,
      radius: self.radius as usize,
      opponent_weight: self.opponent_weight,
    }
  }
}
