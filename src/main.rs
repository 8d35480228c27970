mod cli;

use crate::cli::{CliArgs, GameModeArg};
use gomoku16::{Game, GameMode};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

// Install a single log backend. The terminal UI owns the screen, so
// interactive games only log when a file is given.
fn init_logging(args: &CliArgs) -> std::io::Result<()> {
  if let Some(path) = &args.log_file {
    let file = File::create(path)?;
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
      eprintln!("Logger already installed: {}", err);
    }
  } else if args.trace {
    tracing_subscriber::fmt()
      .with_max_level(tracing::Level::DEBUG)
      .with_writer(std::io::stderr)
      .init();
  } else if args.mode == GameModeArg::AiAi {
    env_logger::init();
  }
  Ok(())
}

fn main() -> ExitCode {
  // 1) Parse command line arguments
  let args = CliArgs::try_parse_checked(std::env::args_os()).unwrap_or_else(|err| err.exit());

  if let Err(err) = init_logging(&args) {
    eprintln!("Cannot open log file: {}", err);
    return ExitCode::FAILURE;
  }

  // 2) Convert args.mode to our enum GameMode
  let mode = match args.mode {
    GameModeArg::HumanHuman => GameMode::HumanvHuman,
    GameModeArg::HumanAi => GameMode::AIvHuman,
    GameModeArg::AiAi => GameMode::AIvAI,
  };

  // 3) Create the game
  let config = args.engine_config();
  info!("Starting {:?} with {:?}", mode, config);
  let mut game = Game::new(mode, args.human.into(), config, args.seed);

  // 4) Run the game
  if mode == GameMode::AIvAI {
    game.run_headless(args.max_rounds);
    return ExitCode::SUCCESS;
  }
  match game.run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("Terminal error: {}", err);
      eprintln!("Terminal error: {}", err);
      ExitCode::FAILURE
    }
  }
}
