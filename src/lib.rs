//! Five-in-a-row on a 16x16 board under the proximity rule: every move after
//! the first must land within two cells of a stone already on the board.
//!
//! The engine picks its move with a depth-limited minimax search with
//! alpha-beta pruning over a small, heuristically ordered set of candidate
//! cells:
//! - [`board`]: the grid, legality and in-place move guards
//! - [`rules`]: five-in-a-row detection and the winning line
//! - [`candidates`]: cells worth considering near existing stones
//! - [`eval`] and [`scores`]: the line heuristic
//! - [`ordering`]: look-ahead-one move ordering with a move limit
//! - [`ai`]: the search itself
//!
//! ```
//! use gomoku16::{AIEngine, Board, EngineConfig, Role};
//!
//! let mut board = Board::new();
//! board.apply_move(7, 7, Role::X);
//!
//! let mut engine = AIEngine::seeded(Role::O, EngineConfig::default().with_depth(1), 1);
//! let (row, col) = engine.best_move(&mut board, 1).unwrap();
//! assert!(board.is_legal(row, col));
//! ```

pub mod ai;
pub mod board;
pub mod candidates;
pub mod config;
pub mod eval;
pub mod game;
pub mod ordering;
pub mod player;
pub mod rules;
pub mod scores;
pub mod terminal_ui;

pub use ai::{AIEngine, ChoiceKind, MoveChoice};
pub use board::{Board, Move, MoveError, BOARD_SIZE};
pub use config::EngineConfig;
pub use game::{Game, GameMode};
pub use player::{Cell, PlayerType, Role};
pub use rules::{is_win_at, winning_five_cells, Outcome};
