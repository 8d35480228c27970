use crate::board::{Board, Move};
use crate::candidates::candidate_moves;
use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::ordering::ordered_moves;
use crate::player::Role;
use crate::rules::is_win_at;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

/// Value of a won position, reduced by [`WIN_PLY_PENALTY`] per ply so that
/// faster wins and slower losses are preferred.
pub const WIN_SCORE: f64 = 1_000_000.0;
pub const WIN_PLY_PENALTY: f64 = 10.0;

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
  ImmediateWin,
  Block,
  Search,
  Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveChoice {
  pub mv: Move,
  pub value: f64,
  pub kind: ChoiceKind,
  /// Number of moves that shared the best value.
  pub ties: usize,
}

pub struct AIEngine<R = StdRng> {
  pub role: Role,
  pub config: EngineConfig,
  rng: R,
  root_depth: u32,
  nodes: u64,
}

impl AIEngine<StdRng> {
  pub fn new(role: Role, config: EngineConfig) -> Self {
    Self::with_rng(role, config, StdRng::from_entropy())
  }

  pub fn seeded(role: Role, config: EngineConfig, seed: u64) -> Self {
    Self::with_rng(role, config, StdRng::seed_from_u64(seed))
  }
}

impl<R: Rng> AIEngine<R> {
  /// Engine playing `role` that breaks ties with `rng`.
  pub fn with_rng(role: Role, config: EngineConfig, rng: R) -> Self {
    Self {
      role,
      config,
      rng,
      root_depth: config.depth,
      nodes: 0,
    }
  }

  /// Nodes visited by the last search.
  pub fn nodes(&self) -> u64 {
    self.nodes
  }

  /// The engine's move at `depth`, or `None` when no empty cell is left.
  pub fn best_move(&mut self, board: &mut Board, depth: u32) -> Option<Move> {
    self.choose(board, depth).map(|choice| choice.mv)
  }

  /// Pick a move for `self.role`.
  ///
  /// An immediate five is played at once, otherwise an immediate five of the
  /// opponent is blocked. Only then does the alpha-beta search run over the
  /// ordered root moves; the move is drawn uniformly from all moves sharing
  /// the best value. The board is back in its original state on return.
  #[instrument(level = "debug", skip(self, board), fields(role = ?self.role, stones = board.stone_count()))]
  pub fn choose(&mut self, board: &mut Board, depth: u32) -> Option<MoveChoice> {
    let depth = depth.max(1);
    let config = self.config;
    self.root_depth = depth;
    self.nodes = 0;

    if let Some(mv) = winning_move(board, self.role, config.radius) {
      debug!(?mv, "playing immediate five");
      return Some(MoveChoice {
        mv,
        value: WIN_SCORE,
        kind: ChoiceKind::ImmediateWin,
        ties: 1,
      });
    }

    if let Some(mv) = winning_move(board, self.role.opponent(), config.radius) {
      let guard = board.play_scoped(mv.0, mv.1, self.role);
      let value = evaluate(&guard, self.role, config.opponent_weight);
      debug!(?mv, "blocking opponent five");
      return Some(MoveChoice {
        mv,
        value,
        kind: ChoiceKind::Block,
        ties: 1,
      });
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_moves = Vec::new();
    for (row, col) in ordered_moves(board, self.role, self.role, &config) {
      let value = {
        let mut guard = board.play_scoped(row, col, self.role);
        self.minimax(&mut guard, depth - 1, f64::NEG_INFINITY, f64::INFINITY, false, Some((row, col)))
      };
      trace!(row, col, value, "root move");
      if value > best_value {
        best_value = value;
        best_moves.clear();
        best_moves.push((row, col));
      } else if value == best_value {
        best_moves.push((row, col));
      }
    }

    if let Some(&mv) = best_moves.choose(&mut self.rng) {
      debug!(?mv, value = best_value, ties = best_moves.len(), nodes = self.nodes, "search finished");
      return Some(MoveChoice {
        mv,
        value: best_value,
        kind: ChoiceKind::Search,
        ties: best_moves.len(),
      });
    }

    let candidates = candidate_moves(board, config.radius);
    let mv = *candidates.choose(&mut self.rng)?;
    debug!(?mv, "no searchable move, picking a random candidate");
    let guard = board.play_scoped(mv.0, mv.1, self.role);
    Some(MoveChoice {
      mv,
      value: evaluate(&guard, self.role, config.opponent_weight),
      kind: ChoiceKind::Fallback,
      ties: candidates.len(),
    })
  }

  // Alpha-beta over ordered moves. `last_move` is the stone that led here.
  fn minimax(&mut self, board: &mut Board, depth: u32, mut alpha: f64, mut beta: f64, maximizing: bool, last_move: Option<Move>) -> f64 {
    self.nodes += 1;

    if let Some((row, col)) = last_move {
      if is_win_at(board, row, col) {
        let plies = (self.root_depth - depth) as f64;
        return if board.get(row, col).role() == Some(self.role) {
          WIN_SCORE - WIN_PLY_PENALTY * plies
        } else {
          -WIN_SCORE + WIN_PLY_PENALTY * plies
        };
      }
    }
    if depth == 0 || board.is_full() {
      return evaluate(board, self.role, self.config.opponent_weight);
    }

    let to_move = if maximizing { self.role } else { self.role.opponent() };
    let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    for (row, col) in ordered_moves(board, to_move, self.role, &self.config) {
      let value = {
        let mut guard = board.play_scoped(row, col, to_move);
        self.minimax(&mut guard, depth - 1, alpha, beta, !maximizing, Some((row, col)))
      };
      if maximizing {
        best = best.max(value);
        alpha = alpha.max(value);
      } else {
        best = best.min(value);
        beta = beta.min(value);
      }
      if beta <= alpha {
        break;
      }
    }
    best
  }
}

/// First candidate move that gives `role` five in a row, if any.
pub fn winning_move(board: &mut Board, role: Role, radius: usize) -> Option<Move> {
  candidate_moves(board, radius).into_iter().find(|&(row, col)| {
    let guard = board.play_scoped(row, col, role);
    is_win_at(&guard, row, col)
  })
}
