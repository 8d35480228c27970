use crate::board::{Board, Move};
use crate::candidates::candidate_moves;
use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::player::Role;
use crate::rules::is_win_at;

/// Candidate moves for `to_move`, best first from that side's point of view,
/// cut down to `config.move_limit`.
///
/// Each move is played tentatively and the resulting position evaluated for
/// `ai`. A move that wins on the spot is pinned to the extreme of the order.
/// `ai`'s moves are sorted descending (it maximises), the opponent's
/// ascending. Moves outside the limit are never searched.
pub fn ordered_moves(board: &mut Board, to_move: Role, ai: Role, config: &EngineConfig) -> Vec<Move> {
  let maximizing = to_move == ai;
  let mut scored: Vec<(Move, f64)> = candidate_moves(board, config.radius)
    .into_iter()
    .map(|(row, col)| {
      let guard = board.play_scoped(row, col, to_move);
      let value = if is_win_at(&guard, row, col) {
        if maximizing {
          f64::INFINITY
        } else {
          f64::NEG_INFINITY
        }
      } else {
        evaluate(&guard, ai, config.opponent_weight)
      };
      ((row, col), value)
    })
    .collect();

  // Stable sort keeps candidate order among equal values
  if maximizing {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
  } else {
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
  }
  scored.truncate(config.move_limit);
  scored.into_iter().map(|(mv, _)| mv).collect()
}
