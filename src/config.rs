use crate::board::PROXIMITY_RADIUS;
use crate::eval::OPPONENT_WEIGHT;

/// Tunables for one engine instance. Several engines with different
/// settings can play in the same process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
  /// Plies searched below the root, at least 1.
  pub depth: u32,
  /// Moves kept per ply after ordering.
  pub move_limit: usize,
  /// Neighbourhood searched around existing stones.
  pub radius: usize,
  /// Weight of the opponent's score in the evaluation.
  pub opponent_weight: f64,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      depth: 2,
      move_limit: 12,
      radius: PROXIMITY_RADIUS,
      opponent_weight: OPPONENT_WEIGHT,
    }
  }
}

impl EngineConfig {
  pub fn with_depth(self, depth: u32) -> Self {
    Self { depth: depth.max(1), ..self }
  }
}
