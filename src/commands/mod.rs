pub mod program;

use crate::config::PlannerConfig;
use crate::estimator;
use crate::models::{Lift, LiftMaxes, MaxEdit};
use crate::share::ShareState;

/// Epley estimate for a recent heavy set (0 until both fields are filled)
pub fn estimate_one_rep_max(weight: u32, reps: u32) -> u32 {
  estimator::estimate_one_rep_max(weight, reps)
}

/// Apply an estimate to the chosen lift; unchanged maxes come back when there is nothing to apply
pub fn apply_one_rep_max_estimate(
  mut maxes: LiftMaxes,
  lift_name: String,
  weight: u32,
  reps: u32,
) -> Result<LiftMaxes, String> {
  let lift: Lift = lift_name.parse().map_err(|e| format!("{}", e))?;
  estimator::apply_estimate(&mut maxes, lift, weight, reps);
  Ok(maxes)
}

/// Store whichever of 1RM / training max the lifter just edited
pub fn update_lift_max(
  mut maxes: LiftMaxes,
  lift_name: String,
  edit: MaxEdit,
) -> Result<LiftMaxes, String> {
  let lift: Lift = lift_name.parse().map_err(|e| format!("{}", e))?;
  maxes.apply_edit(lift, edit);
  Ok(maxes)
}

/// Restore inputs from a share link query
pub fn load_share_state(query: String) -> ShareState {
  ShareState::from_query(&query)
}

/// Build the share link for the current inputs
pub fn save_share_state(state: ShareState, base_url: String) -> Result<String, String> {
  state
    .share_url(&base_url)
    .map_err(|e| format!("Failed to build share link: {}", e))
}

/// Load planner settings from `.env` / the environment
pub fn load_config() -> Result<PlannerConfig, String> {
  PlannerConfig::load().map_err(|e| format!("Failed to load config: {}", e))
}
