//! One-rep max estimation from a recent heavy set.

use log::debug;

use crate::models::{Lift, LiftMaxes};

/// Calculates an estimated 1RM with the Epley formula, rounded to the nearest pound.
///
/// Formula: 1RM = weight × (1 + reps / 30)
///
/// A weight of 0 or fewer than one rep is "no input yet" and yields 0
/// rather than an error. Estimates too large for a `u32` clamp to `u32::MAX`.
///
/// # Arguments
/// * `weight` - Weight lifted in pounds
/// * `reps` - Number of repetitions performed
pub fn estimate_one_rep_max(weight: u32, reps: u32) -> u32 {
    if weight == 0 || reps < 1 {
        return 0;
    }

    let w = weight as f64;
    let r = reps as f64;
    let estimate = (w * (1.0 + r / 30.0)).round();
    estimate.min(u32::MAX as f64) as u32
}

/// Stores the Epley estimate as `lift`'s 1RM.
///
/// Nothing changes when the estimate is 0. Returns whether the maxes were updated.
pub fn apply_estimate(maxes: &mut LiftMaxes, lift: Lift, weight: u32, reps: u32) -> bool {
    let estimate = estimate_one_rep_max(weight, reps);
    if estimate == 0 {
        return false;
    }

    debug!("Applying estimated 1RM {} to {} ({} x {})", estimate, lift, weight, reps);
    maxes.set(lift, estimate);
    true
}
