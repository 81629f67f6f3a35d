//! 5/3/1 Boring But Big program calculator
//!
//! Pure functions over static program tables:
//! - training max derivation (nearest rounding) and its inverse
//! - barbell load rounding (always up to the next plate increment)
//! - week percentage tables for the main lift
//! - day -> main lift assignment and BBB pairing
//!
//! Nothing here holds state. Callers pass 1RM values, the selected week and
//! the BBB percentage explicitly on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

use crate::models::{Lift, WeekSetPrescription};

/// Training max as a fraction of 1RM.
pub const TRAINING_MAX_FACTOR: f64 = 0.9;

/// Smallest load jump on a standard barbell (2.5 lb per side).
pub const DEFAULT_PLATE_INCREMENT: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => panic!("plate increment must be non-zero"),
};

pub const BBB_SETS: u8 = 5;
pub const BBB_REPS: u8 = 10;

/// Selectable BBB percentages: 30, 35, ..., 80.
pub const BBB_PERCENTAGE_OPTIONS: [u8; 11] = [30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80];

// ---------------------------------------------------------------------------
/// Error Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A discrete selector (day, week, BBB percentage, lift name) is outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Serialize for CalculatorError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
/// Program Week: which percentage table the main lift uses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProgramWeek {
    /// 3 x 5 at 65/75/85
    #[default]
    One,
    /// 3 x 3 at 70/80/90
    Two,
    /// 5/3/1 at 75/85/95
    Three,
}

const WEEK_ONE: [WeekSetPrescription; 3] = [
    WeekSetPrescription::new(65, 5, false),
    WeekSetPrescription::new(75, 5, false),
    WeekSetPrescription::new(85, 5, true),
];

const WEEK_TWO: [WeekSetPrescription; 3] = [
    WeekSetPrescription::new(70, 3, false),
    WeekSetPrescription::new(80, 3, false),
    WeekSetPrescription::new(90, 3, true),
];

const WEEK_THREE: [WeekSetPrescription; 3] = [
    WeekSetPrescription::new(75, 5, false),
    WeekSetPrescription::new(85, 3, false),
    WeekSetPrescription::new(95, 1, true),
];

impl ProgramWeek {
    pub const ALL: [ProgramWeek; 3] = [ProgramWeek::One, ProgramWeek::Two, ProgramWeek::Three];

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Main lift working sets for this week. The last set is always AMRAP.
    pub fn sets(&self) -> &'static [WeekSetPrescription; 3] {
        match self {
            Self::One => &WEEK_ONE,
            Self::Two => &WEEK_TWO,
            Self::Three => &WEEK_THREE,
        }
    }
}

impl TryFrom<u8> for ProgramWeek {
    type Error = CalculatorError;

    fn try_from(week: u8) -> Result<Self, Self::Error> {
        match week {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(CalculatorError::InvalidArgument(format!(
                "program week must be 1, 2 or 3, got {}",
                week
            ))),
        }
    }
}

impl From<ProgramWeek> for u8 {
    fn from(week: ProgramWeek) -> Self {
        week.number()
    }
}

impl fmt::Display for ProgramWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Week {}", self.number())
    }
}

// ---------------------------------------------------------------------------
/// BBB Percentage: supplemental intensity, 30-80 in steps of 5
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BbbPercentage(u8);

impl BbbPercentage {
    pub const DEFAULT: BbbPercentage = BbbPercentage(50);

    pub fn new(percent: u8) -> Result<Self, CalculatorError> {
        if BBB_PERCENTAGE_OPTIONS.contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(CalculatorError::InvalidArgument(format!(
                "BBB percentage must be 30-80 in steps of 5, got {}",
                percent
            )))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for BbbPercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for BbbPercentage {
    type Error = CalculatorError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<BbbPercentage> for u8 {
    fn from(percent: BbbPercentage) -> Self {
        percent.0
    }
}

// ---------------------------------------------------------------------------
/// Weight Derivation
// ---------------------------------------------------------------------------

/// Training max = 1RM x 0.9, rounded to the nearest pound (halves go up).
pub fn training_max(one_rep_max: u32) -> u32 {
    (one_rep_max as f64 * TRAINING_MAX_FACTOR).round() as u32
}

/// Inverse of [`training_max`]: 1RM = TM / 0.9, rounded to nearest.
///
/// A training max of 0 always clears the 1RM. Going TM -> 1RM -> TM gives the
/// same TM back; going 1RM -> TM -> 1RM can drift by 1 because both
/// directions round. Training maxes whose 1RM would not fit a `u32` clamp
/// to `u32::MAX`.
pub fn one_rep_max_from_training_max(training_max: u32) -> u32 {
    if training_max == 0 {
        return 0;
    }
    let one_rep_max = (training_max as f64 / TRAINING_MAX_FACTOR).round();
    one_rep_max.min(u32::MAX as f64) as u32
}

/// Rounds UP to the next multiple of `increment`. Loads never round down.
///
/// Results past `u32::MAX` saturate to `u32::MAX`.
pub fn round_to_increment(value: f64, increment: NonZeroU32) -> u32 {
    let increment = increment.get() as u64;
    let steps = (value / increment as f64).ceil();
    if steps <= 0.0 {
        return 0;
    }
    // `as u64` saturates, so the product only needs clamping
    (steps as u64)
        .saturating_mul(increment)
        .min(u32::MAX as u64) as u32
}

/// Bar weight for `percent` of the training max derived from `one_rep_max`.
pub fn prescribed_weight(one_rep_max: u32, percent: u8) -> u32 {
    prescribed_weight_with_increment(one_rep_max, percent, DEFAULT_PLATE_INCREMENT)
}

pub fn prescribed_weight_with_increment(one_rep_max: u32, percent: u8, increment: NonZeroU32) -> u32 {
    let tm = training_max(one_rep_max);
    round_to_increment(tm as f64 * percent as f64 / 100.0, increment)
}

/// Working weight for every BBB set (always 5 x 10).
pub fn bbb_weight(bbb_one_rep_max: u32, bbb_percentage: BbbPercentage) -> u32 {
    prescribed_weight(bbb_one_rep_max, bbb_percentage.get())
}

// ---------------------------------------------------------------------------
/// Program Tables
// ---------------------------------------------------------------------------

/// Main lift sets for a raw week number. Weeks outside 1-3 are rejected.
pub fn week_sets(week: u8) -> Result<&'static [WeekSetPrescription; 3], CalculatorError> {
    ProgramWeek::try_from(week).map(|w| w.sets())
}

/// Day 1 squat, day 2 bench, day 3 deadlift, day 4 press.
pub fn main_lift_for_day(day: u8) -> Result<Lift, CalculatorError> {
    match day {
        1 => Ok(Lift::Squat),
        2 => Ok(Lift::BenchPress),
        3 => Ok(Lift::Deadlift),
        4 => Ok(Lift::OverheadPress),
        _ => Err(CalculatorError::InvalidArgument(format!(
            "program day must be 1-4, got {}",
            day
        ))),
    }
}

/// Lift used for the BBB sets on `main_lift`'s day.
pub fn bbb_lift_for(main_lift: Lift, less_boring: bool) -> Lift {
    if less_boring {
        main_lift.less_boring_partner()
    } else {
        main_lift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_training_max_matches_formula() {
        for one_rep_max in 0..=1000u32 {
            let expected = (one_rep_max as f64 * 0.9).round() as u32;
            assert_eq!(training_max(one_rep_max), expected);
        }
        assert_eq!(training_max(0), 0);
        assert_eq!(training_max(200), 180);
        // 5 * 0.9 = 4.5 rounds up
        assert_eq!(training_max(5), 5);
    }

    #[test]
    fn test_training_max_round_trip() {
        // TM -> 1RM -> TM
        for tm in 0..=900u32 {
            let back = training_max(one_rep_max_from_training_max(tm));
            assert!(back.abs_diff(tm) <= 1, "tm {} came back as {}", tm, back);
        }

        // 1RM -> TM -> 1RM drifts by at most 1
        for one_rep_max in 0..=1000u32 {
            let back = one_rep_max_from_training_max(training_max(one_rep_max));
            assert!(back.abs_diff(one_rep_max) <= 1);
        }
    }

    #[test]
    fn test_zero_training_max_clears_one_rep_max() {
        assert_eq!(one_rep_max_from_training_max(0), 0);
        assert_eq!(one_rep_max_from_training_max(180), 200);
        assert_eq!(one_rep_max_from_training_max(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_round_to_increment_is_ceiling() {
        let five = DEFAULT_PLATE_INCREMENT;
        assert_eq!(round_to_increment(0.0, five), 0);
        assert_eq!(round_to_increment(1.0, five), 5);
        assert_eq!(round_to_increment(142.3, five), 145);
        assert_eq!(round_to_increment(145.0, five), 145);
        assert_eq!(round_to_increment(145.01, five), 150);
        assert_eq!(round_to_increment(153.0, increment(10)), 160);
        assert_eq!(round_to_increment(7.0, increment(1)), 7);
    }

    #[test]
    fn test_round_to_increment_smallest_multiple() {
        let five = DEFAULT_PLATE_INCREMENT;
        for tenths in 0..5000u32 {
            let x = tenths as f64 / 10.0;
            let rounded = round_to_increment(x, five);
            assert_eq!(rounded % 5, 0);
            assert!(rounded as f64 >= x);
            assert!((rounded as f64) - x < 5.0);
        }
    }

    #[test]
    fn test_round_to_increment_saturates() {
        assert_eq!(round_to_increment(1.0e10, DEFAULT_PLATE_INCREMENT), u32::MAX);
        assert_eq!(round_to_increment(f64::MAX, DEFAULT_PLATE_INCREMENT), u32::MAX);
        assert_eq!(round_to_increment(3.0e9, increment(1 << 31)), u32::MAX);
        // Largest representable multiple still comes out exact
        assert_eq!(round_to_increment(4_294_967_290.0, DEFAULT_PLATE_INCREMENT), 4_294_967_290);
    }

    #[test]
    fn test_huge_max_with_huge_increment_does_not_overflow() {
        let one_rep_max = u32::MAX;
        let weight = prescribed_weight_with_increment(one_rep_max, 95, increment(1 << 31));
        assert_eq!(weight, u32::MAX);
        assert_eq!(bbb_weight(u32::MAX, BbbPercentage::new(80).unwrap()) % 5, 0);
    }

    #[test]
    fn test_prescribed_weight_scenarios() {
        // TM 180 * 0.85 = 153 -> 155
        assert_eq!(prescribed_weight(200, 85), 155);
        for percent in [1, 50, 65, 95, 100] {
            assert_eq!(prescribed_weight(0, percent), 0);
        }
        assert_eq!(prescribed_weight_with_increment(200, 85, increment(10)), 160);
    }

    #[test]
    fn test_bbb_weight() {
        // TM 270 * 0.60 = 162 -> 165
        let sixty = BbbPercentage::new(60).unwrap();
        assert_eq!(bbb_weight(300, sixty), 165);
        assert_eq!(bbb_weight(0, sixty), 0);
    }

    #[test]
    fn test_bbb_percentage_domain() {
        for percent in BBB_PERCENTAGE_OPTIONS {
            assert_eq!(BbbPercentage::new(percent).unwrap().get(), percent);
        }
        for percent in [0, 25, 31, 52, 85, 100] {
            assert!(BbbPercentage::new(percent).is_err());
        }
        assert_eq!(BbbPercentage::default().get(), 50);
    }

    #[test]
    fn test_week_tables() {
        for week in 1..=3u8 {
            let sets = week_sets(week).unwrap();
            assert_eq!(sets.len(), 3);
            assert!(!sets[0].is_amrap);
            assert!(!sets[1].is_amrap);
            assert!(sets[2].is_amrap);
        }

        assert_eq!(
            week_sets(1).unwrap(),
            &[
                WeekSetPrescription::new(65, 5, false),
                WeekSetPrescription::new(75, 5, false),
                WeekSetPrescription::new(85, 5, true),
            ]
        );
        assert_eq!(
            week_sets(2).unwrap(),
            &[
                WeekSetPrescription::new(70, 3, false),
                WeekSetPrescription::new(80, 3, false),
                WeekSetPrescription::new(90, 3, true),
            ]
        );
        assert_eq!(
            week_sets(3).unwrap(),
            &[
                WeekSetPrescription::new(75, 5, false),
                WeekSetPrescription::new(85, 3, false),
                WeekSetPrescription::new(95, 1, true),
            ]
        );
    }

    #[test]
    fn test_week_out_of_range_is_rejected() {
        assert!(matches!(week_sets(0), Err(CalculatorError::InvalidArgument(_))));
        assert!(matches!(week_sets(4), Err(CalculatorError::InvalidArgument(_))));
    }

    #[test]
    fn test_day_assignment() {
        assert_eq!(main_lift_for_day(1).unwrap(), Lift::Squat);
        assert_eq!(main_lift_for_day(2).unwrap(), Lift::BenchPress);
        assert_eq!(main_lift_for_day(3).unwrap(), Lift::Deadlift);
        assert_eq!(main_lift_for_day(4).unwrap(), Lift::OverheadPress);
        assert!(main_lift_for_day(0).is_err());
        assert!(main_lift_for_day(5).is_err());
    }

    #[test]
    fn test_bbb_pairing() {
        assert_eq!(bbb_lift_for(Lift::Squat, true), Lift::Deadlift);
        assert_eq!(bbb_lift_for(Lift::BenchPress, true), Lift::OverheadPress);
        for lift in Lift::ALL {
            assert_eq!(bbb_lift_for(lift, false), lift);
            assert_eq!(bbb_lift_for(bbb_lift_for(lift, true), true), lift);
        }
    }

    #[test]
    fn test_program_week_serde() {
        let json = serde_json::to_string(&ProgramWeek::Two).unwrap();
        assert_eq!(json, "2");
        let week: ProgramWeek = serde_json::from_str("3").unwrap();
        assert_eq!(week, ProgramWeek::Three);
        assert!(serde_json::from_str::<ProgramWeek>("4").is_err());
        assert!(serde_json::from_str::<BbbPercentage>("55").is_ok());
        assert!(serde_json::from_str::<BbbPercentage>("57").is_err());
    }
}
