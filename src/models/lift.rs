use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::program::{one_rep_max_from_training_max, CalculatorError};

/// The four barbell lifts of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lift {
  OverheadPress,
  Squat,
  BenchPress,
  Deadlift,
}

impl Lift {
  /// All lifts, in the order they are entered and shared.
  pub const ALL: [Lift; 4] = [Lift::OverheadPress, Lift::Squat, Lift::BenchPress, Lift::Deadlift];

  pub fn display_name(&self) -> &'static str {
    match self {
      Lift::OverheadPress => "Overhead Press",
      Lift::Squat => "Squat",
      Lift::BenchPress => "Bench Press",
      Lift::Deadlift => "Deadlift",
    }
  }

  /// Query parameter key used in share links.
  pub fn param_key(&self) -> &'static str {
    match self {
      Lift::OverheadPress => "ohp",
      Lift::Squat => "squat",
      Lift::BenchPress => "bench",
      Lift::Deadlift => "dead",
    }
  }

  /// Opposite-pattern partner used for "less boring" BBB work.
  pub fn less_boring_partner(&self) -> Lift {
    match self {
      Lift::Squat => Lift::Deadlift,
      Lift::Deadlift => Lift::Squat,
      Lift::BenchPress => Lift::OverheadPress,
      Lift::OverheadPress => Lift::BenchPress,
    }
  }
}

impl fmt::Display for Lift {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.display_name())
  }
}

impl FromStr for Lift {
  type Err = CalculatorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();
    Lift::ALL
      .into_iter()
      .find(|lift| lift.display_name().to_lowercase() == normalized || lift.param_key() == normalized)
      .ok_or_else(|| CalculatorError::InvalidArgument(format!("unknown lift: {}", s)))
  }
}

/// Caller-owned one-rep maxes for every lift. Zero means "not entered yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiftMaxes {
  pub overhead_press: u32,
  pub squat: u32,
  pub bench_press: u32,
  pub deadlift: u32,
}

impl LiftMaxes {
  pub fn get(&self, lift: Lift) -> u32 {
    match lift {
      Lift::OverheadPress => self.overhead_press,
      Lift::Squat => self.squat,
      Lift::BenchPress => self.bench_press,
      Lift::Deadlift => self.deadlift,
    }
  }

  pub fn set(&mut self, lift: Lift, one_rep_max: u32) {
    let slot = match lift {
      Lift::OverheadPress => &mut self.overhead_press,
      Lift::Squat => &mut self.squat,
      Lift::BenchPress => &mut self.bench_press,
      Lift::Deadlift => &mut self.deadlift,
    };
    *slot = one_rep_max;
  }

  /// Applies an edit to either input field and returns the 1RM now stored.
  pub fn apply_edit(&mut self, lift: Lift, edit: MaxEdit) -> u32 {
    let one_rep_max = edit.one_rep_max();
    self.set(lift, one_rep_max);
    one_rep_max
  }

  pub fn iter(&self) -> impl Iterator<Item = (Lift, u32)> + '_ {
    Lift::ALL.into_iter().map(move |lift| (lift, self.get(lift)))
  }
}

/// The field the lifter last typed into. The other one is always recomputed
/// from the stored 1RM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum MaxEdit {
  OneRepMax(u32),
  TrainingMax(u32),
}

impl MaxEdit {
  /// 1RM to store for this edit. A training max of 0 clears the lift.
  pub fn one_rep_max(&self) -> u32 {
    match *self {
      MaxEdit::OneRepMax(value) => value,
      MaxEdit::TrainingMax(value) => one_rep_max_from_training_max(value),
    }
  }
}
