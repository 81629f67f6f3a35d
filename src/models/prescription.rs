use serde::{Deserialize, Serialize};

use crate::models::Lift;

/// One row of a week's percentage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSetPrescription {
  pub percent_of_training_max: u8,
  pub reps: u8,
  pub is_amrap: bool,
}

impl WeekSetPrescription {
  pub const fn new(percent_of_training_max: u8, reps: u8, is_amrap: bool) -> Self {
    Self {
      percent_of_training_max,
      reps,
      is_amrap,
    }
  }

  /// "5" or "5+" for an AMRAP set
  pub fn reps_label(&self) -> String {
    if self.is_amrap {
      format!("{}+", self.reps)
    } else {
      self.reps.to_string()
    }
  }
}

/// A main lift set with its bar weight filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedSet {
  pub weight: u32,
  pub reps: u8,
  pub reps_label: String,
  pub percent_of_training_max: u8,
  pub is_amrap: bool,
}

impl PrescribedSet {
  pub fn from_prescription(prescription: &WeekSetPrescription, weight: u32) -> Self {
    Self {
      weight,
      reps: prescription.reps,
      reps_label: prescription.reps_label(),
      percent_of_training_max: prescription.percent_of_training_max,
      is_amrap: prescription.is_amrap,
    }
  }
}

/// Supplemental BBB work: `sets` x `reps` at one weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BbbBlock {
  pub lift: Lift,
  pub weight: u32,
  pub percentage: u8,
  pub sets: u8,
  pub reps: u8,
}

/// Everything shown for one training day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
  pub day: u8,
  pub main_lift: Lift,
  pub training_max: u32,
  /// Empty when the main lift has no 1RM yet
  pub main_sets: Vec<PrescribedSet>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bbb: Option<BbbBlock>,
}

impl DayPlan {
  /// False until the lifter has entered a 1RM for the day's main lift.
  pub fn has_main_work(&self) -> bool {
    !self.main_sets.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
  pub week: u8,
  pub less_boring: bool,
  pub days: Vec<DayPlan>,
}

impl WeekPlan {
  pub fn to_json(&self) -> String {
    serde_json::to_string(self).unwrap_or_default()
  }
}
