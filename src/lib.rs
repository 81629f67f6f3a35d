//! 5/3/1 Boring But Big calculator.
//!
//! Turns one-rep maxes, a program week and a BBB percentage into prescribed
//! bar weights. The UI owns all state and calls in through [`commands`].

pub mod commands;
pub mod config;
pub mod estimator;
pub mod models;
pub mod plan;
pub mod program;
pub mod share;

pub use config::{ConfigError, PlannerConfig};
pub use models::{Lift, LiftMaxes, MaxEdit, WeekSetPrescription};
pub use plan::{plan_day, plan_week, PlanOptions};
pub use program::{
  bbb_lift_for, bbb_weight, main_lift_for_day, one_rep_max_from_training_max, prescribed_weight,
  round_to_increment, training_max, week_sets, BbbPercentage, CalculatorError, ProgramWeek,
};
pub use share::{ShareError, ShareState};
