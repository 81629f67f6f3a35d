pub mod lift;
pub mod prescription;

pub use lift::{Lift, LiftMaxes, MaxEdit};
pub use prescription::{BbbBlock, DayPlan, PrescribedSet, WeekPlan, WeekSetPrescription};
