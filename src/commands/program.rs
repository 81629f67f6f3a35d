//! Plan commands: raw selections from the UI in, prescribed weights out

use crate::config::PlannerConfig;
use crate::models::{DayPlan, LiftMaxes, WeekPlan, WeekSetPrescription};
use crate::plan::{plan_day, plan_week, PlanOptions};
use crate::program::{week_sets, BbbPercentage, CalculatorError, ProgramWeek};

fn build_options(
    config: &PlannerConfig,
    week: u8,
    bbb_percentage: u8,
    less_boring: bool,
) -> Result<PlanOptions, CalculatorError> {
    Ok(PlanOptions {
        week: ProgramWeek::try_from(week)?,
        bbb_percentage: BbbPercentage::new(bbb_percentage)?,
        less_boring,
        plate_increment: config.plate_increment,
    })
}

/// Get the plan for a single training day
pub fn get_day_plan(
    config: &PlannerConfig,
    maxes: LiftMaxes,
    day: u8,
    week: u8,
    bbb_percentage: u8,
    less_boring: bool,
) -> Result<DayPlan, String> {
    let options = build_options(config, week, bbb_percentage, less_boring).map_err(|e| e.to_string())?;
    plan_day(day, &maxes, &options).map_err(|e| e.to_string())
}

/// Get all four days of a week
pub fn get_week_plan(
    config: &PlannerConfig,
    maxes: LiftMaxes,
    week: u8,
    bbb_percentage: u8,
    less_boring: bool,
) -> Result<WeekPlan, String> {
    let options = build_options(config, week, bbb_percentage, less_boring).map_err(|e| e.to_string())?;
    plan_week(&maxes, &options).map_err(|e| e.to_string())
}

/// Get the percentage table for a week
pub fn get_week_sets(week: u8) -> Result<Vec<WeekSetPrescription>, String> {
    week_sets(week)
        .map(|sets| sets.to_vec())
        .map_err(|e| e.to_string())
}
