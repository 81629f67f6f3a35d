//! Day and week plans for the rendering layer.
//!
//! Display rules:
//! - a day whose main lift has no 1RM shows neither main sets nor BBB
//! - the BBB block only appears when the BBB lift has a 1RM

use log::debug;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::models::{BbbBlock, DayPlan, LiftMaxes, PrescribedSet, WeekPlan};
use crate::program::{
    bbb_lift_for, main_lift_for_day, prescribed_weight_with_increment, training_max,
    BbbPercentage, CalculatorError, ProgramWeek, BBB_REPS, BBB_SETS, DEFAULT_PLATE_INCREMENT,
};

pub const PROGRAM_DAYS: [u8; 4] = [1, 2, 3, 4];

/// Selections that apply to every day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOptions {
    pub week: ProgramWeek,
    pub bbb_percentage: BbbPercentage,
    pub less_boring: bool,
    #[serde(default = "default_plate_increment")]
    pub plate_increment: NonZeroU32,
}

fn default_plate_increment() -> NonZeroU32 {
    DEFAULT_PLATE_INCREMENT
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            week: ProgramWeek::One,
            bbb_percentage: BbbPercentage::DEFAULT,
            less_boring: false,
            plate_increment: DEFAULT_PLATE_INCREMENT,
        }
    }
}

pub fn plan_day(day: u8, maxes: &LiftMaxes, options: &PlanOptions) -> Result<DayPlan, CalculatorError> {
    let main_lift = main_lift_for_day(day)?;
    let one_rep_max = maxes.get(main_lift);

    if one_rep_max == 0 {
        debug!("Day {}: no 1RM for {}, nothing to prescribe", day, main_lift);
        return Ok(DayPlan {
            day,
            main_lift,
            training_max: 0,
            main_sets: Vec::new(),
            bbb: None,
        });
    }

    let main_sets = options
        .week
        .sets()
        .iter()
        .map(|set| {
            let weight = prescribed_weight_with_increment(
                one_rep_max,
                set.percent_of_training_max,
                options.plate_increment,
            );
            PrescribedSet::from_prescription(set, weight)
        })
        .collect();

    let bbb_lift = bbb_lift_for(main_lift, options.less_boring);
    let bbb_one_rep_max = maxes.get(bbb_lift);
    let bbb = (bbb_one_rep_max > 0).then(|| BbbBlock {
        lift: bbb_lift,
        weight: prescribed_weight_with_increment(
            bbb_one_rep_max,
            options.bbb_percentage.get(),
            options.plate_increment,
        ),
        percentage: options.bbb_percentage.get(),
        sets: BBB_SETS,
        reps: BBB_REPS,
    });

    Ok(DayPlan {
        day,
        main_lift,
        training_max: training_max(one_rep_max),
        main_sets,
        bbb,
    })
}

pub fn plan_week(maxes: &LiftMaxes, options: &PlanOptions) -> Result<WeekPlan, CalculatorError> {
    let days = PROGRAM_DAYS
        .iter()
        .map(|&day| plan_day(day, maxes, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WeekPlan {
        week: options.week.number(),
        less_boring: options.less_boring,
        days,
    })
}
