//! Share links: program inputs persisted in a URL query string.
//!
//! Keys: `ohp`, `squat`, `bench`, `dead` (1RM per lift), `less-boring`,
//! `week`, `bbb`. Anything missing or out of range falls back to its
//! default before it reaches the calculator.

use log::debug;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use url::Url;

use crate::models::{Lift, LiftMaxes};
use crate::plan::PlanOptions;
use crate::program::{BbbPercentage, ProgramWeek};

/// ---------------------------------------------------------------------------
/// Query Keys
/// ---------------------------------------------------------------------------

const LESS_BORING_KEY: &str = "less-boring";
const WEEK_KEY: &str = "week";
const BBB_KEY: &str = "bbb";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
  #[error("Invalid base URL: {0}")]
  InvalidBaseUrl(#[from] url::ParseError),
}

impl Serialize for ShareError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Share State
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareState {
  pub one_rep_maxes: LiftMaxes,
  pub less_boring: bool,
  pub week: ProgramWeek,
  pub bbb_percentage: BbbPercentage,
}

impl ShareState {
  /// Parse a query string (with or without the leading `?`), clamping every value.
  pub fn from_query(query: &str) -> Self {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
      .into_owned()
      .collect();
    let get = |key: &str| {
      pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
    };

    let mut one_rep_maxes = LiftMaxes::default();
    for lift in Lift::ALL {
      let value = get(lift.param_key()).map(parse_one_rep_max).unwrap_or(0);
      one_rep_maxes.set(lift, value);
    }

    Self {
      one_rep_maxes,
      less_boring: get(LESS_BORING_KEY) == Some("1"),
      week: get(WEEK_KEY).map(parse_week).unwrap_or_default(),
      bbb_percentage: get(BBB_KEY).map(parse_bbb_percentage).unwrap_or_default(),
    }
  }

  pub fn from_url(url: &Url) -> Self {
    Self::from_query(url.query().unwrap_or(""))
  }

  /// Minimal query string: defaults and unset lifts are left out.
  pub fn to_query(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (lift, value) in self.one_rep_maxes.iter() {
      if value > 0 {
        serializer.append_pair(lift.param_key(), &value.to_string());
      }
    }
    if self.less_boring {
      serializer.append_pair(LESS_BORING_KEY, "1");
    }
    if self.week != ProgramWeek::One {
      serializer.append_pair(WEEK_KEY, &self.week.number().to_string());
    }
    if self.bbb_percentage != BbbPercentage::DEFAULT {
      serializer.append_pair(BBB_KEY, &self.bbb_percentage.get().to_string());
    }

    serializer.finish()
  }

  /// Link to `base` carrying this state. An empty state yields the bare base URL.
  pub fn share_url(&self, base: &str) -> Result<String, ShareError> {
    let mut url = Url::parse(base)?;
    let query = self.to_query();
    if query.is_empty() {
      url.set_query(None);
    } else {
      url.set_query(Some(&query));
    }
    Ok(url.to_string())
  }

  /// Options for the plan builder, using the default plate increment.
  pub fn plan_options(&self) -> PlanOptions {
    PlanOptions {
      week: self.week,
      bbb_percentage: self.bbb_percentage,
      less_boring: self.less_boring,
      ..Default::default()
    }
  }
}

/// ---------------------------------------------------------------------------
/// Value Parsing
/// ---------------------------------------------------------------------------

/// Leading integer of `raw`, like a lenient form field: "225lbs" -> 225, "2.5" -> 2.
fn parse_leading_int(raw: &str) -> Option<i64> {
  let s = raw.trim_start();
  let (negative, digits) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };
  let end = digits
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(digits.len());
  if end == 0 {
    return None;
  }
  // Saturate absurdly long inputs instead of failing
  let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
  Some(if negative { -magnitude } else { magnitude })
}

fn parse_one_rep_max(raw: &str) -> u32 {
  let value = parse_leading_int(raw).unwrap_or(0);
  let clamped = value.clamp(0, u32::MAX as i64) as u32;
  if clamped as i64 != value {
    debug!("Clamped lift value {:?} to {}", raw, clamped);
  }
  clamped
}

/// Only weeks 1-3 have percentage tables, so anything else (including the
/// week 4 older links may carry) comes back as week 1.
fn parse_week(raw: &str) -> ProgramWeek {
  parse_leading_int(raw)
    .and_then(|n| u8::try_from(n).ok())
    .and_then(|n| ProgramWeek::try_from(n).ok())
    .unwrap_or_else(|| {
      debug!("Week {:?} out of range, using week 1", raw);
      ProgramWeek::One
    })
}

fn parse_bbb_percentage(raw: &str) -> BbbPercentage {
  parse_leading_int(raw)
    .and_then(|n| u8::try_from(n).ok())
    .and_then(|n| BbbPercentage::new(n).ok())
    .unwrap_or_else(|| {
      debug!("BBB percentage {:?} not selectable, using default", raw);
      BbbPercentage::DEFAULT
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_query_is_all_defaults() {
    let state = ShareState::from_query("");
    assert_eq!(state, ShareState::default());
    assert_eq!(state.week, ProgramWeek::One);
    assert_eq!(state.bbb_percentage.get(), 50);
    assert!(!state.less_boring);
    assert_eq!(state.to_query(), "");
  }

  #[test]
  fn test_parse_full_query() {
    let state = ShareState::from_query("?ohp=135&squat=315&bench=225&dead=405&less-boring=1&week=3&bbb=60");
    assert_eq!(state.one_rep_maxes.overhead_press, 135);
    assert_eq!(state.one_rep_maxes.squat, 315);
    assert_eq!(state.one_rep_maxes.bench_press, 225);
    assert_eq!(state.one_rep_maxes.deadlift, 405);
    assert!(state.less_boring);
    assert_eq!(state.week, ProgramWeek::Three);
    assert_eq!(state.bbb_percentage.get(), 60);
  }

  #[test]
  fn test_clamps_bad_values() {
    let state = ShareState::from_query("squat=-50&bench=abc&dead=405lbs&ohp=99.9&week=4&bbb=57");
    assert_eq!(state.one_rep_maxes.squat, 0);
    assert_eq!(state.one_rep_maxes.bench_press, 0);
    assert_eq!(state.one_rep_maxes.deadlift, 405);
    assert_eq!(state.one_rep_maxes.overhead_press, 99);
    assert_eq!(state.week, ProgramWeek::One);
    assert_eq!(state.bbb_percentage.get(), 50);

    let state = ShareState::from_query("week=4");
    assert_eq!(state.week, ProgramWeek::One);
    assert_eq!(state.to_query(), "");

    let state = ShareState::from_query("week=0&bbb=85&less-boring=true");
    assert_eq!(state.week, ProgramWeek::One);
    assert_eq!(state.bbb_percentage.get(), 50);
    assert!(!state.less_boring);
  }

  #[test]
  fn test_unknown_keys_ignored() {
    let state = ShareState::from_query("clean=200&squat=300");
    assert_eq!(state.one_rep_maxes.squat, 300);
    assert_eq!(state.to_query(), "squat=300");
  }

  #[test]
  fn test_query_omits_defaults_in_lift_order() {
    let state = ShareState {
      one_rep_maxes: LiftMaxes {
        overhead_press: 0,
        squat: 315,
        bench_press: 0,
        deadlift: 405,
      },
      less_boring: true,
      week: ProgramWeek::Two,
      bbb_percentage: BbbPercentage::DEFAULT,
    };
    assert_eq!(state.to_query(), "squat=315&dead=405&less-boring=1&week=2");
  }

  #[test]
  fn test_share_url_round_trip() {
    let state = ShareState {
      one_rep_maxes: LiftMaxes {
        overhead_press: 135,
        squat: 0,
        bench_press: 225,
        deadlift: 0,
      },
      less_boring: false,
      week: ProgramWeek::Three,
      bbb_percentage: BbbPercentage::new(70).unwrap(),
    };
    let link = state.share_url("https://example.com/531?stale=1").unwrap();
    assert_eq!(link, "https://example.com/531?ohp=135&bench=225&week=3&bbb=70");

    let parsed = ShareState::from_url(&Url::parse(&link).unwrap());
    assert_eq!(parsed, state);
  }

  #[test]
  fn test_share_url_without_state_is_bare() {
    let link = ShareState::default().share_url("https://example.com/531?old=1").unwrap();
    assert_eq!(link, "https://example.com/531");
  }

  #[test]
  fn test_share_url_rejects_bad_base() {
    let err = ShareState::default().share_url("not a url").unwrap_err();
    assert!(matches!(err, ShareError::InvalidBaseUrl(_)));
  }

  #[test]
  fn test_plan_options_from_state() {
    let state = ShareState::from_query("less-boring=1&week=2&bbb=65");
    let options = state.plan_options();
    assert!(options.less_boring);
    assert_eq!(options.week, ProgramWeek::Two);
    assert_eq!(options.bbb_percentage.get(), 65);
    assert_eq!(options.plate_increment.get(), 5);
  }
}
