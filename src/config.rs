use log::warn;
use std::env;
use std::num::NonZeroU32;

use crate::program::DEFAULT_PLATE_INCREMENT;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const PLATE_INCREMENT_VAR: &str = "BBB_PLATE_INCREMENT";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {name}: {value}")]
  Invalid { name: String, value: String },
}

impl serde::Serialize for ConfigError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Planner Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
  /// Loads are rounded up to a multiple of this (pounds)
  pub plate_increment: NonZeroU32,
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      plate_increment: DEFAULT_PLATE_INCREMENT,
    }
  }
}

impl PlannerConfig {
  /// Load a `.env` file if present, then read the environment.
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let plate_increment = match env::var(PLATE_INCREMENT_VAR) {
      Ok(raw) => parse_increment(&raw).ok_or_else(|| {
        warn!("Rejecting {}={:?}", PLATE_INCREMENT_VAR, raw);
        ConfigError::Invalid {
          name: PLATE_INCREMENT_VAR.into(),
          value: raw.clone(),
        }
      })?,
      Err(env::VarError::NotPresent) => DEFAULT_PLATE_INCREMENT,
      Err(env::VarError::NotUnicode(raw)) => {
        warn!("Rejecting non-UTF-8 {}", PLATE_INCREMENT_VAR);
        return Err(ConfigError::Invalid {
          name: PLATE_INCREMENT_VAR.into(),
          value: raw.to_string_lossy().into_owned(),
        });
      }
    };

    Ok(Self { plate_increment })
  }
}

fn parse_increment(raw: &str) -> Option<NonZeroU32> {
  raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}
