//! Runtime configuration read from `LIFE_*` environment variables.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::Algorithm;
use crate::error::ConfigError;

pub const TICK_MS_RANGE: RangeInclusive<u64> = 50..=5000;
pub const VIEWPORT_RANGE: RangeInclusive<u32> = 5..=200;
pub const DENSITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Delay between generations while playing
    pub tick_interval_ms: u64,
    /// Visible columns at zoom 1.0
    pub viewport_cols: u32,
    /// Visible rows at zoom 1.0
    pub viewport_rows: u32,
    /// Chance of a cell being alive after Random
    pub random_density: f64,
    pub algorithm: Algorithm,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            viewport_cols: 30,
            viewport_rows: 30,
            random_density: 0.3,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            tick_interval_ms: parse_in_range(&lookup, "LIFE_TICK_MS", TICK_MS_RANGE)?
                .unwrap_or(defaults.tick_interval_ms),
            viewport_cols: parse_in_range(&lookup, "LIFE_COLUMNS", VIEWPORT_RANGE)?
                .unwrap_or(defaults.viewport_cols),
            viewport_rows: parse_in_range(&lookup, "LIFE_ROWS", VIEWPORT_RANGE)?
                .unwrap_or(defaults.viewport_rows),
            random_density: parse_in_range(&lookup, "LIFE_DENSITY", DENSITY_RANGE)?
                .unwrap_or(defaults.random_density),
            algorithm: match lookup("LIFE_ALGORITHM") {
                Some(raw) => raw.parse()?,
                None => defaults.algorithm,
            },
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn parse_in_range<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    range: RangeInclusive<T>,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialOrd + Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value: T = raw.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: raw.clone(),
    })?;
    if !range.contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        });
    }
    Ok(Some(value))
}
