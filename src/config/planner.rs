// ABOUTME: Planner configuration with environment overrides and validation
// ABOUTME: Global singleton loaded once; falls back to defaults on invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::Weekday;
use pantry_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// First column of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday
    Monday,
}

impl WeekStart {
    /// Matching `chrono` weekday
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for WeekStart {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(ConfigError::Parse(format!(
                "week start must be sunday or monday, got '{other}'"
            ))),
        }
    }
}

impl Display for WeekStart {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Sunday => f.write_str("sunday"),
            Self::Monday => f.write_str("monday"),
        }
    }
}

/// Planner configuration container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Items expiring within this many days are flagged as expiring soon
    pub expiry_soon_days: i64,
    /// First day of the week in calendar grids
    pub week_start: WeekStart,
    /// Largest accepted recipe scale factor
    pub max_scale_factor: f64,
    /// Whether partially available ingredients are suggested for purchase
    pub shopping_include_partial: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            expiry_soon_days: defaults::EXPIRY_SOON_DAYS,
            week_start: WeekStart::default(),
            max_scale_factor: defaults::MAX_SCALE_FACTOR,
            shopping_include_partial: defaults::SHOPPING_INCLUDE_PARTIAL,
        }
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiry_soon_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "expiry_soon_days must be >= 0",
            ));
        }

        if !self.max_scale_factor.is_finite() || self.max_scale_factor <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "max_scale_factor must be a finite number > 0",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::EXPIRY_SOON_DAYS, &mut self.expiry_soon_days)?;
        Self::apply_env_var(env_config::WEEK_START, &mut self.week_start)?;
        Self::apply_env_var(env_config::MAX_SCALE_FACTOR, &mut self.max_scale_factor)?;

        if let Ok(val) = env::var(env_config::SHOPPING_INCLUDE_PARTIAL) {
            self.shopping_include_partial = parse_flag(&val).ok_or_else(|| {
                ConfigError::Parse(format!("Invalid {}", env_config::SHOPPING_INCLUDE_PARTIAL))
            })?;
        }

        Ok(self)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_week_start_parsing() {
        assert_eq!("Monday".parse::<WeekStart>().ok(), Some(WeekStart::Monday));
        assert_eq!("sun".parse::<WeekStart>().ok(), Some(WeekStart::Sunday));
        assert!("friday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_soon_days_rejected() {
        let config = PlannerConfig {
            expiry_soon_days: -1,
            ..PlannerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
