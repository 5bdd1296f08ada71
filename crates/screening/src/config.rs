//! Screening configuration with configurable thresholds
//!
//! Thresholds are supplied when the rule engine is built, so deployments can
//! tune them and tests can pin them.

use chrono::TimeDelta;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds and windows for the screening rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Amount strictly above which the large-amount rule fires
    #[serde(default = "default_large_amount_threshold")]
    pub large_amount_threshold: Decimal,

    /// Prior transactions in the window needed for the high-frequency rule
    #[serde(default = "default_high_frequency_count")]
    pub high_frequency_count: usize,

    /// Look-back window of the high-frequency rule (in minutes)
    #[serde(default = "default_high_frequency_window_minutes")]
    pub high_frequency_window_minutes: i64,

    /// Look-back window of the rapid-movement rule (in minutes)
    #[serde(default = "default_rapid_movement_window_minutes")]
    pub rapid_movement_window_minutes: i64,

    /// Buffered screenings per live-feed subscriber
    #[serde(default = "default_feed_capacity")]
    pub feed_capacity: usize,
}

// Default value functions for serde
fn default_large_amount_threshold() -> Decimal {
    Decimal::new(10_000, 0)
}

fn default_high_frequency_count() -> usize {
    5
}

fn default_high_frequency_window_minutes() -> i64 {
    5
}

fn default_rapid_movement_window_minutes() -> i64 {
    60
}

fn default_feed_capacity() -> usize {
    256
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            large_amount_threshold: default_large_amount_threshold(),
            high_frequency_count: default_high_frequency_count(),
            high_frequency_window_minutes: default_high_frequency_window_minutes(),
            rapid_movement_window_minutes: default_rapid_movement_window_minutes(),
            feed_capacity: default_feed_capacity(),
        }
    }
}

impl ScreeningConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|msg| std::io::Error::new(std::io::ErrorKind::InvalidData, msg))?;
        Ok(config)
    }

    /// Check that both windows are non-negative and fit a chrono Duration
    pub fn validate(&self) -> Result<(), String> {
        for (name, minutes) in [
            ("high_frequency_window_minutes", self.high_frequency_window_minutes),
            ("rapid_movement_window_minutes", self.rapid_movement_window_minutes),
        ] {
            if minutes < 0 || TimeDelta::try_minutes(minutes).is_none() {
                return Err(format!("{} out of range: {}", name, minutes));
            }
        }
        Ok(())
    }

    /// High-frequency window as chrono Duration
    ///
    /// Saturates at [`TimeDelta::MAX`] for windows too large to represent.
    pub fn high_frequency_window(&self) -> TimeDelta {
        window(self.high_frequency_window_minutes)
    }

    /// Rapid-movement window as chrono Duration
    pub fn rapid_movement_window(&self) -> TimeDelta {
        window(self.rapid_movement_window_minutes)
    }
}

fn window(minutes: i64) -> TimeDelta {
    TimeDelta::try_minutes(minutes).unwrap_or(TimeDelta::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();

        assert_eq!(config.large_amount_threshold, Decimal::new(10_000, 0));
        assert_eq!(config.high_frequency_count, 5);
        assert_eq!(config.high_frequency_window(), chrono::Duration::minutes(5));
        assert_eq!(config.rapid_movement_window(), chrono::Duration::hours(1));
        assert_eq!(config.feed_capacity, 256);
    }

    #[test]
    fn test_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{ "large_amount_threshold": "5000", "high_frequency_count": 3 }"#;
        let config: ScreeningConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.large_amount_threshold, Decimal::new(5_000, 0));
        assert_eq!(config.high_frequency_count, 3);
        assert_eq!(config.high_frequency_window_minutes, 5); // default
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rapid_movement_window_minutes": 30 }}"#).unwrap();

        let config = ScreeningConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rapid_movement_window(), chrono::Duration::minutes(30));
        assert_eq!(config.large_amount_threshold, Decimal::new(10_000, 0));
    }

    #[test]
    fn test_config_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ScreeningConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_config_window_out_of_range_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "high_frequency_window_minutes": 9223372036854775807 }}"#).unwrap();
        let err = ScreeningConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "rapid_movement_window_minutes": -1 }}"#).unwrap();
        let err = ScreeningConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_oversized_window_saturates() {
        let config = ScreeningConfig {
            high_frequency_window_minutes: i64::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.high_frequency_window(), TimeDelta::MAX);
    }
}
