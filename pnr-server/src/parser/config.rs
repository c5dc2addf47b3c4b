//! Parser options and limits.

use chrono::Duration;
use serde::Deserialize;

use crate::domain::TimeFormat;

/// Per-request rendering options supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Clock style for segment departure and arrival times.
    pub segment_time_format: TimeFormat,
    /// Clock style for the departure time shown next to a transit.
    pub transit_time_format: TimeFormat,
}

impl ParseOptions {
    pub fn new(segment_time_format: TimeFormat, transit_time_format: TimeFormat) -> Self {
        Self {
            segment_time_format,
            transit_time_format,
        }
    }
}

/// Limits and heuristics thresholds for parsing.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Inputs larger than this are rejected outright.
    pub max_input_bytes: usize,

    /// Lines past this count are ignored.
    pub max_lines: usize,

    /// Lines longer than this (in characters) are skipped.
    pub max_line_len: usize,

    /// A connection must be strictly longer than this to count as a transit (minutes).
    pub min_transit_mins: i64,

    /// A connection must be strictly shorter than this to count as a transit (minutes).
    pub max_transit_mins: i64,

    /// Gaps longer than this start a new journey leg (minutes).
    pub stopover_threshold_mins: i64,

    /// A first-segment date further than this many months in the past is
    /// assumed to belong to next year.
    pub past_date_tolerance_months: u32,
}

impl ParserConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_input_bytes: usize,
        max_lines: usize,
        max_line_len: usize,
        min_transit_mins: i64,
        max_transit_mins: i64,
        stopover_threshold_mins: i64,
        past_date_tolerance_months: u32,
    ) -> Self {
        Self {
            max_input_bytes,
            max_lines,
            max_line_len,
            min_transit_mins,
            max_transit_mins,
            stopover_threshold_mins,
            past_date_tolerance_months,
        }
    }

    /// Returns true if a gap of `minutes` is a plausible connection.
    pub fn is_transit(&self, minutes: i64) -> bool {
        minutes > self.min_transit_mins && minutes < self.max_transit_mins
    }

    /// Returns the stopover threshold as a Duration.
    pub fn stopover_threshold(&self) -> Duration {
        Duration::minutes(self.stopover_threshold_mins)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 256 * 1024,
            max_lines: 2000,
            max_line_len: 512,
            min_transit_mins: 30,
            max_transit_mins: 1440, // 24 hours
            stopover_threshold_mins: 1440,
            past_date_tolerance_months: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParserConfig::default();

        assert_eq!(config.max_input_bytes, 262_144);
        assert_eq!(config.max_lines, 2000);
        assert_eq!(config.max_line_len, 512);
        assert_eq!(config.min_transit_mins, 30);
        assert_eq!(config.max_transit_mins, 1440);
        assert_eq!(config.stopover_threshold(), Duration::hours(24));
        assert_eq!(config.past_date_tolerance_months, 3);
    }

    #[test]
    fn transit_window_is_exclusive() {
        let config = ParserConfig::default();

        assert!(!config.is_transit(20));
        assert!(!config.is_transit(30));
        assert!(config.is_transit(31));
        assert!(config.is_transit(180));
        assert!(config.is_transit(1439));
        assert!(!config.is_transit(1440));
        assert!(!config.is_transit(-45));
    }

    #[test]
    fn custom_config() {
        let config = ParserConfig::new(1024, 10, 80, 0, 2880, 720, 6);

        assert_eq!(config.max_lines, 10);
        assert!(config.is_transit(1));
        assert!(config.is_transit(2000));
        assert_eq!(config.stopover_threshold(), Duration::hours(12));
    }

    #[test]
    fn options_deserialize() {
        let opts: ParseOptions =
            serde_json::from_str(r#"{"segmentTimeFormat": "24h", "transitTimeFormat": "12h"}"#)
                .unwrap();
        assert_eq!(opts.segment_time_format, TimeFormat::TwentyFourHour);
        assert_eq!(opts.transit_time_format, TimeFormat::TwelveHour);
    }

    #[test]
    fn options_default_when_missing() {
        let opts: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ParseOptions::default());
        assert_eq!(opts.segment_time_format, TimeFormat::TwelveHour);
    }
}
