//! Header clock text.
//!
//! The `strftime` pattern comes from config, so it is checked once with
//! [`ClockFormat::parse`] before any time is rendered with it. chrono panics
//! when an unknown specifier reaches `to_string`.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use thiserror::Error;

use crate::config::ClockConfig;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid clock format {pattern:?}")]
pub struct ClockFormatError {
    pub pattern: String,
}

/// A `strftime` pattern known to contain only valid specifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFormat(String);

impl ClockFormat {
    pub fn parse(pattern: &str) -> Result<Self, ClockFormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ClockFormatError {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self(ClockConfig::default().format)
    }
}

/// Render `at` for the header clock.
pub fn clock_text<Tz>(at: &DateTime<Tz>, format: &ClockFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(format.as_str())).is_err() {
        out.clear();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_default_format_includes_seconds() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 9, 15, 4, 5).unwrap();

        let format = ClockFormat::parse(&ClockConfig::default().format).unwrap();
        assert_eq!(format, ClockFormat::default());
        assert_eq!(clock_text(&at, &format), "3:04:05 PM");
    }

    #[test]
    fn test_custom_format() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 9, 0, 0, 9).unwrap();

        let format = ClockFormat::parse("%H:%M:%S").unwrap();
        assert_eq!(clock_text(&at, &format), "00:00:09");
    }

    #[test]
    fn test_unknown_specifier_is_rejected() {
        assert_eq!(
            ClockFormat::parse("%Q"),
            Err(ClockFormatError {
                pattern: "%Q".to_string()
            })
        );
        assert!(ClockFormat::parse("%H:%").is_err());
    }

    #[test]
    fn test_default_renders_when_config_pattern_is_bad() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 9, 9, 30, 0).unwrap();

        let format = ClockFormat::parse("%Q %H").unwrap_or_default();
        assert_eq!(clock_text(&at, &format), "9:30:00 AM");
    }
}
