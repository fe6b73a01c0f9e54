//! Date, timestamp and number formatting
//!
//! Formats are plain configuration values rather than locale lookups. A
//! [`FormatConfig`] can be built in code or deserialized from JSON; every
//! field falls back to its default when missing.

use crate::error::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Named date styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    #[default]
    Short,
    Shortest,
    DateAndTimeShort,
    TimeShort,
}

impl FromStr for DateStyle {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short" => Ok(DateStyle::Short),
            "shortest" => Ok(DateStyle::Shortest),
            "dateAndTimeShort" => Ok(DateStyle::DateAndTimeShort),
            "timeShort" => Ok(DateStyle::TimeShort),
            other => Err(CodecError::InvalidFormat(format!("unknown date format ({other})"))),
        }
    }
}

/// chrono format strings for each date style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateFormats {
    pub short: String,
    pub shortest: String,
    pub date_and_time_short: String,
    pub time_short: String,
    /// Second format tried by [`parse_date`] when `short` does not match
    pub short_flexible_for_parsing: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            short: "%m/%d/%Y".to_string(),
            shortest: "%m/%d/%y".to_string(),
            date_and_time_short: "%m/%d/%Y %H:%M".to_string(),
            time_short: "%H:%M".to_string(),
            short_flexible_for_parsing: "%Y-%m-%d".to_string(),
        }
    }
}

impl DateFormats {
    /// Day-first formats (`25/12/2024`)
    pub fn day_first() -> Self {
        Self {
            short: "%d/%m/%Y".to_string(),
            shortest: "%d/%m/%y".to_string(),
            date_and_time_short: "%d/%m/%Y %H:%M".to_string(),
            time_short: "%H:%M".to_string(),
            short_flexible_for_parsing: "%Y-%m-%d".to_string(),
        }
    }

    /// Format string for a style
    pub fn pattern(&self, style: DateStyle) -> &str {
        match style {
            DateStyle::Short => &self.short,
            DateStyle::Shortest => &self.shortest,
            DateStyle::DateAndTimeShort => &self.date_and_time_short,
            DateStyle::TimeShort => &self.time_short,
        }
    }
}

/// Number formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberFormat {
    pub decimal_separator: char,
    /// Ignored when parsing, never written when formatting
    pub thousands_separator: char,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            thousands_separator: ',',
            max_fraction_digits: 5,
        }
    }
}

/// All formatting configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub date: DateFormats,
    pub number: NumberFormat,
}

impl FormatConfig {
    /// Load configuration from JSON text
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CodecError::InvalidFormat(e.to_string()))
    }
}

// ============================================================
// Timestamps
// ============================================================

/// Seconds since the Unix epoch, rounded to the nearest second (halves up)
pub fn unix_timestamp(date: &DateTime<Utc>) -> i64 {
    (date.timestamp_millis() + 500).div_euclid(1000)
}

/// Current Unix timestamp
pub fn now_unix_timestamp() -> i64 {
    unix_timestamp(&Utc::now())
}

// ============================================================
// Dates
// ============================================================

/// Format a date-time with one of the configured styles
pub fn format_date(date: &NaiveDateTime, style: DateStyle, formats: &DateFormats) -> Result<String> {
    let pattern = formats.pattern(style);
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| CodecError::InvalidFormat(format!("invalid date pattern {pattern:?}")))?;
    Ok(out)
}

/// Parse a date written in the short style, falling back to the flexible
/// parsing format. Empty input and unparsable input yield `None`.
///
/// Numeric fields accept values without zero padding, so `1/5/2024` matches
/// `%m/%d/%Y`. Field order and separators must still match.
pub fn parse_date(s: &str, formats: &DateFormats) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, &formats.short)
        .or_else(|_| NaiveDate::parse_from_str(s, &formats.short_flexible_for_parsing))
        .ok()
}

/// Whether `s` is empty or a parsable date
pub fn validate_date(s: &str, formats: &DateFormats) -> bool {
    s.is_empty() || parse_date(s, formats).is_some()
}

// ============================================================
// Numbers
// ============================================================

/// Format a number with at most `max_fraction_digits` decimals, trailing
/// zeros removed
pub fn format_number(n: f64, fmt: &NumberFormat) -> Result<String> {
    if !n.is_finite() {
        return Err(CodecError::InvalidFormat(format!("cannot format {n}")));
    }
    let fixed = format!("{:.*}", fmt.max_fraction_digits, n);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    Ok(trimmed.replace('.', &fmt.decimal_separator.to_string()))
}

/// Parse a formatted number. Empty input yields `None`.
///
/// Fails when the decimal and thousands separators are the same character,
/// since the two could not be told apart.
pub fn parse_number(s: &str, fmt: &NumberFormat) -> Result<Option<f64>> {
    if fmt.decimal_separator == fmt.thousands_separator {
        return Err(CodecError::InvalidFormat(format!(
            "decimal and thousands separators are both {:?}",
            fmt.decimal_separator
        )));
    }
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let normalized: String = s
        .chars()
        .filter(|c| *c != fmt.thousands_separator)
        .map(|c| if c == fmt.decimal_separator { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| CodecError::InvalidFormat(format!("not a number: {s:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn christmas() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 25)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap()
    }

    #[test]
    fn test_unix_timestamp_rounds() {
        let t = Utc.timestamp_millis_opt(1_700_000_000_499).unwrap();
        assert_eq!(unix_timestamp(&t), 1_700_000_000);
        let t = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
        assert_eq!(unix_timestamp(&t), 1_700_000_001);
        let t = Utc.timestamp_millis_opt(-1_500).unwrap();
        assert_eq!(unix_timestamp(&t), -1);
    }

    #[test]
    fn test_date_style_from_str() {
        assert_eq!("short".parse::<DateStyle>().unwrap(), DateStyle::Short);
        assert_eq!("timeShort".parse::<DateStyle>().unwrap(), DateStyle::TimeShort);
        assert!(matches!("long".parse::<DateStyle>(), Err(CodecError::InvalidFormat(_))));
    }

    #[test]
    fn test_format_date() {
        let f = DateFormats::default();
        assert_eq!(format_date(&christmas(), DateStyle::Short, &f).unwrap(), "12/25/2024");
        assert_eq!(format_date(&christmas(), DateStyle::Shortest, &f).unwrap(), "12/25/24");
        assert_eq!(
            format_date(&christmas(), DateStyle::DateAndTimeShort, &f).unwrap(),
            "12/25/2024 09:05"
        );
        assert_eq!(format_date(&christmas(), DateStyle::TimeShort, &f).unwrap(), "09:05");

        let f = DateFormats::day_first();
        assert_eq!(format_date(&christmas(), DateStyle::Short, &f).unwrap(), "25/12/2024");
    }

    #[test]
    fn test_format_date_bad_pattern() {
        let f = DateFormats {
            short: "%Q".to_string(),
            ..DateFormats::default()
        };
        assert!(matches!(
            format_date(&christmas(), DateStyle::Short, &f),
            Err(CodecError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        let f = DateFormats::default();
        let expected = NaiveDate::from_ymd_opt(2024, 12, 25);
        assert_eq!(parse_date("12/25/2024", &f), expected);
        assert_eq!(parse_date("2024-12-25", &f), expected);
        assert_eq!(parse_date("", &f), None);
        assert_eq!(parse_date("25/12/2024", &f), None);
        assert!(validate_date("", &f));
        assert!(validate_date("12/25/2024", &f));
        assert!(!validate_date("nope", &f));
    }

    #[test]
    fn test_format_number() {
        let f = NumberFormat::default();
        assert_eq!(format_number(3.0, &f).unwrap(), "3");
        assert_eq!(format_number(3.14159265, &f).unwrap(), "3.14159");
        assert_eq!(format_number(-2.5, &f).unwrap(), "-2.5");
        assert_eq!(format_number(-0.000001, &f).unwrap(), "0");
        assert_eq!(format_number(1234.5, &f).unwrap(), "1234.5");

        let comma = NumberFormat {
            decimal_separator: ',',
            thousands_separator: ' ',
            ..NumberFormat::default()
        };
        assert_eq!(format_number(1234.5, &comma).unwrap(), "1234,5");
        assert!(format_number(f64::NAN, &f).is_err());
    }

    #[test]
    fn test_parse_number() {
        let f = NumberFormat::default();
        assert_eq!(parse_number("", &f).unwrap(), None);
        assert_eq!(parse_number("1,234.5", &f).unwrap(), Some(1234.5));
        assert_eq!(parse_number(" -2 ", &f).unwrap(), Some(-2.0));
        assert!(parse_number("abc", &f).is_err());

        let comma = NumberFormat {
            decimal_separator: ',',
            thousands_separator: '.',
            ..NumberFormat::default()
        };
        assert_eq!(parse_number("1.234,5", &comma).unwrap(), Some(1234.5));
    }

    #[test]
    fn test_parse_number_rejects_ambiguous_separators() {
        let same = NumberFormat {
            decimal_separator: ',',
            thousands_separator: ',',
            ..NumberFormat::default()
        };
        assert!(matches!(parse_number("1,5", &same), Err(CodecError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_date_accepts_unpadded_fields() {
        let f = DateFormats::default();
        assert_eq!(parse_date("1/5/2024", &f), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(parse_date("1-5-2024", &f), None);
    }

    #[test]
    fn test_config_from_json() {
        let cfg = FormatConfig::from_json_str(r#"{"date": {"short": "%Y-%m-%d"}}"#).unwrap();
        assert_eq!(cfg.date.short, "%Y-%m-%d");
        assert_eq!(cfg.date.time_short, "%H:%M");
        assert_eq!(cfg.number, NumberFormat::default());

        assert_eq!(FormatConfig::from_json_str("{}").unwrap(), FormatConfig::default());
        assert!(FormatConfig::from_json_str("[").is_err());
    }
}
