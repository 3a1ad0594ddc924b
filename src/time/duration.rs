//! Signed nanosecond-resolution durations.
//!
//! Grounded in `original_source/src/Library/Physics/Time/Duration.cpp`: a
//! `Duration` is a single signed `i64` nanosecond count, with the decompose
//! accessors (`getDays`/`getHours`/.../`getNanoseconds`) all operating on
//! `abs(count)` and a separately-tracked sign, and both a `Standard` and an
//! `ISO8601` text format, each with a matching parser. This module keeps
//! that exact pair of formats and their regexes.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhysicsError, Result};

const NS_PER_US: i64 = 1_000;
const NS_PER_MS: i64 = 1_000_000;
const NS_PER_S: i64 = 1_000_000_000;
const NS_PER_MIN: i64 = 60 * NS_PER_S;
const NS_PER_HOUR: i64 = 60 * NS_PER_MIN;
const NS_PER_DAY: i64 = 24 * NS_PER_HOUR;

/// The text representation a [`Duration`] is formatted as or parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `[-]D HH:MM:SS.mmm.uuu.nnn`, shortened from the left when the
    /// leading fields are zero (see `spec.md` §4.B).
    Standard,
    /// `[-]P[nD][T[nH][nM][n.fffffffffS]]`.
    Iso8601,
}

/// A signed span of time with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    ns: i64,
}

impl Duration {
    pub fn zero() -> Self {
        Duration { ns: 0 }
    }

    /// The undefined sentinel (`spec.md` §3): never produced by the
    /// constructors above, only by this call.
    pub fn undefined() -> Self {
        Duration { ns: i64::MIN }
    }

    pub fn is_defined(&self) -> bool {
        self.ns != i64::MIN
    }

    pub fn nanoseconds(count: i64) -> Self {
        Duration { ns: count }
    }

    pub fn microseconds(count: f64) -> Self {
        Duration { ns: (count * NS_PER_US as f64) as i64 }
    }

    pub fn milliseconds(count: f64) -> Self {
        Duration { ns: (count * NS_PER_MS as f64) as i64 }
    }

    pub fn seconds(count: f64) -> Self {
        Duration { ns: (count * NS_PER_S as f64) as i64 }
    }

    pub fn minutes(count: f64) -> Self {
        Duration { ns: (count * NS_PER_MIN as f64) as i64 }
    }

    pub fn hours(count: f64) -> Self {
        Duration { ns: (count * NS_PER_HOUR as f64) as i64 }
    }

    pub fn days(count: f64) -> Self {
        Duration { ns: (count * NS_PER_DAY as f64) as i64 }
    }

    pub fn weeks(count: f64) -> Self {
        Duration { ns: (count * 7.0 * NS_PER_DAY as f64) as i64 }
    }

    pub fn count_ns(&self) -> i64 {
        self.ns
    }

    pub fn is_zero(&self) -> bool {
        self.ns == 0
    }

    pub fn is_positive(&self) -> bool {
        self.ns >= 0
    }

    pub fn is_negative(&self) -> bool {
        self.ns < 0
    }

    pub fn absolute(&self) -> Duration {
        Duration { ns: self.ns.abs() }
    }

    fn unsigned_field(&self, divisor: i64, modulus: i64) -> i64 {
        let v = self.ns.unsigned_abs() as i64 / divisor;
        if modulus > 0 {
            v % modulus
        } else {
            v
        }
    }

    pub fn nanoseconds_component(&self) -> i64 {
        self.unsigned_field(1, 1000)
    }

    pub fn microseconds_component(&self) -> i64 {
        self.unsigned_field(NS_PER_US, 1000)
    }

    pub fn milliseconds_component(&self) -> i64 {
        self.unsigned_field(NS_PER_MS, 1000)
    }

    pub fn seconds_component(&self) -> i64 {
        self.unsigned_field(NS_PER_S, 60)
    }

    pub fn minutes_component(&self) -> i64 {
        self.unsigned_field(NS_PER_MIN, 60)
    }

    pub fn hours_component(&self) -> i64 {
        self.unsigned_field(NS_PER_HOUR, 24)
    }

    pub fn days_component(&self) -> i64 {
        self.unsigned_field(NS_PER_DAY, 0)
    }

    pub fn in_seconds(&self) -> f64 {
        self.ns as f64 / NS_PER_S as f64
    }

    pub fn in_minutes(&self) -> f64 {
        self.ns as f64 / NS_PER_MIN as f64
    }

    pub fn in_hours(&self) -> f64 {
        self.ns as f64 / NS_PER_HOUR as f64
    }

    pub fn in_days(&self) -> f64 {
        self.ns as f64 / NS_PER_DAY as f64
    }

    pub fn in_weeks(&self) -> f64 {
        self.ns as f64 / (7.0 * NS_PER_DAY as f64)
    }

    /// Checked division; mirrors the original's explicit zero-divider guard.
    pub fn checked_div(&self, divider: f64) -> Result<Duration> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Duration"));
        }
        if divider == 0.0 {
            return Err(PhysicsError::InvalidInput("cannot divide a duration by zero".into()));
        }
        Ok(Duration { ns: (self.ns as f64 / divider) as i64 })
    }

    pub fn to_string_with(&self, format: Format) -> String {
        let sign = if self.ns < 0 { "-" } else { "" };
        let days = self.days_component();
        let hours = self.hours_component();
        let minutes = self.minutes_component();
        let seconds = self.seconds_component();
        let ms = self.milliseconds_component();
        let us = self.microseconds_component();
        let ns = self.nanoseconds_component();

        match format {
            Format::Standard => {
                if days > 0 {
                    format!("{sign}{days} {hours:02}:{minutes:02}:{seconds:02}.{ms:03}.{us:03}.{ns:03}")
                } else if hours > 0 {
                    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{ms:03}.{us:03}.{ns:03}")
                } else if minutes > 0 {
                    format!("{sign}{minutes:02}:{seconds:02}.{ms:03}.{us:03}.{ns:03}")
                } else {
                    format!("{sign}{seconds:02}.{ms:03}.{us:03}.{ns:03}")
                }
            }
            Format::Iso8601 => {
                if self.is_zero() {
                    return "PT0H0M0S".to_string();
                }

                let day_string = if days > 0 { format!("{days}D") } else { String::new() };

                let mut time_string = if ms > 0 || us > 0 || ns > 0 {
                    let floating_seconds = seconds as f64
                        + ms as f64 / 1000.0
                        + us as f64 / 1_000_000.0
                        + ns as f64 / 1_000_000_000.0;
                    let precision = if ns == 100 {
                        7
                    } else if ns == 10 {
                        8
                    } else if ns > 0 {
                        9
                    } else if us == 100 {
                        4
                    } else if us == 10 {
                        5
                    } else if us > 0 {
                        6
                    } else if ms == 100 {
                        1
                    } else if ms == 10 {
                        2
                    } else {
                        3
                    };
                    format!("{floating_seconds:.precision$}S")
                } else if seconds > 0 {
                    format!("{seconds}S")
                } else {
                    String::new()
                };

                if minutes > 0 {
                    time_string = format!("{minutes}M{time_string}");
                }
                if hours > 0 {
                    time_string = format!("{hours}H{time_string}");
                }

                let prefix = if self.ns < 0 { "-P" } else { "P" };
                if time_string.is_empty() {
                    format!("{prefix}{day_string}")
                } else {
                    format!("{prefix}{day_string}T{time_string}")
                }
            }
        }
    }

    /// Auto-detect format (ISO 8601 if it starts with, or starts with `-`
    /// followed by, `P`; `Standard` otherwise) and parse.
    pub fn parse(text: &str) -> Result<Duration> {
        if text.is_empty() {
            return Err(PhysicsError::InvalidInput("cannot parse an empty duration string".into()));
        }
        let bytes = text.as_bytes();
        if bytes[0] == b'P' || (bytes.len() > 1 && bytes[1] == b'P') {
            Self::parse_with(text, Format::Iso8601)
        } else {
            Self::parse_with(text, Format::Standard)
        }
    }

    pub fn parse_with(text: &str, format: Format) -> Result<Duration> {
        match format {
            Format::Standard => Self::parse_standard(text),
            Format::Iso8601 => Self::parse_iso8601(text),
        }
    }

    fn parse_standard(text: &str) -> Result<Duration> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(-)?(?:([0-9]+) )?(?:([0-9]{2}):)?(?:([0-9]{2}):)?([0-9]{2})(?:\.([0-9]{3}))?(?:\.([0-9]{3}))?(?:\.([0-9]{3}))?$",
            )
            .unwrap()
        });

        let m = PATTERN
            .captures(text)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse [Standard] duration string '{text}'")))?;

        let group_i64 = |i: usize| -> i64 { m.get(i).map(|g| g.as_str().parse().unwrap_or(0)).unwrap_or(0) };

        let is_negative = m.get(1).is_some();
        let days = group_i64(2);
        // When only one of the two-digit groups is present it is minutes,
        // not hours: same shift the original performs via match[3]/match[4].
        let (hours, minutes) = if m.get(3).is_some() && m.get(4).is_some() {
            (group_i64(3), group_i64(4))
        } else if m.get(3).is_some() {
            (0, group_i64(3))
        } else {
            (0, 0)
        };
        let seconds = group_i64(5);
        let milliseconds = group_i64(6);
        let microseconds = group_i64(7);
        let nanoseconds = group_i64(8);

        let duration = Duration::days(days as f64)
            + Duration::hours(hours as f64)
            + Duration::minutes(minutes as f64)
            + Duration::seconds(seconds as f64)
            + Duration::milliseconds(milliseconds as f64)
            + Duration::microseconds(microseconds as f64)
            + Duration::nanoseconds(nanoseconds);

        Ok(if is_negative { -duration } else { duration })
    }

    fn parse_iso8601(text: &str) -> Result<Duration> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(-)?P(?:([0-9]+)D)?(?:T(?:([0-9]{1,2})H)?(?:([0-9]{1,2})M)?(?:(?:([0-9]{1,2})(?:\.([0-9]{1,9}))?)S)?)?$",
            )
            .unwrap()
        });

        let m = PATTERN
            .captures(text)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse [ISO8601] duration string '{text}'")))?;

        let group_i64 = |i: usize| -> i64 { m.get(i).map(|g| g.as_str().parse().unwrap_or(0)).unwrap_or(0) };

        let is_negative = m.get(1).is_some();
        let days = group_i64(2);
        let hours = group_i64(3);
        let minutes = group_i64(4);
        let seconds = group_i64(5);

        let (milliseconds, microseconds, nanoseconds) = match m.get(6) {
            None => (0, 0, 0),
            Some(frac) => {
                let digits = frac.as_str();
                let padded = format!("{digits:0<9}");
                let ms: i64 = padded[0..3].parse().unwrap_or(0);
                let us: i64 = padded[3..6].parse().unwrap_or(0);
                let ns: i64 = padded[6..9].parse().unwrap_or(0);
                (ms, us, ns)
            }
        };

        let duration = Duration::days(days as f64)
            + Duration::hours(hours as f64)
            + Duration::minutes(minutes as f64)
            + Duration::seconds(seconds as f64)
            + Duration::milliseconds(milliseconds as f64)
            + Duration::microseconds(microseconds as f64)
            + Duration::nanoseconds(nanoseconds);

        Ok(if is_negative { -duration } else { duration })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(Format::Standard))
    }
}

// The four operators below cannot surface `PhysicsError::Undefined` without
// a breaking `Output = Result<Duration>` change, so an undefined operand
// instead propagates: the sentinel flows through arithmetic the way `NaN`
// flows through floating-point math, and any caller who eventually converts
// the result to seconds, a string, or another scale (all fallible paths)
// gets the error there.

impl Add for Duration {
    type Output = Duration;
    fn add(self, rhs: Duration) -> Duration {
        if !self.is_defined() || !rhs.is_defined() {
            return Duration::undefined();
        }
        Duration { ns: self.ns + rhs.ns }
    }
}

impl Sub for Duration {
    type Output = Duration;
    fn sub(self, rhs: Duration) -> Duration {
        if !self.is_defined() || !rhs.is_defined() {
            return Duration::undefined();
        }
        Duration { ns: self.ns - rhs.ns }
    }
}

impl Neg for Duration {
    type Output = Duration;
    fn neg(self) -> Duration {
        if !self.is_defined() {
            return Duration::undefined();
        }
        Duration { ns: -self.ns }
    }
}

impl Mul<f64> for Duration {
    type Output = Duration;
    fn mul(self, rhs: f64) -> Duration {
        if !self.is_defined() {
            return Duration::undefined();
        }
        Duration { ns: (self.ns as f64 * rhs) as i64 }
    }
}

impl Div<f64> for Duration {
    type Output = Duration;
    fn div(self, rhs: f64) -> Duration {
        if !self.is_defined() {
            return Duration::undefined();
        }
        Duration { ns: (self.ns as f64 / rhs) as i64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_format_shortens_leading_zero_fields() {
        let d = Duration::seconds(5.0);
        assert_eq!(d.to_string_with(Format::Standard), "05.000.000.000");
        let d = Duration::minutes(1.0) + Duration::seconds(5.0);
        assert_eq!(d.to_string_with(Format::Standard), "01:05.000.000.000");
    }

    #[test]
    fn standard_roundtrips_through_parse() {
        let original = Duration::days(1.0) + Duration::hours(2.0) + Duration::minutes(3.0) + Duration::seconds(4.0);
        let text = original.to_string_with(Format::Standard);
        let parsed = Duration::parse_with(&text, Format::Standard).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn iso8601_zero_is_pt0h0m0s() {
        assert_eq!(Duration::zero().to_string_with(Format::Iso8601), "PT0H0M0S");
    }

    #[test]
    fn iso8601_roundtrips_through_parse() {
        let original = Duration::days(2.0) + Duration::hours(3.0) + Duration::minutes(4.0) + Duration::seconds(5.5);
        let text = original.to_string_with(Format::Iso8601);
        let parsed = Duration::parse_with(&text, Format::Iso8601).unwrap();
        assert_eq!(original.count_ns(), parsed.count_ns());
    }

    #[test]
    fn negative_duration_is_prefixed() {
        let d = -Duration::seconds(5.0);
        assert_eq!(d.to_string_with(Format::Standard), "-05.000.000.000");
        assert_eq!(Duration::parse(&d.to_string_with(Format::Standard)).unwrap(), d);
    }

    #[test]
    fn auto_detects_iso8601_vs_standard() {
        assert!(Duration::parse("P1DT2H").is_ok());
        assert!(Duration::parse("01:00:00.000.000.000").is_ok());
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert!(Duration::seconds(1.0).checked_div(0.0).is_err());
    }

    #[test]
    fn undefined_propagates_through_arithmetic_and_fails_checked_div() {
        let undefined = Duration::undefined();
        assert!(!undefined.is_defined());
        assert!(!(undefined + Duration::seconds(1.0)).is_defined());
        assert!(!(Duration::seconds(1.0) - undefined).is_defined());
        assert!(matches!(undefined.checked_div(2.0), Err(PhysicsError::Undefined(_))));
    }
}
