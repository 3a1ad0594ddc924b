//! A calendar `Date` paired with a `TimeOfDay`.
//!
//! Formats and parsing grounded directly in
//! `original_source/test/Library/Physics/Time/DateTime.test.cpp`: `Standard`
//! is `YYYY-MM-DD HH:MM:SS[.mmm[.uuu[.nnn]]]` (each sub-second group only
//! present if nonzero, printed left-to-right), `ISO8601` is
//! `YYYY-MM-DDTHH:MM:SS[.fractional]` with the fraction written as a single
//! concatenated decimal rather than dot-separated triplets.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhysicsError, Result};
use crate::time::calendar::{civil_from_elapsed_ns, elapsed_ns_since_j2000_noon};
use crate::time::date::Date;
use crate::time::time_of_day::TimeOfDay;

/// Julian Date of the civil epoch `2000-01-01T12:00:00` (J2000.0).
pub const J2000_JD: f64 = 2_451_545.0;
const NS_PER_DAY: f64 = 86_400_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Standard,
    Iso8601,
    /// `D Mon YYYY HH:MM:SS.fffffffff`, as emitted by STK's `.e` ephemeris
    /// files (`spec.md` §6).
    Stk,
}

const STK_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

impl DateTime {
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        DateTime { date, time }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ymd_hms(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        microsecond: u32,
        nanosecond: u32,
    ) -> Result<Self> {
        let date = Date::new(year, month, day)?;
        let time = TimeOfDay::new(hour, minute, second, millisecond, microsecond, nanosecond)?;
        Ok(DateTime::new(date, time))
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Elapsed nanoseconds from the civil instant `2000-01-01T12:00:00`,
    /// treating this reading as a uniform (non-leap-second-aware) clock —
    /// the value an [`crate::time::instant::Instant`] stores internally for
    /// whichever scale this `DateTime` is tagged with.
    pub fn elapsed_ns_since_j2000_noon(&self) -> i64 {
        elapsed_ns_since_j2000_noon(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time.hour(),
            self.time.minute(),
            self.time.second(),
            self.time.millisecond() * 1_000_000 + self.time.microsecond() * 1_000 + self.time.nanosecond(),
        )
    }

    pub fn from_elapsed_ns_since_j2000_noon(elapsed_ns: i64) -> Result<Self> {
        let (y, m, d, h, mi, s, ns) = civil_from_elapsed_ns(elapsed_ns);
        let date = Date::new(y, m, d)?;
        let time = TimeOfDay::new(h, mi, s, ns / 1_000_000, (ns / 1_000) % 1_000, ns % 1_000)?;
        Ok(DateTime::new(date, time))
    }

    /// Julian Date (continuous day count, fractional part = time of day).
    pub fn julian_date(&self) -> f64 {
        J2000_JD + self.elapsed_ns_since_j2000_noon() as f64 / NS_PER_DAY
    }

    /// Modified Julian Date: `JD - 2400000.5`.
    pub fn modified_julian_date(&self) -> f64 {
        self.julian_date() - 2_400_000.5
    }

    pub fn from_julian_date(jd: f64) -> Result<Self> {
        let elapsed_ns = ((jd - J2000_JD) * NS_PER_DAY).round() as i64;
        Self::from_elapsed_ns_since_j2000_noon(elapsed_ns)
    }

    pub fn from_modified_julian_date(mjd: f64) -> Result<Self> {
        Self::from_julian_date(mjd + 2_400_000.5)
    }

    pub fn to_string_with(&self, format: Format) -> String {
        let ms = self.time.millisecond();
        let us = self.time.microsecond();
        let ns = self.time.nanosecond();

        match format {
            Format::Standard => {
                let base = format!(
                    "{} {:02}:{:02}:{:02}",
                    self.date,
                    self.time.hour(),
                    self.time.minute(),
                    self.time.second()
                );
                if ns > 0 {
                    format!("{base}.{ms:03}.{us:03}.{ns:03}")
                } else if us > 0 {
                    format!("{base}.{ms:03}.{us:03}")
                } else if ms > 0 {
                    format!("{base}.{ms:03}")
                } else {
                    base
                }
            }
            Format::Iso8601 => {
                let base = format!(
                    "{}T{:02}:{:02}:{:02}",
                    self.date,
                    self.time.hour(),
                    self.time.minute(),
                    self.time.second()
                );
                if ns > 0 {
                    format!("{base}.{:09}", ms as u32 * 1_000_000 + us * 1_000 + ns)
                } else if us > 0 {
                    format!("{base}.{:06}", ms as u32 * 1_000 + us)
                } else if ms > 0 {
                    format!("{base}.{ms:03}")
                } else {
                    base
                }
            }
            Format::Stk => {
                let month = STK_MONTHS[(self.date.month() - 1) as usize];
                let fractional_ns = ms as u32 * 1_000_000 + us * 1_000 + ns;
                format!(
                    "{} {} {:04} {:02}:{:02}:{:02}.{:09}",
                    self.date.day(),
                    month,
                    self.date.year(),
                    self.time.hour(),
                    self.time.minute(),
                    self.time.second(),
                    fractional_ns
                )
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        if text.contains('T') {
            Self::parse_with(text, Format::Iso8601)
        } else if text.chars().next().is_some_and(|c| c.is_ascii_digit()) && text.contains(' ')
            && text.split(' ').nth(1).is_some_and(|s| s.chars().next().is_some_and(char::is_alphabetic))
        {
            Self::parse_with(text, Format::Stk)
        } else {
            Self::parse_with(text, Format::Standard)
        }
    }

    pub fn parse_with(text: &str, format: Format) -> Result<Self> {
        static STANDARD: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(\d{4})-(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})(?:\.(\d{3}))?(?:\.(\d{3}))?(?:\.(\d{3}))?$")
                .unwrap()
        });
        static ISO8601: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(?:\.(\d{1,9}))?$").unwrap()
        });
        static STK: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(\d{1,2}) ([A-Za-z]{3}) (\d{4}) (\d{2}):(\d{2}):(\d{2})(?:\.(\d{1,9}))?$").unwrap()
        });

        match format {
            Format::Standard => {
                let m = STANDARD
                    .captures(text)
                    .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse [Standard] datetime '{text}'")))?;
                let get_i64 = |i: usize| -> i64 { m[i].parse().unwrap() };
                let get_u32 = |i: usize| -> u32 { m[i].parse().unwrap() };
                let get_opt = |i: usize| -> u32 { m.get(i).map(|g| g.as_str().parse().unwrap()).unwrap_or(0) };
                DateTime::ymd_hms(
                    get_i64(1),
                    get_u32(2),
                    get_u32(3),
                    get_u32(4),
                    get_u32(5),
                    get_u32(6),
                    get_opt(7),
                    get_opt(8),
                    get_opt(9),
                )
            }
            Format::Iso8601 => {
                let m = ISO8601
                    .captures(text)
                    .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse [ISO8601] datetime '{text}'")))?;
                let get_i64 = |i: usize| -> i64 { m[i].parse().unwrap() };
                let get_u32 = |i: usize| -> u32 { m[i].parse().unwrap() };
                let (ms, us, ns) = match m.get(7) {
                    None => (0, 0, 0),
                    Some(frac) => {
                        let padded = format!("{:0<9}", frac.as_str());
                        (
                            padded[0..3].parse().unwrap(),
                            padded[3..6].parse().unwrap(),
                            padded[6..9].parse().unwrap(),
                        )
                    }
                };
                DateTime::ymd_hms(
                    get_i64(1),
                    get_u32(2),
                    get_u32(3),
                    get_u32(4),
                    get_u32(5),
                    get_u32(6),
                    ms,
                    us,
                    ns,
                )
            }
            Format::Stk => {
                let m = STK
                    .captures(text)
                    .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse [STK] datetime '{text}'")))?;
                let day: u32 = m[1].parse().unwrap();
                let month_name = &m[2];
                let month = STK_MONTHS
                    .iter()
                    .position(|candidate| candidate.eq_ignore_ascii_case(month_name))
                    .map(|idx| idx as u32 + 1)
                    .ok_or_else(|| PhysicsError::InvalidInput(format!("unknown STK month '{month_name}'")))?;
                let year: i64 = m[3].parse().unwrap();
                let hour: u32 = m[4].parse().unwrap();
                let minute: u32 = m[5].parse().unwrap();
                let second: u32 = m[6].parse().unwrap();
                let (ms, us, ns) = match m.get(7) {
                    None => (0, 0, 0),
                    Some(frac) => {
                        let padded = format!("{:0<9}", frac.as_str());
                        (
                            padded[0..3].parse().unwrap(),
                            padded[3..6].parse().unwrap(),
                            padded[6..9].parse().unwrap(),
                        )
                    }
                };
                DateTime::ymd_hms(year, month, day, hour, minute, second, ms, us, ns)
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(Format::Standard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_format_trims_trailing_zero_groups() {
        let dt = DateTime::ymd_hms(2018, 1, 2, 12, 34, 56, 0, 0, 0).unwrap();
        assert_eq!(dt.to_string_with(Format::Standard), "2018-01-02 12:34:56");
        let dt = DateTime::ymd_hms(2018, 1, 2, 12, 34, 56, 123, 0, 0).unwrap();
        assert_eq!(dt.to_string_with(Format::Standard), "2018-01-02 12:34:56.123");
        let dt = DateTime::ymd_hms(2018, 1, 2, 12, 34, 56, 123, 456, 789).unwrap();
        assert_eq!(dt.to_string_with(Format::Standard), "2018-01-02 12:34:56.123.456.789");
    }

    #[test]
    fn iso8601_format_concatenates_the_fraction() {
        let dt = DateTime::ymd_hms(2018, 1, 2, 12, 34, 56, 123, 456, 789).unwrap();
        assert_eq!(dt.to_string_with(Format::Iso8601), "2018-01-02T12:34:56.123456789");
    }

    #[test]
    fn standard_parse_roundtrips() {
        let dt = DateTime::ymd_hms(2018, 1, 2, 12, 34, 56, 123, 456, 789).unwrap();
        let text = dt.to_string_with(Format::Standard);
        assert_eq!(DateTime::parse_with(&text, Format::Standard).unwrap(), dt);
    }

    #[test]
    fn julian_date_roundtrips() {
        let dt = DateTime::ymd_hms(2016, 12, 31, 23, 59, 59, 0, 0, 0).unwrap();
        let jd = dt.julian_date();
        let back = DateTime::from_julian_date(jd).unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn j2000_noon_is_julian_date_j2000() {
        let dt = DateTime::ymd_hms(2000, 1, 1, 12, 0, 0, 0, 0, 0).unwrap();
        assert_eq!(dt.julian_date(), J2000_JD);
        assert_eq!(dt.modified_julian_date(), J2000_JD - 2_400_000.5);
    }

    #[test]
    fn stk_format_and_parse_roundtrip() {
        let dt = DateTime::ymd_hms(2018, 3, 2, 12, 34, 56, 123, 456, 789).unwrap();
        let text = dt.to_string_with(Format::Stk);
        assert_eq!(text, "2 Mar 2018 12:34:56.123456789");
        assert_eq!(DateTime::parse_with(&text, Format::Stk).unwrap(), dt);
        assert_eq!(DateTime::parse(&text).unwrap(), dt);
    }

    #[test]
    fn extreme_years_parse() {
        assert!(DateTime::ymd_hms(1400, 1, 1, 0, 0, 0, 0, 0, 0).is_ok());
        assert!(DateTime::ymd_hms(9999, 12, 31, 23, 59, 59, 0, 0, 0).is_ok());
    }
}
