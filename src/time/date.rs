//! Proleptic Gregorian calendar date, year 1400-9999.
//!
//! Validation bounds (year range, month/day range) are grounded in
//! `original_source/test/Library/Physics/Time/DateTime.test.cpp`'s
//! `Constructor` test, which exercises exactly this range and rejects
//! `0001-01-01`, `1399-12-31`, `10000-01-01`, `2018-02-29` (non-leap
//! February), month `0`/`13`, and day `0`/`32`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhysicsError, Result};
use crate::time::calendar::{days_in_month, days_from_civil, is_leap_year};

pub const MIN_YEAR: i64 = 1400;
pub const MAX_YEAR: i64 = 9999;

/// A calendar date, `year` in `[1400, 9999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i64,
    month: u32,
    day: u32,
}

impl Date {
    /// # Errors
    ///
    /// [`PhysicsError::InvalidInput`] if `year` is out of `[1400, 9999]`,
    /// `month` is out of `[1, 12]`, or `day` is out of range for the given
    /// year and month.
    pub fn new(year: i64, month: u32, day: u32) -> Result<Date> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PhysicsError::InvalidInput(format!(
                "year {year} is outside the supported range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        let days_in_this_month = days_in_month(year, month)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("month {month} is out of range [1, 12]")))?;
        if day < 1 || day > days_in_this_month {
            return Err(PhysicsError::InvalidInput(format!(
                "day {day} is out of range for {year}-{month:02} (1..={days_in_this_month})"
            )));
        }
        Ok(Date { year, month, day })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Day count relative to the civil epoch 1970-01-01; used by the
    /// Julian Date conversions in [`crate::time::date_time`].
    pub fn days_from_unix_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    pub fn parse(text: &str) -> Result<Date> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
        let m = PATTERN
            .captures(text)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse date '{text}'")))?;
        let year: i64 = m[1].parse().unwrap();
        let month: u32 = m[2].parse().unwrap();
        let day: u32 = m[3].parse().unwrap();
        Date::new(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_supported_range() {
        assert!(Date::new(2018, 1, 1).is_ok());
        assert!(Date::new(1400, 1, 1).is_ok());
        assert!(Date::new(9999, 1, 1).is_ok());
    }

    #[test]
    fn rejects_out_of_range_years() {
        assert!(Date::new(0, 1, 1).is_err());
        assert!(Date::new(1399, 12, 31).is_err());
        assert!(Date::new(10_000, 1, 1).is_err());
    }

    #[test]
    fn rejects_invalid_month_and_day() {
        assert!(Date::new(2018, 0, 1).is_err());
        assert!(Date::new(2018, 13, 1).is_err());
        assert!(Date::new(2018, 1, 0).is_err());
        assert!(Date::new(2018, 1, 32).is_err());
    }

    #[test]
    fn rejects_feb_29_on_a_non_leap_year() {
        assert!(Date::new(2018, 2, 29).is_err());
        assert!(Date::new(2016, 2, 29).is_ok());
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let d = Date::new(2018, 1, 2).unwrap();
        assert_eq!(Date::parse(&d.to_string()).unwrap(), d);
    }
}
