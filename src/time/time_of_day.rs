//! Time of day, independent of any calendar date.
//!
//! Validation bounds grounded in the same `DateTime.test.cpp` `Constructor`
//! test as [`crate::time::date::Date`]: hour `[0, 23]`, minute/second
//! `[0, 59]` (leap seconds are never expressed as `:60`, per `spec.md` §3),
//! millisecond/microsecond/nanosecond `[0, 999]`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PhysicsError, Result};

/// A time of day with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    microsecond: u32,
    nanosecond: u32,
}

impl TimeOfDay {
    /// # Errors
    ///
    /// [`PhysicsError::InvalidInput`] if any field is out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        microsecond: u32,
        nanosecond: u32,
    ) -> Result<TimeOfDay> {
        if hour > 23 {
            return Err(PhysicsError::InvalidInput(format!("hour {hour} is out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(PhysicsError::InvalidInput(format!("minute {minute} is out of range [0, 59]")));
        }
        if second > 59 {
            return Err(PhysicsError::InvalidInput(format!("second {second} is out of range [0, 59]")));
        }
        if millisecond > 999 {
            return Err(PhysicsError::InvalidInput(format!(
                "millisecond {millisecond} is out of range [0, 999]"
            )));
        }
        if microsecond > 999 {
            return Err(PhysicsError::InvalidInput(format!(
                "microsecond {microsecond} is out of range [0, 999]"
            )));
        }
        if nanosecond > 999 {
            return Err(PhysicsError::InvalidInput(format!(
                "nanosecond {nanosecond} is out of range [0, 999]"
            )));
        }
        Ok(TimeOfDay { hour, minute, second, millisecond, microsecond, nanosecond })
    }

    pub fn midnight() -> Self {
        TimeOfDay { hour: 0, minute: 0, second: 0, millisecond: 0, microsecond: 0, nanosecond: 0 }
    }

    pub fn hms(hour: u32, minute: u32, second: u32) -> Result<TimeOfDay> {
        Self::new(hour, minute, second, 0, 0, 0)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
    pub fn second(&self) -> u32 {
        self.second
    }
    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Nanoseconds elapsed since midnight.
    pub fn nanoseconds_since_midnight(&self) -> i64 {
        (self.hour as i64) * 3_600_000_000_000
            + (self.minute as i64) * 60_000_000_000
            + (self.second as i64) * 1_000_000_000
            + (self.millisecond as i64) * 1_000_000
            + (self.microsecond as i64) * 1_000
            + self.nanosecond as i64
    }

    /// Inverse of [`TimeOfDay::nanoseconds_since_midnight`]; `ns` must be in
    /// `[0, 86_400_000_000_000)`.
    pub fn from_nanoseconds_since_midnight(ns: i64) -> Result<TimeOfDay> {
        if !(0..86_400_000_000_000i64).contains(&ns) {
            return Err(PhysicsError::RangeError(format!(
                "{ns} ns is outside a single day's span [0, 86400000000000)"
            )));
        }
        let hour = (ns / 3_600_000_000_000) as u32;
        let rem = ns % 3_600_000_000_000;
        let minute = (rem / 60_000_000_000) as u32;
        let rem = rem % 60_000_000_000;
        let second = (rem / 1_000_000_000) as u32;
        let rem = rem % 1_000_000_000;
        let millisecond = (rem / 1_000_000) as u32;
        let rem = rem % 1_000_000;
        let microsecond = (rem / 1_000) as u32;
        let nanosecond = (rem % 1_000) as u32;
        TimeOfDay::new(hour, minute, second, millisecond, microsecond, nanosecond)
    }

    pub fn parse(text: &str) -> Result<TimeOfDay> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2})(?:\.(\d{3}))?(?:\.(\d{3}))?(?:\.(\d{3}))?$").unwrap());
        let m = PATTERN
            .captures(text)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse time of day '{text}'")))?;
        let get = |i: usize| -> u32 { m.get(i).map(|g| g.as_str().parse().unwrap()).unwrap_or(0) };
        TimeOfDay::new(get(1), get(2), get(3), get(4), get(5), get(6))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}.{:03}.{:03}",
            self.hour, self.minute, self.second, self.millisecond, self.microsecond, self.nanosecond
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(TimeOfDay::new(24, 0, 0, 0, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 60, 0, 0, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 61, 0, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 0, 1000, 0, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 0, 0, 1000, 0).is_err());
        assert!(TimeOfDay::new(0, 0, 0, 0, 0, 1000).is_err());
    }

    #[test]
    fn midnight_offset_roundtrips() {
        let t = TimeOfDay::new(12, 34, 56, 123, 456, 789).unwrap();
        let ns = t.nanoseconds_since_midnight();
        assert_eq!(TimeOfDay::from_nanoseconds_since_midnight(ns).unwrap(), t);
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let t = TimeOfDay::new(1, 2, 3, 123, 456, 789).unwrap();
        assert_eq!(TimeOfDay::parse(&t.to_string()).unwrap(), t);
    }
}
