//! Closed/half-open/open intervals of [`Instant`].
//!
//! Grounded in `original_source/.../Physics/Time/Interval.cpp`: used to
//! express a `BulletinA`/`Finals2000A` row's observation or prediction span,
//! and to check `contains` before a lookup. `generateGrid` is the original's
//! name for producing a uniformly spaced sequence of instants across the
//! interval.

use crate::error::{PhysicsError, Result};
use crate::time::duration::Duration;
use crate::time::instant::Instant;

/// Which of an interval's two endpoints are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalType {
    Closed,
    HalfOpenLeft,
    HalfOpenRight,
    Open,
}

/// An interval of [`Instant`], `start` always ≤ `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: Instant,
    end: Instant,
    interval_type: IntervalType,
}

impl Interval {
    fn new(start: Instant, end: Instant, interval_type: IntervalType) -> Result<Self> {
        if start > end {
            return Err(PhysicsError::InvalidInput(format!(
                "interval start {start} is after end {end}"
            )));
        }
        Ok(Interval { start, end, interval_type })
    }

    pub fn closed(start: Instant, end: Instant) -> Result<Self> {
        Self::new(start, end, IntervalType::Closed)
    }

    pub fn half_open_left(start: Instant, end: Instant) -> Result<Self> {
        Self::new(start, end, IntervalType::HalfOpenLeft)
    }

    pub fn half_open_right(start: Instant, end: Instant) -> Result<Self> {
        Self::new(start, end, IntervalType::HalfOpenRight)
    }

    pub fn open(start: Instant, end: Instant) -> Result<Self> {
        Self::new(start, end, IntervalType::Open)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// `true` iff `instant` falls within this interval, honoring the
    /// endpoint inclusivity of [`IntervalType`]. Comparisons convert
    /// `instant` to the start/end instants' scale implicitly via `Instant`'s
    /// own `Ord` (which requires a common scale already — callers compare
    /// instants tagged in the same scale as the interval, as every
    /// `spec.md` §4.C caller does).
    pub fn contains(&self, instant: Instant) -> Result<bool> {
        let start = self.start.in_scale(instant.scale())?;
        let end = self.end.in_scale(instant.scale())?;
        Ok(match self.interval_type {
            IntervalType::Closed => instant >= start && instant <= end,
            IntervalType::HalfOpenLeft => instant > start && instant <= end,
            IntervalType::HalfOpenRight => instant >= start && instant < end,
            IntervalType::Open => instant > start && instant < end,
        })
    }

    pub fn duration(&self) -> Result<Duration> {
        (self.end - self.start)
    }

    /// A uniformly spaced sequence of instants covering `[start, end]`
    /// (inclusive of both endpoints regardless of `interval_type`, since a
    /// simulation grid wants its final sample exactly on the interval's
    /// closing instant).
    pub fn generate_grid(&self, step: Duration) -> Result<Vec<Instant>> {
        if step.count_ns() <= 0 {
            return Err(PhysicsError::InvalidInput("grid step must be a positive duration".into()));
        }
        let mut grid = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            grid.push(current);
            current = current + step;
        }
        if grid.last().copied() != Some(self.end) {
            grid.push(self.end);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::date_time::DateTime;
    use crate::time::scale::Scale;

    fn instant(y: i64, m: u32, d: u32) -> Instant {
        Instant::from_date_time(DateTime::ymd_hms(y, m, d, 0, 0, 0, 0, 0, 0).unwrap(), Scale::Utc)
    }

    #[test]
    fn closed_interval_includes_both_endpoints() {
        let interval = Interval::closed(instant(2020, 1, 1), instant(2020, 1, 2)).unwrap();
        assert!(interval.contains(instant(2020, 1, 1)).unwrap());
        assert!(interval.contains(instant(2020, 1, 2)).unwrap());
    }

    #[test]
    fn open_interval_excludes_both_endpoints() {
        let interval = Interval::open(instant(2020, 1, 1), instant(2020, 1, 2)).unwrap();
        assert!(!interval.contains(instant(2020, 1, 1)).unwrap());
        assert!(!interval.contains(instant(2020, 1, 2)).unwrap());
    }

    #[test]
    fn rejects_start_after_end() {
        assert!(Interval::closed(instant(2020, 1, 2), instant(2020, 1, 1)).is_err());
    }

    #[test]
    fn grid_includes_the_final_instant() {
        let interval = Interval::closed(instant(2020, 1, 1), instant(2020, 1, 1)).unwrap();
        let grid = interval.generate_grid(Duration::hours(1.0)).unwrap();
        assert_eq!(grid.len(), 1);
    }
}
