//! A single physical instant, tagged with the [`Scale`] its internal count
//! is expressed in.
//!
//! Grounded in `original_source/src/Library/Physics/Time/Instant.cpp`.
//! The original represents an instant as a sign-magnitude `Count` (a
//! "nanoseconds from epoch" magnitude plus a `postEpoch_` flag) because its
//! host language has no natively ergonomic 128-bit signed integer; this
//! port uses a plain signed `i64` nanosecond count instead; §9 of
//! `spec.md` endorses the simplification; the tradeoff is a narrower span
//! (~±292 years around 2000, i.e. roughly 1708-2292) which comfortably
//! covers every scenario in `spec.md` §8.
//!
//! Every scale this crate wires (`Tai`, `Tt`, `Utc`, `Ut1`, `Gpst`) ticks at
//! one SI second per second and is defined as "nanoseconds elapsed from the
//! physical instant at which that scale's own civil clock reads
//! `2000-01-01T12:00:00`" — so constructing an `Instant` from a civil
//! `DateTime` never needs a scale-specific offset (see
//! `time::date_time::DateTime::elapsed_ns_since_j2000_noon`); the offsets
//! only appear when *converting* a count from one scale's axis to
//! another's, which is exactly what `ConvertCountScale` does below.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{PhysicsError, Result};
use crate::time::date_time::DateTime;
use crate::time::duration::Duration;
use crate::time::leap_seconds::{dat_at_tai, dat_at_utc};
use crate::time::scale::Scale;

const TT_MINUS_TAI_NS: i64 = 32_184_000_000; // TT = TAI + 32.184 [s]
const TAI_MINUS_GPST_NS: i64 = 19_000_000_000; // TAI = GPST + 19 [s]

/// A physical instant, stored as a signed nanosecond count from the J2000
/// noon epoch along `scale`'s own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    count: i64,
    scale: Scale,
}

impl Instant {
    pub fn new(count: i64, scale: Scale) -> Self {
        Instant { count, scale }
    }

    pub fn j2000() -> Self {
        Instant { count: 0, scale: Scale::Tt }
    }

    /// The undefined sentinel (`spec.md` §3): never produced by the
    /// constructors above, only by this call.
    pub fn undefined() -> Self {
        Instant { count: i64::MIN, scale: Scale::Tt }
    }

    pub fn is_defined(&self) -> bool {
        self.count != i64::MIN
    }

    pub fn from_date_time(date_time: DateTime, scale: Scale) -> Self {
        Instant { count: date_time.elapsed_ns_since_j2000_noon(), scale }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Re-express this instant along `target_scale`'s axis.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::NotImplemented`] if either scale has no wired
    /// conversion path (see [`Scale::is_wired`]); [`PhysicsError::RangeError`]
    /// if the leap-second table does not cover this instant.
    pub fn in_scale(&self, target_scale: Scale) -> Result<Instant> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Instant"));
        }
        if self.scale == target_scale {
            return Ok(*self);
        }
        let count_tt = Self::to_tt(self.count, self.scale)?;
        let converted = Self::from_tt(count_tt, target_scale)?;
        Ok(Instant::new(converted, target_scale))
    }

    pub fn to_date_time(&self) -> Result<DateTime> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Instant"));
        }
        DateTime::from_elapsed_ns_since_j2000_noon(self.count)
    }

    pub fn to_date_time_in_scale(&self, scale: Scale) -> Result<DateTime> {
        self.in_scale(scale)?.to_date_time()
    }

    pub fn julian_date(&self) -> Result<f64> {
        Ok(self.to_date_time()?.julian_date())
    }

    pub fn modified_julian_date(&self) -> Result<f64> {
        Ok(self.to_date_time()?.modified_julian_date())
    }

    fn to_tt(count: i64, scale: Scale) -> Result<i64> {
        match scale {
            Scale::Tt => Ok(count),
            Scale::Tai => Ok(count + TT_MINUS_TAI_NS),
            Scale::Utc => {
                let tai = count + dat_at_utc(count)? as i64 * 1_000_000_000;
                Ok(tai + TT_MINUS_TAI_NS)
            }
            Scale::Ut1 => {
                let utc = count - crate::eop::dut1_ut1(count)?;
                let tai = utc + dat_at_utc(utc)? as i64 * 1_000_000_000;
                Ok(tai + TT_MINUS_TAI_NS)
            }
            Scale::Gpst => {
                let tai = count + TAI_MINUS_GPST_NS;
                Ok(tai + TT_MINUS_TAI_NS)
            }
            _ => Err(PhysicsError::NotImplemented(format!("conversion from {scale} to TT"))),
        }
    }

    fn from_tt(count_tt: i64, scale: Scale) -> Result<i64> {
        match scale {
            Scale::Tt => Ok(count_tt),
            Scale::Tai => Ok(count_tt - TT_MINUS_TAI_NS),
            Scale::Utc => {
                let tai = count_tt - TT_MINUS_TAI_NS;
                Ok(tai - dat_at_tai(tai)? as i64 * 1_000_000_000)
            }
            Scale::Ut1 => {
                let tai = count_tt - TT_MINUS_TAI_NS;
                let utc = tai - dat_at_tai(tai)? as i64 * 1_000_000_000;
                Ok(utc + crate::eop::dut1_utc(utc)?)
            }
            Scale::Gpst => {
                let tai = count_tt - TT_MINUS_TAI_NS;
                Ok(tai - TAI_MINUS_GPST_NS)
            }
            _ => Err(PhysicsError::NotImplemented(format!("conversion from TT to {scale}"))),
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Ok(dt) => write!(f, "{dt} [{}]", self.scale),
            Err(_) => write!(f, "<instant out of calendar range> [{}]", self.scale),
        }
    }
}

// `Add`/`Sub<Duration>` cannot surface `PhysicsError::Undefined` without a
// breaking `Output = Result<Instant>` change, so an undefined operand
// propagates instead: see the matching note on `time::duration`'s operators.

impl Add<Duration> for Instant {
    type Output = Instant;
    fn add(self, rhs: Duration) -> Instant {
        if !self.is_defined() || !rhs.is_defined() {
            return Instant::undefined();
        }
        Instant::new(self.count + rhs.count_ns(), self.scale)
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;
    fn sub(self, rhs: Duration) -> Instant {
        if !self.is_defined() || !rhs.is_defined() {
            return Instant::undefined();
        }
        Instant::new(self.count - rhs.count_ns(), self.scale)
    }
}

impl Sub<Instant> for Instant {
    type Output = Result<Duration>;
    fn sub(self, rhs: Instant) -> Result<Duration> {
        if !self.is_defined() || !rhs.is_defined() {
            return Err(PhysicsError::Undefined("Instant"));
        }
        let rhs_in_self_scale = rhs.in_scale(self.scale)?;
        Ok(Duration::nanoseconds(self.count - rhs_in_self_scale.count()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Instant {
        let dt = DateTime::ymd_hms(year, month, day, hour, minute, second, 0, 0, 0).unwrap();
        Instant::from_date_time(dt, Scale::Utc)
    }

    #[test]
    fn leap_second_boundary_matches_spec_worked_example() {
        let before = utc(2016, 12, 31, 23, 59, 59);
        let at_boundary = utc(2017, 1, 1, 0, 0, 0);

        let before_tai = before.in_scale(Scale::Tai).unwrap().to_date_time().unwrap();
        let at_boundary_tai = at_boundary.in_scale(Scale::Tai).unwrap().to_date_time().unwrap();

        assert_eq!(before_tai.to_string_with(crate::time::date_time::Format::Iso8601), "2017-01-01T00:00:35");
        assert_eq!(at_boundary_tai.to_string_with(crate::time::date_time::Format::Iso8601), "2017-01-01T00:00:37");
    }

    #[test]
    fn tt_tai_offset_is_32_184_seconds() {
        let tai = Instant::new(0, Scale::Tai);
        let tt = tai.in_scale(Scale::Tt).unwrap();
        assert_eq!(tt.count(), TT_MINUS_TAI_NS);
    }

    #[test]
    fn gpst_tai_offset_is_19_seconds() {
        let tai = Instant::new(0, Scale::Tai);
        let gpst = tai.in_scale(Scale::Gpst).unwrap();
        assert_eq!(gpst.count(), -TAI_MINUS_GPST_NS);
    }

    #[test]
    fn round_trips_through_every_wired_scale() {
        let original = utc(2020, 6, 15, 10, 30, 0);
        for scale in [Scale::Tai, Scale::Tt, Scale::Gpst] {
            let converted = original.in_scale(scale).unwrap();
            let back = converted.in_scale(Scale::Utc).unwrap();
            assert_eq!(back.count(), original.count());
        }
    }

    #[test]
    fn unwired_scale_is_not_implemented() {
        let instant = Instant::new(0, Scale::Tcb);
        assert!(instant.in_scale(Scale::Tai).is_err());
    }

    #[test]
    fn duration_difference_is_scale_aware() {
        let a = Instant::new(10_000_000_000, Scale::Tai);
        let b = Instant::new(0, Scale::Tai);
        let diff = (a - b).unwrap();
        assert_eq!(diff.count_ns(), 10_000_000_000);
    }

    #[test]
    fn undefined_fails_conversion_and_propagates_through_arithmetic() {
        let undefined = Instant::undefined();
        assert!(!undefined.is_defined());
        assert!(matches!(undefined.in_scale(Scale::Tai), Err(PhysicsError::Undefined(_))));
        assert!(matches!(undefined.to_date_time(), Err(PhysicsError::Undefined(_))));
        assert!(!(undefined + Duration::seconds(1.0)).is_defined());
        assert!(matches!(undefined - Instant::j2000(), Err(PhysicsError::Undefined(_))));
    }
}
