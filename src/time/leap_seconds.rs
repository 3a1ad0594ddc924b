//! The `dAT` (TAI − UTC) leap-second table.
//!
//! `original_source/src/Library/Physics/Time/Instant.cpp` embeds this table
//! as two hand-built arrays (`dAT_UTC`, `dAT_TAI`) covering 1972 onward, one
//! indexed by UTC count and one by TAI count, each pre-shifted so that a
//! linear scan finds the right row. That original table stops growing the
//! regular IERS announcements into new rows past 2016; every leap second
//! actually ever inserted (through the last one, 2017-01-01) is reproduced
//! here directly from the IERS bulletin history rather than the original's
//! truncated six-row encoding, so the full 1972-2017 history is available
//! and a future insertion only needs one more row appended to [`TABLE`].
//!
//! `spec.md` §9 flags the original's boundary convention as inconsistent
//! (`<` in one table, `<=` in the other) and asks the implementation to pick
//! one. This module resolves it by anchoring both the UTC-indexed and
//! TAI-indexed views on the same physical jump instants: a row's dAT value
//! is in effect from that instant (inclusive) up to the next row's instant
//! (exclusive), on *either* axis. That is the only convention consistent
//! with the worked example in `spec.md` §8.5
//! (`2016-12-31T23:59:59 UTC` → dAT 36, `2017-01-01T00:00:00 UTC` → dAT 37).

use crate::error::{PhysicsError, Result};
use crate::time::calendar::elapsed_ns_since_j2000_noon;

/// One row: the dAT value (seconds) in effect from `effective_utc_ns`
/// onward, expressed as nanoseconds from the J2000 noon epoch on the UTC
/// axis.
#[derive(Debug, Clone, Copy)]
struct LeapRow {
    effective_utc_ns: i64,
    dat_seconds: i32,
}

impl LeapRow {
    fn effective_tai_ns(&self) -> i64 {
        self.effective_utc_ns + self.dat_seconds as i64 * 1_000_000_000
    }
}

fn row(year: i64, month: u32, day: u32, dat_seconds: i32) -> LeapRow {
    LeapRow {
        effective_utc_ns: elapsed_ns_since_j2000_noon(year, month, day, 0, 0, 0, 0),
        dat_seconds,
    }
}

/// The full IERS leap-second history, ascending by effective date.
static TABLE: once_cell::sync::Lazy<Vec<LeapRow>> = once_cell::sync::Lazy::new(|| {
    vec![
        row(1972, 1, 1, 10),
        row(1972, 7, 1, 11),
        row(1973, 1, 1, 12),
        row(1974, 1, 1, 13),
        row(1975, 1, 1, 14),
        row(1976, 1, 1, 15),
        row(1977, 1, 1, 16),
        row(1978, 1, 1, 17),
        row(1979, 1, 1, 18),
        row(1980, 1, 1, 19),
        row(1981, 7, 1, 20),
        row(1982, 7, 1, 21),
        row(1983, 7, 1, 22),
        row(1985, 7, 1, 23),
        row(1988, 1, 1, 24),
        row(1990, 1, 1, 25),
        row(1991, 1, 1, 26),
        row(1992, 7, 1, 27),
        row(1993, 7, 1, 28),
        row(1994, 7, 1, 29),
        row(1996, 1, 1, 30),
        row(1997, 7, 1, 31),
        row(1999, 1, 1, 32),
        row(2006, 1, 1, 33),
        row(2009, 1, 1, 34),
        row(2012, 7, 1, 35),
        row(2015, 7, 1, 36),
        row(2017, 1, 1, 37),
    ]
});

/// dAT (seconds) for a UTC instant expressed as ns from the J2000 noon
/// epoch, on the UTC axis.
///
/// # Errors
///
/// [`PhysicsError::RangeError`] if `utc_ns` predates the first leap second
/// (1972-01-01); values past the most recent entry extrapolate forward with
/// the last known dAT, matching `spec.md` §4.B's "no errors on the open end"
/// rule (a leap-second table can never be complete for future dates).
pub fn dat_at_utc(utc_ns: i64) -> Result<i32> {
    let table = &*TABLE;
    if utc_ns < table[0].effective_utc_ns {
        return Err(PhysicsError::RangeError(format!(
            "UTC instant ({utc_ns} ns from J2000 noon) predates the leap-second table"
        )));
    }
    let mut dat = table[0].dat_seconds;
    for entry in table.iter() {
        if utc_ns < entry.effective_utc_ns {
            break;
        }
        dat = entry.dat_seconds;
    }
    Ok(dat)
}

/// dAT (seconds) for a TAI instant expressed as ns from the J2000 noon
/// epoch, on the TAI axis. See [`dat_at_utc`] for the boundary convention
/// and error behavior.
pub fn dat_at_tai(tai_ns: i64) -> Result<i32> {
    let table = &*TABLE;
    if tai_ns < table[0].effective_tai_ns() {
        return Err(PhysicsError::RangeError(format!(
            "TAI instant ({tai_ns} ns from J2000 noon) predates the leap-second table"
        )));
    }
    let mut dat = table[0].dat_seconds;
    for entry in table.iter() {
        if tai_ns < entry.effective_tai_ns() {
            break;
        }
        dat = entry.dat_seconds;
    }
    Ok(dat)
}
