//! Time scale tags.
//!
//! Grounded in `original_source/src/Library/Physics/Time/Instant.cpp`'s
//! `ConvertCountScale` switch, which enumerates exactly these scales.

use std::fmt;

/// A time scale an [`crate::time::Instant`]'s internal count is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Utc,
    Tai,
    Tt,
    Ut1,
    Gpst,
    Tcg,
    Tcb,
    Tdb,
    Gmst,
    Gst,
    Glst,
    Bdt,
    Qzsst,
    Irnsst,
}

impl Scale {
    /// Scales with a conversion path wired through `Instant::in_scale`
    /// (see `spec.md` §4.B). Every other scale fails with `NotImplemented`.
    pub fn is_wired(&self) -> bool {
        matches!(
            self,
            Scale::Utc | Scale::Tai | Scale::Tt | Scale::Ut1 | Scale::Gpst
        )
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scale::Utc => "UTC",
            Scale::Tai => "TAI",
            Scale::Tt => "TT",
            Scale::Ut1 => "UT1",
            Scale::Gpst => "GPST",
            Scale::Tcg => "TCG",
            Scale::Tcb => "TCB",
            Scale::Tdb => "TDB",
            Scale::Gmst => "GMST",
            Scale::Gst => "GST",
            Scale::Glst => "GLST",
            Scale::Bdt => "BDT",
            Scale::Qzsst => "QZSST",
            Scale::Irnsst => "IRNSST",
        };
        write!(f, "{s}")
    }
}
