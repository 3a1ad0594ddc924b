//! Leap-second-aware time kernel: calendar types, a scale-tagged `Instant`,
//! and signed nanosecond `Duration`s.
//!
//! See `spec.md` §4.B.

pub mod calendar;
pub mod date;
pub mod date_time;
pub mod duration;
pub mod instant;
pub mod interval;
pub mod leap_seconds;
pub mod scale;
pub mod time_of_day;

pub use date::Date;
pub use date_time::{DateTime, Format};
pub use duration::Duration;
pub use instant::Instant;
pub use interval::{Interval, IntervalType};
pub use scale::Scale;
pub use time_of_day::TimeOfDay;
