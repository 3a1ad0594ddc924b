//! Tagged scalar quantities with SI conversion, and dimensional (derived)
//! units with rational exponents per base dimension.
//!
//! See `spec.md` §4.A.

pub mod base;
pub mod derived;
pub mod order;
pub mod quantity;
mod symbol_table;

pub use base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
pub use derived::Unit as Derived;
pub use order::Order;
pub use quantity::Quantity;
