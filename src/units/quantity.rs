//! Unit-tagged scalar quantities.
//!
//! Grounded in `original_source/src/OpenSpaceToolkit/Physics/Units/Derived.cpp`'s
//! quantity arithmetic and the `"{value} [{symbol}]"` serialization form named
//! in `spec.md` §6.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::derived::Unit;
use crate::error::{PhysicsError, Result};

/// A real value tagged with a [`Unit`].
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// The undefined sentinel (`spec.md` §4.A): a `NaN`-valued quantity, so
    /// it propagates as undefined through `==` the same way `NaN` already
    /// does (never equal to anything, including itself).
    pub fn undefined(unit: Unit) -> Self {
        Quantity { value: f64::NAN, unit }
    }

    pub fn is_defined(&self) -> bool {
        !self.value.is_nan()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Express this quantity in `target_unit`.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidInput`] if the units are not compatible
    /// (differing dimension orders).
    pub fn in_unit(&self, target_unit: Unit) -> Result<f64> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Quantity"));
        }
        if !self.unit.is_compatible(&target_unit) {
            tracing::debug!(
                from = %self.unit,
                to = %target_unit,
                "rejected incompatible unit conversion"
            );
            return Err(PhysicsError::InvalidInput(format!(
                "unit {} is not compatible with {target_unit}",
                self.unit
            )));
        }
        Ok(self.value * self.unit.ratio_to(&target_unit))
    }

    /// Add two quantities; result is expressed in `self`'s unit.
    pub fn checked_add(&self, other: &Quantity) -> Result<Quantity> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Quantity"));
        }
        let other_in_self_unit = other.in_unit(self.unit)?;
        Ok(Quantity::new(self.value + other_in_self_unit, self.unit))
    }

    /// Subtract two quantities; result is expressed in `self`'s unit.
    pub fn checked_sub(&self, other: &Quantity) -> Result<Quantity> {
        if !self.is_defined() {
            return Err(PhysicsError::Undefined("Quantity"));
        }
        let other_in_self_unit = other.in_unit(self.unit)?;
        Ok(Quantity::new(self.value - other_in_self_unit, self.unit))
    }

    /// Multiply by a dimensionless real scalar.
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity::new(self.value * factor, self.unit)
    }

    /// Equality requires compatible units; values are compared through SI.
    pub fn approx_eq(&self, other: &Quantity, relative_tolerance: f64) -> bool {
        match other.in_unit(self.unit) {
            Ok(v) => (self.value - v).abs() <= relative_tolerance * self.value.abs().max(1.0),
            Err(_) => false,
        }
    }

    /// Parse `"1.0 [m]"`-style strings for the base dimensions this crate
    /// names directly (length, mass, time, current, angle); compound
    /// derived symbols are not round-tripped by this simple table, mirroring
    /// the original's symbol-table-driven parser scope.
    pub fn parse(text: &str) -> Result<Quantity> {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\s*([+-]?[0-9.eE+-]+)\s*\[\s*([^\]]+)\s*\]\s*$").unwrap());

        let captures = PATTERN
            .captures(text)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("cannot parse quantity '{text}'")))?;

        let value: f64 = captures[1]
            .parse()
            .map_err(|_| PhysicsError::InvalidInput(format!("invalid numeric value in '{text}'")))?;

        let symbol = captures[2].trim();
        let unit = super::symbol_table::unit_from_symbol(symbol)
            .ok_or_else(|| PhysicsError::InvalidInput(format!("unknown unit symbol '{symbol}'")))?;

        Ok(Quantity::new(value, unit))
    }
}

/// Exact equality: same unit (literal, not just compatible) and bit-for-bit
/// equal value. Most callers comparing quantities across unit choices want
/// [`Quantity::approx_eq`] instead.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
    use crate::units::order::Order;

    fn meter() -> Unit {
        Unit::new(
            LengthUnit::Meter,
            Order::integer(1),
            MassUnit::Kilogram,
            Order::zero(),
            TimeUnit::Second,
            Order::zero(),
            ElectricCurrentUnit::Ampere,
            Order::zero(),
            AngleUnit::Radian,
            Order::zero(),
        )
    }

    #[test]
    fn self_conversion_is_identity() {
        let q = Quantity::new(5.0, meter());
        assert_eq!(q.in_unit(meter()).unwrap(), 5.0);
    }

    #[test]
    fn checked_add_requires_compatible_units() {
        let a = Quantity::new(1.0, meter());
        let b = Quantity::new(2.0, Unit::meter_per_second());
        assert!(a.checked_add(&b).is_err());
    }

    #[test]
    fn exact_equality_requires_the_same_unit_not_just_a_compatible_one() {
        let five_meters = Quantity::new(5.0, meter());
        assert_eq!(five_meters, Quantity::new(5.0, meter()));
        assert_ne!(five_meters, Quantity::new(5.000_001, meter()));

        let five_feet = Quantity::new(5.0, Unit::new(
            LengthUnit::Foot,
            Order::integer(1),
            MassUnit::Kilogram,
            Order::zero(),
            TimeUnit::Second,
            Order::zero(),
            ElectricCurrentUnit::Ampere,
            Order::zero(),
            AngleUnit::Radian,
            Order::zero(),
        ));
        // Compatible (same dimension orders) but not exactly equal.
        assert_ne!(five_meters, five_feet);
        assert!(!five_meters.approx_eq(&five_feet, 1e-9));
    }

    #[test]
    fn undefined_fails_conversion_and_arithmetic_and_never_equals_itself() {
        let undefined = Quantity::undefined(meter());
        assert!(!undefined.is_defined());
        assert!(matches!(undefined.in_unit(meter()), Err(PhysicsError::Undefined(_))));
        assert!(matches!(undefined.checked_add(&Quantity::new(1.0, meter())), Err(PhysicsError::Undefined(_))));
        // NaN propagation: an undefined quantity never compares equal, not even to itself.
        assert_ne!(undefined, undefined);
    }
}
