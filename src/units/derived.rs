//! Derived (compound) units: a tuple of five base units each with a rational order.
//!
//! Grounded in `original_source/include/OpenSpaceToolkit/Physics/Unit/Derived.hpp`.

use std::fmt;

use super::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
use super::order::Order;

/// A derived SI unit: `length^a · mass^b · time^c · current^d · angle^e`.
///
/// `PartialEq` compares every unit and order field literally (matching
/// [`Order`]'s non-reduced comparison): `Unit::meter_per_second()` and an
/// equivalent built from `Order::new(2, 2)` would compare unequal despite
/// `is_compatible` and `ratio_to` treating them the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub length_unit: LengthUnit,
    pub length_order: Order,
    pub mass_unit: MassUnit,
    pub mass_order: Order,
    pub time_unit: TimeUnit,
    pub time_order: Order,
    pub current_unit: ElectricCurrentUnit,
    pub current_order: Order,
    pub angle_unit: AngleUnit,
    pub angle_order: Order,
}

impl Unit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        length_unit: LengthUnit,
        length_order: Order,
        mass_unit: MassUnit,
        mass_order: Order,
        time_unit: TimeUnit,
        time_order: Order,
        current_unit: ElectricCurrentUnit,
        current_order: Order,
        angle_unit: AngleUnit,
        angle_order: Order,
    ) -> Self {
        Unit {
            length_unit,
            length_order,
            mass_unit,
            mass_order,
            time_unit,
            time_order,
            current_unit,
            current_order,
            angle_unit,
            angle_order,
        }
    }

    /// `m/s`: length^1 · time^-1, all other orders zero.
    pub fn meter_per_second() -> Self {
        Unit::new(
            LengthUnit::Meter,
            Order::integer(1),
            MassUnit::Kilogram,
            Order::zero(),
            TimeUnit::Second,
            Order::new(1, 1).unwrap() * -1,
            ElectricCurrentUnit::Ampere,
            Order::zero(),
            AngleUnit::Radian,
            Order::zero(),
        )
    }

    /// Two derived units are compatible iff all five orders match — the
    /// units themselves may differ (implying a scalar conversion ratio).
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.length_order == other.length_order
            && self.mass_order == other.mass_order
            && self.time_order == other.time_order
            && self.current_order == other.current_order
            && self.angle_order == other.angle_order
    }

    /// Product, over the five base dimensions, of `(unit→SI)^order`.
    pub fn si_ratio(&self) -> f64 {
        self.length_unit.si_ratio().powf(self.length_order.value())
            * self.mass_unit.si_ratio().powf(self.mass_order.value())
            * self.time_unit.si_ratio().powf(self.time_order.value())
            * self
                .current_unit
                .si_ratio()
                .powf(self.current_order.value())
            * self.angle_unit.si_ratio().powf(self.angle_order.value())
    }

    /// Conversion ratio from `self` to `other`: multiply a value expressed
    /// in `self` by this to get the value expressed in `other`.
    ///
    /// Only meaningful for compatible units — callers are expected to have
    /// checked [`Unit::is_compatible`] first (see [`crate::units::Quantity::in_unit`]).
    pub fn ratio_to(&self, other: &Unit) -> f64 {
        self.si_ratio() / other.si_ratio()
    }
}

// A tiny helper so `Order::new(1,1).unwrap() * -1` reads naturally above;
// negating a rational order just negates the numerator.
impl std::ops::Mul<i16> for Order {
    type Output = Order;
    fn mul(self, rhs: i16) -> Order {
        Order::new(self.numerator() * rhs, self.denominator()).unwrap()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}^{} {}^{} {}^{} {}^{} {}^{}",
            self.length_unit.symbol(),
            self.length_order,
            self.mass_unit.symbol(),
            self.mass_order,
            self.time_unit.symbol(),
            self.time_order,
            self.current_unit.symbol(),
            self.current_order,
            self.angle_unit.symbol(),
            self.angle_order,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_per_second_compatible_with_foot_per_hour() {
        let mps = Unit::meter_per_second();
        let fph = Unit::new(
            LengthUnit::Foot,
            Order::integer(1),
            MassUnit::Kilogram,
            Order::zero(),
            TimeUnit::Hour,
            Order::integer(-1),
            ElectricCurrentUnit::Ampere,
            Order::zero(),
            AngleUnit::Radian,
            Order::zero(),
        );
        assert!(mps.is_compatible(&fph));

        // 1 ft/h -> m/s
        let value_fph = 1.0;
        let value_mps = value_fph * fph.ratio_to(&mps);
        assert!((value_mps - 8.466_666_666_666_667e-5).abs() < 1e-12);
    }

    #[test]
    fn incompatible_units_have_mismatched_orders() {
        let mps = Unit::meter_per_second();
        let meter = Unit::new(
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
        );
        assert!(!mps.is_compatible(&meter));
    }
}
