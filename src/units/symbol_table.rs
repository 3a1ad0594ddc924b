//! Symbol → [`Unit`] lookup used by [`super::quantity::Quantity::parse`].

use super::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
use super::derived::Unit;
use super::order::Order;

fn unity(
    length: LengthUnit,
    length_order: i16,
    mass: MassUnit,
    mass_order: i16,
    time: TimeUnit,
    time_order: i16,
    current: ElectricCurrentUnit,
    current_order: i16,
    angle: AngleUnit,
    angle_order: i16,
) -> Unit {
    Unit::new(
        length,
        Order::integer(length_order),
        mass,
        Order::integer(mass_order),
        time,
        Order::integer(time_order),
        current,
        Order::integer(current_order),
        angle,
        Order::integer(angle_order),
    )
}

/// Resolve a unit symbol (`"m"`, `"kg"`, `"deg"`, …) to a [`Unit`] whose sole
/// nonzero order is the matching base dimension.
pub fn unit_from_symbol(symbol: &str) -> Option<Unit> {
    if let Some(u) = LengthUnit::from_symbol(symbol) {
        return Some(unity(
            u,
            1,
            MassUnit::Kilogram,
            0,
            TimeUnit::Second,
            0,
            ElectricCurrentUnit::Ampere,
            0,
            AngleUnit::Radian,
            0,
        ));
    }
    if let Some(u) = MassUnit::from_symbol(symbol) {
        return Some(unity(
            LengthUnit::Meter,
            0,
            u,
            1,
            TimeUnit::Second,
            0,
            ElectricCurrentUnit::Ampere,
            0,
            AngleUnit::Radian,
            0,
        ));
    }
    if let Some(u) = TimeUnit::from_symbol(symbol) {
        return Some(unity(
            LengthUnit::Meter,
            0,
            MassUnit::Kilogram,
            0,
            u,
            1,
            ElectricCurrentUnit::Ampere,
            0,
            AngleUnit::Radian,
            0,
        ));
    }
    if let Some(u) = ElectricCurrentUnit::from_symbol(symbol) {
        return Some(unity(
            LengthUnit::Meter,
            0,
            MassUnit::Kilogram,
            0,
            TimeUnit::Second,
            0,
            u,
            1,
            AngleUnit::Radian,
            0,
        ));
    }
    if let Some(u) = AngleUnit::from_symbol(symbol) {
        return Some(unity(
            LengthUnit::Meter,
            0,
            MassUnit::Kilogram,
            0,
            TimeUnit::Second,
            0,
            ElectricCurrentUnit::Ampere,
            0,
            u,
            1,
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_symbols() {
        assert!(unit_from_symbol("m").is_some());
        assert!(unit_from_symbol("deg").is_some());
        assert!(unit_from_symbol("bogus").is_none());
    }
}
