//! Frame-tagged physical quantities (`spec.md` §3 "Vector / Scalar
//! quantities"): a value (scalar or 3-vector) bundled with a [`Unit`] and
//! the [`Frame`] it was measured in. Converting to another frame composes
//! with that frame's transform at the quantity's instant; converting to
//! another unit of the same dimension requires compatibility, exactly as
//! [`crate::units::quantity::Quantity`] already enforces for plain
//! scalars.

use nalgebra::Vector3;

use crate::frame::Frame;
use crate::time::instant::Instant;
use crate::units::derived::Unit;
use crate::units::quantity::Quantity;

/// A unit-tagged, frame-tagged scalar (e.g. atmospheric density, `UT1-UTC`).
#[derive(Debug, Clone, Copy)]
pub struct ScalarQuantity {
    quantity: Quantity,
    frame: Frame,
    instant: Instant,
}

impl ScalarQuantity {
    pub fn new(value: f64, unit: Unit, frame: Frame, instant: Instant) -> Self {
        ScalarQuantity { quantity: Quantity::new(value, unit), frame, instant }
    }

    pub fn value(&self) -> f64 {
        self.quantity.value()
    }

    pub fn unit(&self) -> &Unit {
        self.quantity.unit()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Re-express in `target_unit`. A scalar's magnitude does not depend
    /// on the observing frame, so this never touches `self.frame`.
    pub fn in_unit(&self, target_unit: Unit) -> crate::error::Result<ScalarQuantity> {
        let converted = self.quantity.in_unit(target_unit)?;
        Ok(ScalarQuantity { quantity: Quantity::new(converted, target_unit), frame: self.frame, instant: self.instant })
    }
}

/// A unit-tagged, frame-tagged 3-vector (e.g. position, gravitational
/// acceleration, magnetic field).
#[derive(Debug, Clone, Copy)]
pub struct VectorQuantity {
    value: Vector3<f64>,
    unit: Unit,
    frame: Frame,
    instant: Instant,
}

impl VectorQuantity {
    pub fn new(value: Vector3<f64>, unit: Unit, frame: Frame, instant: Instant) -> Self {
        VectorQuantity { value, unit, frame, instant }
    }

    pub fn value(&self) -> Vector3<f64> {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Re-express this vector in `target_frame`, by composing with the
    /// rigid-motion transform between the two frames at `self.instant`.
    pub fn in_frame(&self, target_frame: &Frame) -> crate::error::Result<VectorQuantity> {
        let transform = self.frame.get_transform_to(target_frame, self.instant)?;
        Ok(VectorQuantity { value: transform.apply_to_position(self.value), unit: self.unit, frame: *target_frame, instant: self.instant })
    }

    /// Re-express this vector's components in `target_unit`. Requires
    /// dimensional compatibility, exactly like a scalar [`Quantity`].
    pub fn in_unit(&self, target_unit: Unit) -> crate::error::Result<VectorQuantity> {
        let ratio = Quantity::new(1.0, self.unit).in_unit(target_unit)?;
        Ok(VectorQuantity { value: self.value * ratio, unit: target_unit, frame: self.frame, instant: self.instant })
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
    fn vector_in_same_frame_is_unchanged() {
        let gcrf = Frame::gcrf().unwrap();
        let instant = Instant::j2000();
        let v = VectorQuantity::new(Vector3::new(1.0, 2.0, 3.0), meter(), gcrf, instant);
        let same = v.in_frame(&gcrf).unwrap();
        assert_eq!(same.value(), v.value());
    }

    #[test]
    fn scalar_unit_conversion_preserves_frame() {
        let gcrf = Frame::gcrf().unwrap();
        let instant = Instant::j2000();
        let s = ScalarQuantity::new(1000.0, meter(), gcrf, instant);
        let converted = s.in_unit(meter()).unwrap();
        assert_eq!(converted.value(), 1000.0);
    }
}
