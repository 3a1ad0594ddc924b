//! `Celestial`: a named body carrying its physical constants, ephemeris,
//! optional field models, and body-fixed frame (`spec.md` §3, §4.E).

use nalgebra::Vector3;

use crate::error::{PhysicsError, Result};
use crate::frame::Frame;
use crate::quantity::VectorQuantity;
use crate::time::instant::Instant;
use crate::units::base::{LengthUnit, MassUnit, TimeUnit};
use crate::units::derived::Unit;
use crate::units::order::Order;

use super::atmospheric::AtmosphericModel;
use super::gravitational::GravitationalModel;
use super::magnetic::MagneticModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Earth,
    Moon,
    Sun,
    Other,
}

/// Position and velocity of a body at an instant, in its parent frame.
/// `spec.md` §3 names this "ephemeris provider" without specifying its
/// concrete shape beyond "position/velocity of this body"; a boxed
/// closure is the natural Rust reading — any analytic or tabulated
/// ephemeris reduces to `Instant -> (position, velocity)`.
pub type EphemerisFn = Box<dyn Fn(Instant) -> Result<(Vector3<f64>, Vector3<f64>)> + Send + Sync>;

pub struct Celestial {
    name: String,
    body_type: BodyType,
    mu: f64,
    equatorial_radius: f64,
    flattening: f64,
    j2: f64,
    j4: f64,
    ephemeris: EphemerisFn,
    gravitational_model: Option<GravitationalModel>,
    magnetic_model: Option<MagneticModel>,
    atmospheric_model: Option<AtmosphericModel>,
    body_fixed_frame: Frame,
}

fn meter() -> Unit {
    Unit::new(
        LengthUnit::Meter,
        Order::integer(1),
        MassUnit::Kilogram,
        Order::zero(),
        TimeUnit::Second,
        Order::zero(),
        crate::units::base::ElectricCurrentUnit::Ampere,
        Order::zero(),
        crate::units::base::AngleUnit::Radian,
        Order::zero(),
    )
}

fn meter_per_second_squared() -> Unit {
    Unit::new(
        LengthUnit::Meter,
        Order::integer(1),
        MassUnit::Kilogram,
        Order::zero(),
        TimeUnit::Second,
        Order::integer(-2),
        crate::units::base::ElectricCurrentUnit::Ampere,
        Order::zero(),
        crate::units::base::AngleUnit::Radian,
        Order::zero(),
    )
}

fn tesla() -> Unit {
    // kg · A⁻¹ · s⁻²
    Unit::new(
        LengthUnit::Meter,
        Order::zero(),
        MassUnit::Kilogram,
        Order::integer(1),
        TimeUnit::Second,
        Order::integer(-2),
        crate::units::base::ElectricCurrentUnit::Ampere,
        Order::integer(-1),
        crate::units::base::AngleUnit::Radian,
        Order::zero(),
    )
}

#[allow(clippy::too_many_arguments)]
impl Celestial {
    pub fn new(
        name: impl Into<String>,
        body_type: BodyType,
        mu: f64,
        equatorial_radius: f64,
        flattening: f64,
        j2: f64,
        j4: f64,
        ephemeris: EphemerisFn,
        body_fixed_frame: Frame,
    ) -> Self {
        Celestial {
            name: name.into(),
            body_type,
            mu,
            equatorial_radius,
            flattening,
            j2,
            j4,
            ephemeris,
            gravitational_model: None,
            magnetic_model: None,
            atmospheric_model: None,
            body_fixed_frame,
        }
    }

    pub fn with_gravitational_model(mut self, model: GravitationalModel) -> Self {
        self.gravitational_model = Some(model);
        self
    }

    pub fn with_magnetic_model(mut self, model: MagneticModel) -> Self {
        self.magnetic_model = Some(model);
        self
    }

    pub fn with_atmospheric_model(mut self, model: AtmosphericModel) -> Self {
        self.atmospheric_model = Some(model);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    pub fn body_fixed_frame(&self) -> Frame {
        self.body_fixed_frame
    }

    pub fn position_and_velocity_at(&self, instant: Instant) -> Result<(Vector3<f64>, Vector3<f64>)> {
        (self.ephemeris)(instant)
    }

    /// Gravitational acceleration at `position` (any frame) and
    /// `instant`, as a vector tagged with the body-fixed frame.
    pub fn gravitational_field_at(&self, position: &VectorQuantity, instant: Instant, degree: u32, order: u32) -> Result<VectorQuantity> {
        let model = self
            .gravitational_model
            .as_ref()
            .ok_or_else(|| PhysicsError::DataUnavailable(format!("{} has no gravitational model installed", self.name)))?;
        let position_in_body_frame = position.in_frame(&self.body_fixed_frame)?.in_unit(meter())?;
        let field = model.field_at(position_in_body_frame.value(), degree, order)?;
        Ok(VectorQuantity::new(field, meter_per_second_squared(), self.body_fixed_frame, instant))
    }

    pub fn magnetic_field_at(&self, position: &VectorQuantity, instant: Instant, degree: u32) -> Result<VectorQuantity> {
        let model = self
            .magnetic_model
            .as_ref()
            .ok_or_else(|| PhysicsError::DataUnavailable(format!("{} has no magnetic model installed", self.name)))?;
        let position_in_body_frame = position.in_frame(&self.body_fixed_frame)?.in_unit(meter())?;
        let field = model.field_at(position_in_body_frame.value(), degree)?;
        Ok(VectorQuantity::new(field, tesla(), self.body_fixed_frame, instant))
    }

    pub fn atmospheric_density_at(&self, position: &VectorQuantity, instant: Instant) -> Result<f64> {
        let model = self
            .atmospheric_model
            .as_ref()
            .ok_or_else(|| PhysicsError::DataUnavailable(format!("{} has no atmospheric model installed", self.name)))?;
        let position_in_body_frame = position.in_frame(&self.body_fixed_frame)?.in_unit(meter())?;
        let altitude_m = position_in_body_frame.value().norm() - self.equatorial_radius;
        model.density_at(altitude_m, instant.modified_julian_date()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Celestial {
        let frame = Frame::gcrf().unwrap();
        Celestial::new(
            "Earth",
            BodyType::Earth,
            398_600_441_800_000.0,
            6_378_137.0,
            1.0 / 298.257223563,
            1.08263e-3,
            -1.65e-6,
            Box::new(|_instant| Ok((Vector3::zeros(), Vector3::zeros()))),
            frame,
        )
        .with_gravitational_model(GravitationalModel::spherical(398_600_441_800_000.0))
    }

    #[test]
    fn gravitational_field_requires_a_model() {
        let frame = Frame::gcrf().unwrap();
        let body = Celestial::new(
            "Bare",
            BodyType::Other,
            1.0,
            1.0,
            0.0,
            0.0,
            0.0,
            Box::new(|_| Ok((Vector3::zeros(), Vector3::zeros()))),
            frame,
        );
        let position = VectorQuantity::new(Vector3::new(7_000_000.0, 0.0, 0.0), meter(), frame, Instant::j2000());
        assert!(body.gravitational_field_at(&position, Instant::j2000(), 0, 0).is_err());
    }

    #[test]
    fn gravitational_field_at_returns_a_body_frame_vector() {
        let body = earth();
        let frame = Frame::gcrf().unwrap();
        let position = VectorQuantity::new(Vector3::new(7_000_000.0, 0.0, 0.0), meter(), frame, Instant::j2000());
        let field = body.gravitational_field_at(&position, Instant::j2000(), 0, 0).unwrap();
        assert!(field.value().x < 0.0);
    }
}
