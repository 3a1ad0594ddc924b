//! Magnetic field models.
//!
//! Grounded in `spec.md` §4.E: "Dipole, IGRF, WMM. Same evaluation
//! contract." This crate embeds only the dipole term of each: IGRF and
//! WMM differ from a pure dipole starting at their degree-2 (quadrupole)
//! Gauss coefficients, which are not embedded here — `max_degree()`
//! reports 1 for every variant, and higher-degree requests fail with
//! `InvalidInput` exactly as `spec.md` §4.E's gravitational degree/order
//! validation does. See `DESIGN.md`.

use nalgebra::Vector3;

use crate::error::{PhysicsError, Result};

const VACUUM_PERMEABILITY_OVER_4PI: f64 = 1e-7; // µ₀ / 4π, in T·m/A

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagneticModelType {
    Dipole,
    Igrf,
    Wmm,
}

impl MagneticModelType {
    pub fn max_degree(&self) -> u32 {
        1
    }
}

/// A magnetic dipole model: axis (unit vector) and moment magnitude
/// (A·m²). `spec.md` §4.E: `B = (µ₀/4π)·(3(m·r̂)r̂ − m)/|r|³`.
#[derive(Debug, Clone, Copy)]
pub struct MagneticModel {
    model_type: MagneticModelType,
    moment: Vector3<f64>,
}

impl MagneticModel {
    pub fn new(model_type: MagneticModelType, axis: Vector3<f64>, magnitude: f64) -> Self {
        let moment = axis.normalize() * magnitude;
        MagneticModel { model_type, moment }
    }

    pub fn model_type(&self) -> MagneticModelType {
        self.model_type
    }

    pub fn field_at(&self, position: Vector3<f64>, degree: u32) -> Result<Vector3<f64>> {
        if degree > self.model_type.max_degree() {
            return Err(PhysicsError::InvalidInput(format!(
                "degree {degree} exceeds {:?}'s maximum of {}",
                self.model_type,
                self.model_type.max_degree()
            )));
        }
        let r = position.norm();
        if r == 0.0 {
            return Err(PhysicsError::InvalidInput("position is at the body's center".to_string()));
        }
        let r_hat = position / r;
        let field = VACUUM_PERMEABILITY_OVER_4PI * (3.0 * self.moment.dot(&r_hat) * r_hat - self.moment) / r.powi(3);
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_on_the_dipole_axis_is_twice_the_equatorial_magnitude() {
        let model = MagneticModel::new(MagneticModelType::Dipole, Vector3::new(0.0, 0.0, 1.0), 8e22);
        let axial = model.field_at(Vector3::new(0.0, 0.0, 6378.0e3), 0).unwrap();
        let equatorial = model.field_at(Vector3::new(6378.0e3, 0.0, 0.0), 0).unwrap();
        assert!((axial.norm() - 2.0 * equatorial.norm()).abs() / axial.norm() < 1e-9);
    }

    #[test]
    fn exceeding_max_degree_is_invalid_input() {
        let model = MagneticModel::new(MagneticModelType::Igrf, Vector3::new(0.0, 0.0, 1.0), 8e22);
        assert!(model.field_at(Vector3::new(6378.0e3, 0.0, 0.0), 2).is_err());
    }
}
