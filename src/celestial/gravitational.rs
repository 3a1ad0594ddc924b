//! Gravitational field models.
//!
//! Grounded in
//! `original_source/test/.../Environment/Gravitational/Earth.test.cpp`,
//! which names the model family this module wires: `Spherical`, `WGS84`,
//! `EGM84`, `EGM96`, `EGM2008`. `spec.md` §3 scopes the zonal-harmonic
//! coefficients this crate actually carries down to J₂ and J₄ (rather
//! than a full `Cₙₘ`/`Sₙₘ` table with an arbitrary-order associated-
//! Legendre recurrence); §4.E's degree/order validation is still
//! enforced, against each model's embedded maximum. See `DESIGN.md`.

use nalgebra::Vector3;

use crate::error::{PhysicsError, Result};

/// A gravitational model family. Each carries its own constants; the
/// zonal terms beyond J₂/J₄ that the real EGM files carry are not
/// embedded, so `max_degree()` is capped at 4 for every non-spherical
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityModelType {
    Spherical,
    Wgs84,
    Egm84,
    Egm96,
    Egm2008,
}

impl GravityModelType {
    pub fn max_degree(&self) -> u32 {
        match self {
            GravityModelType::Spherical => 0,
            _ => 4,
        }
    }

    pub fn max_order(&self) -> u32 {
        // Zonal-only: every embedded coefficient has order 0.
        0
    }
}

/// A gravitational model: a type tag plus the physical constants
/// `getGravitationalFieldAt` needs (`spec.md` §3's `Celestial` fields
/// `µ`, equatorial radius, `J₂`, `J₄`).
#[derive(Debug, Clone, Copy)]
pub struct GravitationalModel {
    model_type: GravityModelType,
    mu: f64,
    equatorial_radius: f64,
    j2: f64,
    j4: f64,
}

impl GravitationalModel {
    pub fn new(model_type: GravityModelType, mu: f64, equatorial_radius: f64, j2: f64, j4: f64) -> Self {
        GravitationalModel { model_type, mu, equatorial_radius, j2, j4 }
    }

    /// The spherical-only model: `g = -µ·r̂/|r|²`.
    pub fn spherical(mu: f64) -> Self {
        GravitationalModel { model_type: GravityModelType::Spherical, mu, equatorial_radius: 0.0, j2: 0.0, j4: 0.0 }
    }

    pub fn model_type(&self) -> GravityModelType {
        self.model_type
    }

    /// Gravitational acceleration at `position`, expressed in the body's
    /// body-fixed frame, using zonal terms up to `degree`/`order`.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::InvalidInput`] if `degree` exceeds the model's
    /// embedded maximum, or `order` exceeds `degree` (order must be 0 for
    /// every zonal-only model this crate embeds).
    pub fn field_at(&self, position: Vector3<f64>, degree: u32, order: u32) -> Result<Vector3<f64>> {
        if degree > self.model_type.max_degree() {
            return Err(PhysicsError::InvalidInput(format!(
                "degree {degree} exceeds {:?}'s maximum of {}",
                self.model_type,
                self.model_type.max_degree()
            )));
        }
        if order > self.model_type.max_order() {
            return Err(PhysicsError::InvalidInput(format!(
                "order {order} exceeds {:?}'s maximum of {}",
                self.model_type,
                self.model_type.max_order()
            )));
        }

        let r = position.norm();
        if r == 0.0 {
            return Err(PhysicsError::InvalidInput("position is at the body's center".to_string()));
        }
        let r_hat = position / r;

        let mut acceleration = -self.mu / (r * r) * r_hat;

        if degree >= 2 && self.j2 != 0.0 {
            acceleration += self.j2_perturbation(position, r);
        }
        if degree >= 4 && self.j4 != 0.0 {
            acceleration += self.j4_perturbation(position, r);
        }

        Ok(acceleration)
    }

    fn j2_perturbation(&self, position: Vector3<f64>, r: f64) -> Vector3<f64> {
        let re = self.equatorial_radius;
        let z = position.z;
        let factor = 1.5 * self.j2 * self.mu * re * re / r.powi(4);
        let z_ratio = z / r;
        Vector3::new(
            factor * (position.x / r) * (5.0 * z_ratio * z_ratio - 1.0),
            factor * (position.y / r) * (5.0 * z_ratio * z_ratio - 1.0),
            factor * (position.z / r) * (5.0 * z_ratio * z_ratio - 3.0),
        )
    }

    fn j4_perturbation(&self, position: Vector3<f64>, r: f64) -> Vector3<f64> {
        let re = self.equatorial_radius;
        let z_ratio = position.z / r;
        let factor = -1.875 * self.j4 * self.mu * re.powi(4) / r.powi(6);
        let polynomial_xy = 21.0 * z_ratio.powi(2) - 14.0 * z_ratio.powi(4) - 1.0;
        let polynomial_z = 7.0 * z_ratio.powi(2) - 10.0;
        Vector3::new(
            factor * (position.x / r) * polynomial_xy,
            factor * (position.y / r) * polynomial_xy,
            factor * (position.z / r) * (polynomial_xy + 4.0 * z_ratio.powi(2) * polynomial_z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_field_points_toward_center() {
        let model = GravitationalModel::spherical(1.0);
        let position = Vector3::new(1.0, 0.0, 0.0);
        let field = model.field_at(position, 0, 0).unwrap();
        assert!((field - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn exceeding_max_degree_is_invalid_input() {
        let model = GravitationalModel::spherical(1.0);
        let position = Vector3::new(1.0, 0.0, 0.0);
        assert!(model.field_at(position, 2, 0).is_err());
    }

    #[test]
    fn j2_perturbation_breaks_spherical_symmetry_at_the_pole() {
        let model = GravitationalModel::new(GravityModelType::Wgs84, 398_600.4418, 6378.137, 1.08263e-3, -1.65e-6);
        let equatorial = model.field_at(Vector3::new(7000.0, 0.0, 0.0), 2, 0).unwrap();
        let polar = model.field_at(Vector3::new(0.0, 0.0, 7000.0), 2, 0).unwrap();
        assert!((equatorial.norm() - polar.norm()).abs() > 1e-6);
    }
}
