//! Rigid-body transform between two coordinate frames at an instant.
//!
//! Grounded in `original_source/.../Coordinate/Transform.cpp`: a transform
//! carries a translation, a linear velocity, an orientation quaternion, and
//! an angular velocity, tagged `Passive`/`Active`. `spec.md` §3 calls
//! "passive" the convention "coordinates of the same point, viewed in the
//! other frame" — the only convention this crate produces, since every
//! provider in `spec.md` §4.D describes a frame's orientation relative to
//! its parent, not a moving body's attitude.

use nalgebra::{UnitQuaternion, Vector3};

use crate::time::instant::Instant;

/// Whether a [`Transform`] expresses "same point, different frame"
/// (`Passive`) or "this frame's axes carried to a new orientation"
/// (`Active`). Every transform this crate's frame graph produces is
/// `Passive`; the tag exists because `spec.md` §3 names it as a
/// first-class property of `Transform`, not a derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Passive,
    Active,
}

/// A rigid motion between two frames, evaluated at a specific [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    instant: Instant,
    translation: Vector3<f64>,
    velocity: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
    angular_velocity: Vector3<f64>,
    direction: Direction,
}

impl Transform {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        instant: Instant,
        translation: Vector3<f64>,
        velocity: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
        direction: Direction,
    ) -> Self {
        Transform { instant, translation, velocity, orientation, angular_velocity, direction }
    }

    pub fn identity(instant: Instant) -> Self {
        Transform {
            instant,
            translation: Vector3::zeros(),
            velocity: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            direction: Direction::Passive,
        }
    }

    /// A pure-rotation, stationary transform — the common case for the
    /// analytic providers in `spec.md` §4.D (precession, nutation, Earth
    /// rotation angle, polar motion all rotate without translating).
    pub fn rotation(instant: Instant, orientation: UnitQuaternion<f64>, angular_velocity: Vector3<f64>) -> Self {
        Transform {
            instant,
            translation: Vector3::zeros(),
            velocity: Vector3::zeros(),
            orientation,
            angular_velocity,
            direction: Direction::Passive,
        }
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.translation
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.orientation
    }

    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply this transform to a position expressed in the source frame,
    /// returning it expressed in the destination frame.
    pub fn apply_to_position(&self, position: Vector3<f64>) -> Vector3<f64> {
        self.orientation * position + self.translation
    }

    /// Apply this transform to a velocity expressed in the source frame
    /// (transport theorem, ignoring frame acceleration).
    pub fn apply_to_velocity(&self, position: Vector3<f64>, velocity: Vector3<f64>) -> Vector3<f64> {
        self.orientation * velocity + self.velocity + self.angular_velocity.cross(&(self.orientation * position))
    }

    /// The inverse transform: destination → source.
    pub fn inverse(&self) -> Transform {
        let orientation_inv = self.orientation.inverse();
        let translation_inv = -(orientation_inv * self.translation);
        let velocity_inv = -(orientation_inv * self.velocity);
        let angular_velocity_inv = -(orientation_inv * self.angular_velocity);
        Transform {
            instant: self.instant,
            translation: translation_inv,
            velocity: velocity_inv,
            orientation: orientation_inv,
            angular_velocity: angular_velocity_inv,
            direction: self.direction,
        }
    }

    /// Compose `self` (B→C) with `other` (A→B) into a single A→C transform.
    /// Associative: `a.compose(&b).compose(&c) == a.compose(&b.compose(&c))`
    /// to machine precision, since quaternion/vector composition is.
    pub fn compose(&self, other: &Transform) -> Transform {
        let orientation = self.orientation * other.orientation;
        let translation = self.orientation * other.translation + self.translation;
        let angular_velocity = self.angular_velocity + self.orientation * other.angular_velocity;
        let velocity =
            self.orientation * other.velocity + self.velocity + self.angular_velocity.cross(&(self.orientation * other.translation));
        Transform {
            instant: self.instant,
            translation,
            velocity,
            orientation,
            angular_velocity,
            direction: Direction::Passive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::scale::Scale;
    use std::f64::consts::FRAC_PI_2;

    fn instant() -> Instant {
        Instant::new(0, Scale::Tt)
    }

    #[test]
    fn identity_is_a_no_op() {
        let t = Transform::identity(instant());
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(t.apply_to_position(p), p);
    }

    #[test]
    fn inverse_undoes_a_rotation() {
        let q = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let t = Transform::rotation(instant(), q, Vector3::zeros());
        let composed = t.inverse().compose(&t);
        let p = Vector3::new(1.0, 0.0, 0.0);
        let result = composed.apply_to_position(p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn composition_matches_manual_rotation_order() {
        let q1 = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let q2 = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2);
        let t1 = Transform::rotation(instant(), q1, Vector3::zeros());
        let t2 = Transform::rotation(instant(), q2, Vector3::zeros());
        let composed = t1.compose(&t2);
        let p = Vector3::new(1.0, 0.0, 0.0);
        let expected = q1 * (q2 * p);
        assert!((composed.apply_to_position(p) - expected).norm() < 1e-12);
    }
}
