//! `Environment`: a current instant plus the set of celestial objects
//! sharing it (`spec.md` §4.F).

use nalgebra::Vector3;

use crate::celestial::Celestial;
use crate::error::{PhysicsError, Result};
use crate::time::instant::Instant;

/// The opaque geometry-primitive dependency `spec.md` §4.F names:
/// `Environment::intersects` only needs to know whether some shape
/// overlaps a sphere centered at a body's current position. Concrete
/// geometry kinds (a footprint polygon, a sensor cone, …) implement this
/// without this crate needing to know their representation.
pub trait Geometry {
    fn intersects_sphere(&self, center: Vector3<f64>, radius: f64) -> bool;
}

pub struct Environment {
    instant: Instant,
    objects: Vec<Celestial>,
}

impl Environment {
    pub fn new(instant: Instant, objects: Vec<Celestial>) -> Self {
        Environment { instant, objects }
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Move the environment to `instant`. `spec.md` §4.F: "propagates to
    /// each object's ephemeris-driven frame" — since each `Celestial`'s
    /// position is computed on demand from its ephemeris function at a
    /// supplied instant, propagation here is just updating the shared
    /// instant the next query will use.
    pub fn set_instant(&mut self, instant: Instant) {
        self.instant = instant;
    }

    pub fn objects(&self) -> &[Celestial] {
        &self.objects
    }

    pub fn access_object_with_name(&self, name: &str) -> Result<&Celestial> {
        self.objects.iter().find(|object| object.name() == name).ok_or_else(|| {
            PhysicsError::DataUnavailable(format!("environment has no object named '{name}'"))
        })
    }

    pub fn access_celestial_object_with_name(&self, name: &str) -> Result<&Celestial> {
        self.access_object_with_name(name)
    }

    /// Whether `geometry` crosses any object's body, approximated as a
    /// sphere of its equatorial radius centered at its current position.
    pub fn intersects(&self, geometry: &dyn Geometry) -> Result<bool> {
        for object in &self.objects {
            let (position, _velocity) = object.position_and_velocity_at(self.instant)?;
            if geometry.intersects_sphere(position, object.equatorial_radius()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::{BodyType, GravitationalModel};
    use crate::frame::Frame;

    struct PointGeometry(Vector3<f64>);
    impl Geometry for PointGeometry {
        fn intersects_sphere(&self, center: Vector3<f64>, radius: f64) -> bool {
            (self.0 - center).norm() <= radius
        }
    }

    fn earth_at_origin() -> Celestial {
        let frame = Frame::gcrf().unwrap();
        Celestial::new(
            "Earth",
            BodyType::Earth,
            398_600_441_800_000.0,
            6_378_137.0,
            1.0 / 298.257223563,
            1.08263e-3,
            -1.65e-6,
            Box::new(|_| Ok((Vector3::zeros(), Vector3::zeros()))),
            frame,
        )
        .with_gravitational_model(GravitationalModel::spherical(398_600_441_800_000.0))
    }

    #[test]
    fn access_object_with_name_finds_a_registered_body() {
        let environment = Environment::new(Instant::j2000(), vec![earth_at_origin()]);
        assert!(environment.access_object_with_name("Earth").is_ok());
        assert!(environment.access_object_with_name("Mars").is_err());
    }

    #[test]
    fn intersects_detects_a_point_inside_the_body() {
        let environment = Environment::new(Instant::j2000(), vec![earth_at_origin()]);
        let inside = PointGeometry(Vector3::new(1_000_000.0, 0.0, 0.0));
        let outside = PointGeometry(Vector3::new(50_000_000.0, 0.0, 0.0));
        assert!(environment.intersects(&inside).unwrap());
        assert!(!environment.intersects(&outside).unwrap());
    }
}
