//! Circular-orbit tracking example.
//!
//! Demonstrates a `Celestial`'s ephemeris closure driving frame transforms
//! and field evaluation across a propagation window. The orbit itself is a
//! simple analytic circular motion supplied by the demo, not a crate
//! feature — `spec.md` scopes orbit propagation out, leaving the ephemeris
//! as an opaque `Instant -> (position, velocity)` closure (see
//! `crate::celestial::body::EphemerisFn`).

use nalgebra::Vector3;

use physics_kernel::celestial::{BodyType, Celestial, GravitationalModel};
use physics_kernel::frame::Frame;
use physics_kernel::quantity::VectorQuantity;
use physics_kernel::time::duration::Duration;
use physics_kernel::time::instant::Instant;
use physics_kernel::units::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
use physics_kernel::units::derived::Unit;
use physics_kernel::units::order::Order;

const EARTH_MU: f64 = 398_600_441_800_000.0;

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

/// A circular orbit in the GCRF XY plane: radius `r`, angular rate from
/// vis-viva (`n = sqrt(mu / r^3)`), epoch at `t0`.
fn circular_orbit_ephemeris(radius_m: f64, epoch: Instant) -> impl Fn(Instant) -> physics_kernel::Result<(Vector3<f64>, Vector3<f64>)> {
    let n = (EARTH_MU / radius_m.powi(3)).sqrt();
    move |instant: Instant| {
        let elapsed = (instant - epoch)?.in_seconds();
        let theta = n * elapsed;
        let position = Vector3::new(radius_m * theta.cos(), radius_m * theta.sin(), 0.0);
        let speed = radius_m * n;
        let velocity = Vector3::new(-speed * theta.sin(), speed * theta.cos(), 0.0);
        Ok((position, velocity))
    }
}

fn main() {
    println!("=== Circular Orbit Tracking ===\n");

    let gcrf = Frame::gcrf().unwrap();
    let tirf = Frame::tirf().unwrap();
    let epoch = Instant::j2000();

    let radius_m = 7_000_000.0; // ~622 km altitude
    let ephemeris = circular_orbit_ephemeris(radius_m, epoch);

    let earth = Celestial::new(
        "Earth",
        BodyType::Earth,
        EARTH_MU,
        6_378_137.0,
        1.0 / 298.257223563,
        1.08263e-3,
        -1.65e-6,
        Box::new(ephemeris),
        gcrf,
    )
    .with_gravitational_model(GravitationalModel::new(
        physics_kernel::celestial::GravityModelType::Wgs84,
        EARTH_MU,
        6_378_137.0,
        1.08263e-3,
        -1.65e-6,
    ));

    println!("  Time     GCRF X (km)  GCRF Y (km)  TIRF X (km)  TIRF Y (km)  |g| (m/s^2)");
    println!("  --------------------------------------------------------------------------");

    for minutes in [0, 15, 30, 45, 60, 90] {
        let t = epoch + Duration::minutes(minutes as f64);
        let (position, _velocity) = earth.position_and_velocity_at(t).unwrap();

        let position_quantity = VectorQuantity::new(position, meter(), gcrf, t);
        let position_tirf = position_quantity.in_frame(&tirf).unwrap();
        let gravity = earth.gravitational_field_at(&position_quantity, t, 2, 0).unwrap();

        println!(
            "  {:3}min   {:>10.1}   {:>10.1}   {:>10.1}   {:>10.1}   {:>10.4}",
            minutes,
            position.x / 1000.0,
            position.y / 1000.0,
            position_tirf.value().x / 1000.0,
            position_tirf.value().y / 1000.0,
            gravity.value().norm()
        );
    }

    println!("\n=== Orbit Period ===");
    let n = (EARTH_MU / radius_m.powi(3)).sqrt();
    let period = Duration::seconds(2.0 * std::f64::consts::PI / n);
    println!("  Orbital period: {} ({:.1} minutes)", period, period.in_minutes());
}
