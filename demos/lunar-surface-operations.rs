//! Lunar surface operations example.
//!
//! Demonstrates constructing a body-fixed frame for a non-Earth body and
//! evaluating its gravitational field at surface points. The Moon's real
//! orientation follows the IAU 2009 libration model; this demo wires its
//! body-fixed frame with a `Static` provider (a fixed orientation relative
//! to GCRF) since that model is outside this crate's scope — see
//! `DESIGN.md`.

use nalgebra::{UnitQuaternion, Vector3};

use physics_kernel::celestial::{BodyType, Celestial, GravitationalModel};
use physics_kernel::frame::provider::TransformProvider;
use physics_kernel::frame::transform::Transform;
use physics_kernel::frame::Frame;
use physics_kernel::quantity::VectorQuantity;
use physics_kernel::time::instant::Instant;
use physics_kernel::units::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
use physics_kernel::units::derived::Unit;
use physics_kernel::units::order::Order;

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

/// A fixed-orientation Moon body frame, tilted 6.7 degrees from GCRF to
/// stand in for the mean lunar equator (a rough approximation of the IAU
/// 2009 orientation's mean inclination, not a faithful libration model).
fn moon_fixed_frame(instant: Instant) -> Frame {
    let gcrf = Frame::gcrf().unwrap();
    let tilt = 6.7_f64.to_radians();
    let orientation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), tilt);
    let transform = Transform::rotation(instant, orientation, Vector3::zeros());
    Frame::with_name("MoonFixed").unwrap_or_else(|| {
        Frame::construct("MoonFixed", false, Some(gcrf), TransformProvider::Static(transform)).unwrap()
    })
}

fn main() {
    println!("=== Lunar Surface Operations ===\n");

    let instant = Instant::j2000();
    let moon_frame = moon_fixed_frame(instant);
    let gcrf = Frame::gcrf().unwrap();

    let lunar_radius_m = 1_737_400.0;
    let moon = Celestial::new(
        "Moon",
        BodyType::Moon,
        4_902_800_000.0,
        lunar_radius_m,
        0.0,
        0.0,
        0.0,
        Box::new(|_| Ok((Vector3::zeros(), Vector3::zeros()))),
        moon_frame,
    )
    .with_gravitational_model(GravitationalModel::spherical(4_902_800_000.0));

    let surface_points = [
        ("Sub-Earth point", Vector3::new(lunar_radius_m, 0.0, 0.0)),
        ("East limb", Vector3::new(0.0, lunar_radius_m, 0.0)),
        ("North pole", Vector3::new(0.0, 0.0, lunar_radius_m)),
        ("South pole", Vector3::new(0.0, 0.0, -lunar_radius_m)),
    ];

    println!("Lunar surface points, Moon-fixed vs. GCRF (km):\n");
    println!("{:>18} | {:>28} | {:>28} | {:>14}", "Location", "Moon-fixed", "GCRF", "Gravity (m/s^2)");
    println!("{:-<96}", "");

    for (name, point) in surface_points {
        let position_moon = VectorQuantity::new(point, meter(), moon_frame, instant);
        let position_gcrf = position_moon.in_frame(&gcrf).unwrap();
        let gravity = moon.gravitational_field_at(&position_moon, instant, 0, 0).unwrap();

        let p = position_moon.value() / 1000.0;
        let g = position_gcrf.value() / 1000.0;
        println!(
            "{:>18} | ({:>7.1}, {:>7.1}, {:>7.1}) | ({:>7.1}, {:>7.1}, {:>7.1}) | {:>14.4}",
            name,
            p.x,
            p.y,
            p.z,
            g.x,
            g.y,
            g.z,
            gravity.value().norm()
        );
    }

    println!("\n=== Roundtrip Verification ===");
    let test_point = VectorQuantity::new(Vector3::new(lunar_radius_m, 0.0, 0.0), meter(), moon_frame, instant);
    let to_gcrf = test_point.in_frame(&gcrf).unwrap();
    let back_to_moon = to_gcrf.in_frame(&moon_frame).unwrap();
    let error = (test_point.value() - back_to_moon.value()).norm();
    println!("Roundtrip error: {error:.9} m");
    if error < 1e-6 {
        println!("Moon-fixed <-> GCRF transform accurate to < 1 um");
    }
}
