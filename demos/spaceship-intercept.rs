//! Spaceship intercept mission example.
//!
//! A human spaceship must intercept an alien mothership in deep space.
//! Demonstrates GCRF-frame position vectors, separations, and
//! time-to-intercept computed with unit-tagged quantities and durations.

use nalgebra::Vector3;

use physics_kernel::frame::Frame;
use physics_kernel::quantity::VectorQuantity;
use physics_kernel::time::duration::Duration;
use physics_kernel::time::instant::Instant;
use physics_kernel::units::base::{AngleUnit, ElectricCurrentUnit, LengthUnit, MassUnit, TimeUnit};
use physics_kernel::units::derived::Unit;
use physics_kernel::units::order::Order;

const AU_M: f64 = 149_597_870_700.0;

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

fn position(x_km: f64, y_km: f64, z_km: f64, frame: Frame, instant: Instant) -> VectorQuantity {
    VectorQuantity::new(Vector3::new(x_km, y_km, z_km) * 1000.0, meter(), frame, instant)
}

fn main() {
    println!("=== Spaceship Intercept Mission ===\n");

    let gcrf = Frame::gcrf().unwrap();
    let instant = Instant::j2000();

    let human_ship = position(150_000_000.0, 0.0, 0.0, gcrf, instant);
    let alien_ship = position(450_000_000.0, 120_000_000.0, -50_000_000.0, gcrf, instant);

    println!("Initial Positions (GCRF frame):\n");
    let h = human_ship.value();
    println!("  Human Spaceship:");
    println!("    X: {:>12.0} km", h.x / 1000.0);
    println!("    Y: {:>12.0} km", h.y / 1000.0);
    println!("    Z: {:>12.0} km", h.z / 1000.0);
    println!("    Distance from origin: {:.2} AU", h.norm() / AU_M);

    let a = alien_ship.value();
    println!("\n  Alien Mothership:");
    println!("    X: {:>12.0} km", a.x / 1000.0);
    println!("    Y: {:>12.0} km", a.y / 1000.0);
    println!("    Z: {:>12.0} km", a.z / 1000.0);
    println!("    Distance from origin: {:.2} AU", a.norm() / AU_M);

    let separation_m = (human_ship.value() - alien_ship.value()).norm();
    println!("\nTarget Analysis:");
    println!("  Separation distance: {:.2} million km", separation_m / 1e9);
    println!("  Separation distance: {:.3} AU", separation_m / AU_M);

    println!("\nIntercept Scenarios:\n");
    let scenarios: [(&str, f64); 3] = [
        ("Ion drive (slow & steady)", 40_000.0),
        ("Fusion drive (fast)", 150_000.0),
        ("Warp drive (theoretical)", 5_000_000.0),
    ];

    for (name, speed_m_s) in scenarios {
        let time_to_intercept = Duration::seconds(separation_m / speed_m_s);
        println!("  {name} @ {:.0} km/s:", speed_m_s / 1000.0);
        if time_to_intercept.in_days() < 1.0 {
            println!("    Time to intercept: {:.1} hours", time_to_intercept.in_hours());
        } else if time_to_intercept.in_days() < 30.0 {
            println!("    Time to intercept: {:.1} days", time_to_intercept.in_days());
        } else {
            println!(
                "    Time to intercept: {:.1} days ({:.2} months)",
                time_to_intercept.in_days(),
                time_to_intercept.in_days() / 30.0
            );
        }
    }

    println!("\nCourse Correction Simulation:");
    println!("  Alien mothership detected changing position...\n");

    let alien_ship_new = position(445_000_000.0, 125_000_000.0, -48_000_000.0, gcrf, instant);
    let new_separation_m = (human_ship.value() - alien_ship_new.value()).norm();
    let position_change_m = separation_m - new_separation_m;

    println!("  New separation: {:.2} million km", new_separation_m / 1e9);
    println!("  Position change: {position_change_m:.0} m closer");

    let target_time = Duration::days(7.0);
    let required_velocity_m_s = new_separation_m / target_time.in_seconds();
    println!("\n  For a 7-day intercept:");
    println!("    Required velocity: {:.1} km/s", required_velocity_m_s / 1000.0);
    println!("    ({:.2}% speed of light)", required_velocity_m_s / 299_792_458.0 * 100.0);

    println!("\nThree-Point Navigation Course:");
    let waypoint_1 = position(250_000_000.0, 30_000_000.0, -10_000_000.0, gcrf, instant);
    let waypoint_2 = position(350_000_000.0, 75_000_000.0, -30_000_000.0, gcrf, instant);

    let leg1 = (human_ship.value() - waypoint_1.value()).norm();
    let leg2 = (waypoint_1.value() - waypoint_2.value()).norm();
    let leg3 = (waypoint_2.value() - alien_ship_new.value()).norm();
    let total_distance = leg1 + leg2 + leg3;

    println!("  Leg 1 (Earth -> WP1): {:.2} million km", leg1 / 1e9);
    println!("  Leg 2 (WP1 -> WP2):   {:.2} million km", leg2 / 1e9);
    println!("  Leg 3 (WP2 -> Alien): {:.2} million km", leg3 / 1e9);
    println!("  -----------------------------------");
    println!("  Total distance:       {:.2} million km", total_distance / 1e9);

    let direct_distance = (human_ship.value() - alien_ship_new.value()).norm();
    let extra_distance = total_distance - direct_distance;
    let extra_percent = extra_distance / direct_distance * 100.0;
    println!("  Extra distance:       {:.2} million km ({extra_percent:.1}% longer)", extra_distance / 1e9);

    println!("\nMission status: coordinates calculated successfully.");
    println!("All positions verified in the GCRF inertial reference frame.");
}
