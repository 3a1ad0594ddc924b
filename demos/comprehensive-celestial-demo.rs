//! A tour of the physics kernel: time scales and leap seconds, the frame
//! graph, unit-tagged quantities, and celestial field evaluation.

use nalgebra::Vector3;

use physics_kernel::celestial::{BodyType, Celestial, GravitationalModel, MagneticModel, MagneticModelType};
use physics_kernel::environment::Environment;
use physics_kernel::frame::Frame;
use physics_kernel::quantity::VectorQuantity;
use physics_kernel::time::date_time::{DateTime, Format as DateTimeFormat};
use physics_kernel::time::instant::Instant;
use physics_kernel::time::scale::Scale;
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

fn earth(frame: Frame) -> Celestial {
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
    .with_magnetic_model(MagneticModel::new(MagneticModelType::Dipole, Vector3::new(0.0, 0.0, 1.0), 8e22))
}

fn main() {
    println!("=== Physics Kernel Demo ===\n");

    // 1. TIME SCALES AND LEAP SECONDS
    println!("1. Time Scales and Leap Seconds");
    let utc = DateTime::ymd_hms(2017, 1, 1, 0, 0, 0, 0, 0, 0).unwrap();
    let utc_instant = Instant::from_date_time(utc, Scale::Utc);
    let tai_instant = utc_instant.in_scale(Scale::Tai).unwrap();
    println!("   UTC: {}", utc_instant.to_date_time().unwrap().to_string_with(DateTimeFormat::Iso8601));
    println!(
        "   TAI: {} (37 leap seconds accumulated by this date)",
        tai_instant.to_date_time().unwrap().to_string_with(DateTimeFormat::Iso8601)
    );
    let tt_instant = utc_instant.in_scale(Scale::Tt).unwrap();
    println!("   TT:  {}\n", tt_instant.to_date_time().unwrap().to_string_with(DateTimeFormat::Iso8601));

    // 2. FRAME GRAPH
    println!("2. Coordinate Frame Graph");
    let gcrf = Frame::gcrf().unwrap();
    let tirf = Frame::tirf().unwrap();
    let instant = Instant::j2000();
    let position = Vector3::new(7_000_000.0, 0.0, 0.0);
    let transform = gcrf.get_transform_to(&tirf, instant).unwrap();
    let position_tirf = transform.apply_to_position(position);
    println!("   GCRF position:  {position:?}");
    println!("   TIRF position:  {position_tirf:?}");
    println!("   (Earth Rotation Angle spins the X/Y plane; Z is unchanged)\n");

    // 3. UNIT-TAGGED QUANTITIES
    println!("3. Unit-Tagged Quantities");
    let position_quantity = VectorQuantity::new(position, meter(), gcrf, instant);
    let position_in_tirf = position_quantity.in_frame(&tirf).unwrap();
    println!("   {:?} [{}] in GCRF", position_quantity.value(), position_quantity.unit());
    println!("   {:?} [{}] in TIRF\n", position_in_tirf.value(), position_in_tirf.unit());

    // 4. CELESTIAL FIELD EVALUATION
    println!("4. Celestial Field Evaluation");
    let earth = earth(gcrf);
    let gravity = earth.gravitational_field_at(&position_quantity, instant, 0, 0).unwrap();
    println!("   Gravitational acceleration: {:?} m/s^2", gravity.value());
    let magnetic = earth.magnetic_field_at(&position_quantity, instant, 0).unwrap();
    println!("   Dipole magnetic field:       {:?} T\n", magnetic.value());

    // 5. ENVIRONMENT
    println!("5. Environment");
    let environment = Environment::new(instant, vec![earth]);
    match environment.access_object_with_name("Earth") {
        Ok(body) => println!("   Found body '{}' with mu = {:.3e} m^3/s^2", body.name(), body.mu()),
        Err(e) => println!("   Error: {e}"),
    }

    println!("\n=== Demo Complete ===");
}
