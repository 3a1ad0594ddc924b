//! Cross-module, concrete end-to-end scenarios, complementing the unit
//! tests that live beside each module. Each test here exercises at least
//! two modules together the way a downstream caller would.

use physics_kernel::celestial::GravitationalModel;
use physics_kernel::eop::bulletin_a::BulletinA;
use physics_kernel::eop::finals2000a::Finals2000A;
use physics_kernel::eop::manager::EopManagerState;
use physics_kernel::frame::Frame;
use physics_kernel::time::date_time::{DateTime, Format as DateTimeFormat};
use physics_kernel::time::duration::{Duration, Format as DurationFormat};
use physics_kernel::time::instant::Instant;
use physics_kernel::time::scale::Scale;
use physics_kernel::units::base::{LengthUnit, MassUnit, TimeUnit, ElectricCurrentUnit, AngleUnit};
use physics_kernel::units::derived::Unit;
use physics_kernel::units::order::Order;

fn utc(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Instant {
    let dt = DateTime::ymd_hms(year, month, day, hour, minute, second, 0, 0, 0).unwrap();
    Instant::from_date_time(dt, Scale::Utc)
}

/// The 2016/2017 New Year leap second: TAI runs 37 seconds ahead of UTC
/// from 2017-01-01T00:00:00 onward, 36 seconds ahead the instant before.
#[test]
fn utc_to_tai_across_the_2017_leap_second() {
    let last_second_of_2016 = utc(2016, 12, 31, 23, 59, 59);
    let first_instant_of_2017 = utc(2017, 1, 1, 0, 0, 0);

    let tai_before = last_second_of_2016.in_scale(Scale::Tai).unwrap().to_date_time().unwrap();
    let tai_at = first_instant_of_2017.in_scale(Scale::Tai).unwrap().to_date_time().unwrap();

    assert_eq!(tai_before.to_string_with(DateTimeFormat::Iso8601), "2017-01-01T00:00:35");
    assert_eq!(tai_at.to_string_with(DateTimeFormat::Iso8601), "2017-01-01T00:00:37");

    // Exactly one UTC second elapsed, but TAI recorded two.
    let elapsed_tai = (first_instant_of_2017.in_scale(Scale::Tai).unwrap()
        - last_second_of_2016.in_scale(Scale::Tai).unwrap())
    .unwrap();
    assert_eq!(elapsed_tai.count_ns(), 2_000_000_000);
}

/// The frame graph's polar-motion hop reads live EOP data: with a Bulletin
/// A row injected at the query epoch, ITRF and GCRF compose into a
/// rotation whose inverse undoes it exactly, and whose magnitude reflects
/// the Earth Rotation Angle at that epoch (the dominant term), not just
/// the arcsecond-level polar-motion correction layered on top of it.
#[test]
fn itrf_to_gcrf_round_trips_with_injected_eop_data() {
    let bulletin_a_text = "\
 02 01 18 Vol. XXVII No. 003
TAI-UTC = 32.0 17 seconds
  2000   1   1  51544     0.108000    0.000040     0.287000    0.000040     0.355400    0.000030
  2000   1   2  51545     0.108500    0.000040     0.287500    0.000040     0.355900    0.000030
";
    let bulletin_a = BulletinA::parse(bulletin_a_text).unwrap();
    {
        let mut state = physics_kernel::eop::manager::EopManager::get().lock().unwrap();
        state.load_bulletin_a(bulletin_a);
    }

    let query = utc(2000, 1, 1, 0, 0, 0);
    let itrf = Frame::itrf().unwrap();
    let gcrf = Frame::gcrf().unwrap();

    let forward = itrf.get_transform_to(&gcrf, query).unwrap();
    let backward = gcrf.get_transform_to(&itrf, query).unwrap();

    let p = nalgebra::Vector3::new(1.0, 0.0, 0.0);
    let rotated = forward.apply_to_position(p);

    // The composed rotation is dominated by the Earth Rotation Angle at
    // this epoch, so it must differ substantially from identity...
    assert!((rotated - p).norm() > 0.5);
    // ...but stay on the unit sphere (a pure rotation).
    assert!((rotated.norm() - 1.0).abs() < 1e-9);

    // Applying the inverse transform undoes it.
    let round_trip = backward.apply_to_position(rotated);
    assert!((round_trip - p).norm() < 1e-9);
}

/// `EopManager` cascades Bulletin A observations, then predictions, then
/// Finals 2000A: a query inside Bulletin A's coverage is served by it, and
/// a query past its last row falls through to Finals 2000A instead of
/// failing outright.
#[test]
fn eop_cascade_falls_through_to_finals_2000a_past_bulletin_a_coverage() {
    let mut bulletin_a_text = String::from(" 02 01 18 Vol. XXVII No. 003\nTAI-UTC = 37.0 17 seconds\n");
    bulletin_a_text.push_str("  2017  10  9  58000     0.100000    0.000040     0.280000    0.000040     0.150000    0.000030\n");
    bulletin_a_text.push_str("  2017  10 10  58001     0.101000    0.000040     0.281000    0.000040     0.151000    0.000030\n");
    let bulletin_a = BulletinA::parse(&bulletin_a_text).unwrap();

    let mut finals_2000a_text = String::new();
    for offset in 0..20_001 {
        let mjd = 40_000 + offset;
        finals_2000a_text.push_str(&format!("{mjd} 0.050 0.150 0.2000 0.0010\n"));
    }
    let finals_2000a = Finals2000A::parse(&finals_2000a_text).unwrap();

    let mut state = EopManagerState::from_parts(Some(bulletin_a), Some(finals_2000a));

    // Served by Bulletin A directly.
    let (x, _y) = state.get_polar_motion_at(58_000.0).unwrap();
    assert_eq!(x, 0.1);

    // Past Bulletin A's last row: falls through to Finals 2000A.
    let (x, y) = state.get_polar_motion_at(58_500.0).unwrap();
    assert_eq!((x, y), (0.05, 0.15));
}

/// Spherical gravity is exact: `g = -mu/r^2` along `-r_hat`.
#[test]
fn spherical_gravity_matches_the_inverse_square_law_exactly() {
    let mu = 398_600_441_800_000.0_f64; // m^3/s^2, WGS84 Earth
    let model = GravitationalModel::spherical(mu);

    let one_radius = nalgebra::Vector3::new(1.0, 0.0, 0.0);
    let field_at_1m = model.field_at(one_radius, 0, 0).unwrap();
    assert!((field_at_1m - nalgebra::Vector3::new(-mu, 0.0, 0.0)).norm() < 1.0);

    let two_radii = nalgebra::Vector3::new(0.0, 2.0, 0.0);
    let field_at_2m = model.field_at(two_radii, 0, 0).unwrap();
    // At twice the distance the field is a quarter the magnitude.
    assert!((field_at_2m.norm() - field_at_1m.norm() / 4.0).abs() < 1e-6);
}

/// `Duration`'s ISO8601 format round-trips through its own parser.
#[test]
fn duration_iso8601_round_trip() {
    let original = Duration::days(1.0) + Duration::hours(2.0) + Duration::minutes(30.0) + Duration::seconds(15.25);
    let text = original.to_string_with(DurationFormat::Iso8601);
    let parsed = Duration::parse(&text).unwrap();
    assert_eq!(parsed.count_ns(), original.count_ns());
}

/// Two derived units with matching per-dimension orders are compatible
/// regardless of which concrete unit each dimension uses, and convert
/// through the SI-ratio product `spec.md` §4.A describes.
#[test]
fn feet_per_hour_converts_to_meters_per_second() {
    let feet_per_hour = Unit::new(
        LengthUnit::Foot,
        Order::integer(1),
        MassUnit::Kilogram,
        Order::zero(),
        TimeUnit::Hour,
        Order::integer(-1),
        ElectricCurrentUnit::Ampere,
        Order::zero(),
        AngleUnit::Radian,
        Order::zero(),
    );
    let meters_per_second = Unit::meter_per_second();
    assert!(feet_per_hour.is_compatible(&meters_per_second));

    let value_in_feet_per_hour = 3_600.0;
    let value_in_meters_per_second = value_in_feet_per_hour * feet_per_hour.ratio_to(&meters_per_second);
    assert!((value_in_meters_per_second - 0.3048).abs() < 1e-9);
}
