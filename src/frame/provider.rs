//! Transform providers: the analytic models that produce a frame's
//! [`Transform`] relative to its parent at a given instant.
//!
//! `spec.md` §9 "Polymorphic providers" flags the original's virtual
//! `Provider` class hierarchy (one `.cpp`/`.hpp` pair per model, dispatched
//! through a vtable) as unnecessary indirection for a closed, small set of
//! models — a tagged enum dispatched through one function is simpler to
//! read and just as extensible within this crate's scope. Each variant is
//! grounded in the corresponding original provider listed below.

use std::f64::consts::PI;

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::Result;
use crate::frame::nutation;
use crate::frame::transform::Transform;
use crate::time::instant::Instant;
use crate::time::scale::Scale;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);
const SECONDS_PER_JULIAN_CENTURY: f64 = 86_400.0 * 36_525.0;

/// Julian centuries of TT elapsed since J2000.0. `Instant`'s internal count
/// *is* nanoseconds from the J2000 noon TT epoch, so this is a single
/// division — no calendar round-trip required.
fn centuries_tt(instant: Instant) -> Result<f64> {
    let tt = instant.in_scale(Scale::Tt)?;
    Ok(tt.count() as f64 / 1e9 / SECONDS_PER_JULIAN_CENTURY)
}

/// Days of UT1 elapsed since J2000.0 (`Tu` in the ERA formula below). Same
/// reasoning as [`centuries_tt`]: the UT1 axis's epoch *is* JD 2451545.0.
fn days_ut1(instant: Instant) -> Result<f64> {
    let ut1 = instant.in_scale(Scale::Ut1)?;
    Ok(ut1.count() as f64 / 1e9 / 86_400.0)
}

/// The model that produces a frame's transform to its parent, evaluated at
/// a query [`Instant`]. See `spec.md` §4.D for the frame tree this wires.
#[derive(Debug, Clone, Copy)]
pub enum TransformProvider {
    /// A fixed transform, independent of the query instant. Grounds the
    /// root (GCRF has no parent and needs no provider, but a degenerate
    /// identity provider is useful for tests and for frames a caller
    /// constructs directly via `spec.md` §4.D's `Frame::construct`).
    Static(Transform),

    /// IAU 1976 precession from the J2000.0 mean equator/equinox to the
    /// mean equator/equinox of the query instant ("mean of date"). Grounded
    /// in `original_source/.../Frame/Providers/IAU/Precession1976.cpp`.
    Precession1976,

    /// IAU 1980 ("FK5") nutation at the query instant, layered on top of
    /// whatever frame `Precession1976` already brought to the mean equator
    /// of date. Grounded in `crate::frame::nutation` and
    /// `original_source/.../Frame/Providers/IAU/Nutation1980.cpp`.
    Nutation1980,

    /// GCRF → CIRF, IAU 2006/2000A CIO-based: a single bias-precession-
    /// nutation-plus-CIO-locator rotation, architecturally distinct from
    /// the `Precession1976` → `Nutation1980` two-hop classical-equinox
    /// chain MOD/TOD use, even though it reuses `crate::frame::nutation`'s
    /// truncated series for the nutation contribution. The CIO locator `s`
    /// is approximated by its leading-order `-X·Y/2` term (`X`, `Y` the
    /// first-order CIP coordinates), grounded in the `s06`/CIO-locator
    /// routine in ERFA-derived Rust ports (e.g. `s - y/2·x`); see
    /// `DESIGN.md` for why the full IAU 2000A series isn't ported.
    Cio2006,

    /// Earth Rotation Angle: CIRF → TIRF, a pure spin about the CIP about
    /// rate `dERA/dUT1`. Grounded in
    /// `original_source/.../Frame/Providers/IAU/EarthRotationAngle.cpp`.
    EarthRotationAngle,

    /// Polar motion: TIRF → ITRF, a small rotation by `(xp, yp)` read from
    /// the EOP manager. Grounded in
    /// `original_source/.../Frame/Providers/IERS/PolarMotion.cpp` and
    /// `crate::eop`.
    PolarMotion,

    /// TEME (True Equator, Mean Equinox) — the frame SGP4 propagates in.
    /// `spec.md` §4.D documents TEME as parented directly to ITRF in this
    /// crate (a deliberate simplification from the original, which derives
    /// it from TOD): within the tolerances this kernel targets, TEME and
    /// PEF (ITRF before polar motion) differ by the equation of the
    /// equinoxes alone, which this crate neglects. See `DESIGN.md`.
    Teme,
}

/// Evaluate `provider` at `instant`, producing the parent→child transform.
pub fn evaluate(provider: &TransformProvider, instant: Instant) -> Result<Transform> {
    match provider {
        TransformProvider::Static(transform) => Ok(*transform),

        TransformProvider::Precession1976 => {
            let t = centuries_tt(instant)?;
            // Capitaine et al. IAU 1976 precession angles, arcseconds.
            let zeta = (2306.2181 * t + 0.301_88 * t * t + 0.017_998 * t * t * t) * ARCSEC_TO_RAD;
            let z = (2306.2181 * t + 1.094_68 * t * t + 0.018_203 * t * t * t) * ARCSEC_TO_RAD;
            let theta = (2004.3109 * t - 0.426_65 * t * t - 0.041_833 * t * t * t) * ARCSEC_TO_RAD;

            let rz_zeta = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -zeta);
            let ry_theta = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), theta);
            let rz_z = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -z);
            let orientation = rz_z * ry_theta * rz_zeta;

            Ok(Transform::rotation(instant, orientation, Vector3::zeros()))
        }

        TransformProvider::Nutation1980 => {
            let t = centuries_tt(instant)?;
            let (delta_psi, delta_eps) = nutation::nutation(t);
            let mean_eps = nutation::mean_obliquity(t);
            let true_eps = mean_eps + delta_eps;

            let rx_mean_eps = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), mean_eps);
            let rz_delta_psi = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -delta_psi);
            let rx_true_eps = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -true_eps);
            let orientation = rx_true_eps * rz_delta_psi * rx_mean_eps;

            Ok(Transform::rotation(instant, orientation, Vector3::zeros()))
        }

        TransformProvider::Cio2006 => {
            let t = centuries_tt(instant)?;
            // IAU 2006 precession (Capitaine et al. 2003): numerically
            // distinct coefficients from the IAU 1976 series above, not a
            // re-derivation of it.
            let zeta = (2306.083_227 * t + 0.298_850 * t * t + 0.017_998 * t * t * t) * ARCSEC_TO_RAD;
            let z = (2306.077_181 * t + 1.092_999 * t * t + 0.018_203 * t * t * t) * ARCSEC_TO_RAD;
            let theta = (2004.191_903 * t - 0.429_493 * t * t - 0.041_833 * t * t * t) * ARCSEC_TO_RAD;

            let rz_zeta = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -zeta);
            let ry_theta = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), theta);
            let rz_z = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -z);
            let precession = rz_z * ry_theta * rz_zeta;

            let (delta_psi, delta_eps) = nutation::nutation(t);
            let mean_eps = nutation::mean_obliquity(t);
            let true_eps = mean_eps + delta_eps;
            let rx_mean_eps = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), mean_eps);
            let rz_delta_psi = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -delta_psi);
            let rx_true_eps = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -true_eps);
            let nutation_rotation = rx_true_eps * rz_delta_psi * rx_mean_eps;

            // First-order CIP coordinates and the leading term of the CIO
            // locator s = -X·Y/2 (arcsecond-level at modern epochs).
            let x_cip = delta_psi * mean_eps.sin();
            let y_cip = delta_eps;
            let s = -0.5 * x_cip * y_cip;
            let rz_s = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -s);

            let orientation = rz_s * nutation_rotation * precession;
            Ok(Transform::rotation(instant, orientation, Vector3::zeros()))
        }

        TransformProvider::EarthRotationAngle => {
            let tu = days_ut1(instant)?;
            let era = 2.0 * PI * (0.779_057_273_264_0 + 1.002_737_811_911_354_48 * tu);
            let era_rate = 2.0 * PI * 1.002_737_811_911_354_48 / 86_400.0; // rad/s
            let orientation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -era);
            let angular_velocity = Vector3::new(0.0, 0.0, -era_rate);
            Ok(Transform::rotation(instant, orientation, angular_velocity))
        }

        TransformProvider::PolarMotion => {
            let mjd = instant.modified_julian_date()?;
            let (xp_arcsec, yp_arcsec) = crate::eop::get_polar_motion_at(mjd)?;
            let xp = xp_arcsec * ARCSEC_TO_RAD;
            let yp = yp_arcsec * ARCSEC_TO_RAD;
            let ry_xp = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -xp);
            let rx_yp = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -yp);
            let orientation = ry_xp * rx_yp;
            Ok(Transform::rotation(instant, orientation, Vector3::zeros()))
        }

        TransformProvider::Teme => Ok(Transform::identity(instant)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precession_at_j2000_is_identity() {
        let epoch = Instant::j2000();
        let transform = evaluate(&TransformProvider::Precession1976, epoch).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);
        assert!((transform.apply_to_position(p) - p).norm() < 1e-9);
    }

    #[test]
    fn nutation_at_j2000_is_a_small_perturbation() {
        let epoch = Instant::j2000();
        let transform = evaluate(&TransformProvider::Nutation1980, epoch).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);
        let displaced = transform.apply_to_position(p);
        assert!((displaced - p).norm() < 1e-3);
        assert!((displaced - p).norm() > 0.0);
    }

    #[test]
    fn cio_2006_at_j2000_is_identity() {
        let epoch = Instant::j2000();
        let transform = evaluate(&TransformProvider::Cio2006, epoch).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);
        assert!((transform.apply_to_position(p) - p).norm() < 1e-9);
    }

    #[test]
    fn cio_2006_diverges_from_precession_1976_away_from_j2000() {
        // Ten years out, the IAU 2006 precession coefficients and the
        // folded-in nutation/CIO-locator terms must produce a measurably
        // different rotation from the classical FK5 chain's precession hop
        // alone — confirming this is a distinct model, not a relabeling.
        let t = Instant::j2000() + crate::time::duration::Duration::days(3652.5);
        let classical = evaluate(&TransformProvider::Precession1976, t).unwrap();
        let cio = evaluate(&TransformProvider::Cio2006, t).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);
        assert!((classical.apply_to_position(p) - cio.apply_to_position(p)).norm() > 1e-8);
    }

    #[test]
    fn earth_rotation_angle_at_j2000_matches_published_value() {
        let transform = evaluate(&TransformProvider::EarthRotationAngle, Instant::j2000()).unwrap();
        let p = Vector3::new(1.0, 0.0, 0.0);
        let rotated = transform.apply_to_position(p);
        let era = (-rotated.y).atan2(rotated.x);
        let expected = 2.0 * PI * 0.779_057_273_264_0_f64.fract();
        assert!((era.rem_euclid(2.0 * PI) - expected.rem_euclid(2.0 * PI)).abs() < 1e-6);
    }
}
