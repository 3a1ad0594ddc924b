//! Earth Orientation Parameters: Bulletin A and Finals 2000A ingestion,
//! the cascading manager, and the free functions [`dut1_ut1`]/
//! [`dut1_utc`] that `time::instant` calls to thread `UT1` through the
//! scale-conversion hub.
//!
//! See `spec.md` §4.E.

pub mod bulletin_a;
pub mod finals2000a;
pub mod lock;
pub mod fetch;
pub mod manager;

pub use bulletin_a::BulletinA;
pub use finals2000a::Finals2000A;
pub use manager::{EopManager, EopManagerState, Mode};

use std::path::Path;
use std::time::Duration as StdDuration;

use crate::error::{PhysicsError, Result};
use crate::manifest::ManifestManager;

/// J2000.0 noon, expressed as a Modified Julian Date.
const J2000_NOON_MJD: f64 = 51_544.5;

fn mjd_from_j2000_noon_ns(count_ns: i64) -> f64 {
    J2000_NOON_MJD + count_ns as f64 / 1e9 / 86_400.0
}

/// Polar motion `(xp, yp)`, in arcseconds, at the UTC-axis modified
/// Julian date `mjd`.
pub fn get_polar_motion_at(mjd: f64) -> Result<(f64, f64)> {
    EopManager::get().lock().expect("EOP manager poisoned").get_polar_motion_at(mjd)
}

/// `UT1-UTC` in seconds at `mjd`.
pub fn get_ut1_minus_utc_at(mjd: f64) -> Result<f64> {
    EopManager::get().lock().expect("EOP manager poisoned").get_ut1_minus_utc_at(mjd)
}

/// Length of day in seconds at `mjd`.
pub fn get_lod_at(mjd: f64) -> Result<f64> {
    EopManager::get().lock().expect("EOP manager poisoned").get_lod_at(mjd)
}

/// `UT1 - UTC`, in nanoseconds, looked up from a UT1-axis nanosecond count
/// (ns from the J2000 noon epoch along the UT1 axis). Called from
/// `time::instant::Instant::to_tt` to convert a `UT1` count to `UTC`:
/// `utc = ut1 - dut1_ut1(ut1)`.
pub fn dut1_ut1(ut1_count_ns: i64) -> Result<i64> {
    let mjd = mjd_from_j2000_noon_ns(ut1_count_ns);
    let seconds = get_ut1_minus_utc_at(mjd)?;
    Ok((seconds * 1e9).round() as i64)
}

/// `UT1 - UTC`, in nanoseconds, looked up from a UTC-axis nanosecond
/// count. Called from `Instant::from_tt` to convert a `UTC` count to
/// `UT1`: `ut1 = utc + dut1_utc(utc)`. The MJD this resolves to differs
/// from `dut1_ut1`'s by at most `UT1-UTC` itself (under a second), far
/// smaller than a day — negligible for a daily-cadence lookup table.
pub fn dut1_utc(utc_count_ns: i64) -> Result<i64> {
    let mjd = mjd_from_j2000_noon_ns(utc_count_ns);
    let seconds = get_ut1_minus_utc_at(mjd)?;
    Ok((seconds * 1e9).round() as i64)
}

/// Shared `Automatic`-mode refresh step for the EOP and space-weather
/// managers (`spec.md` §4.C's IDLE→SERVE→expired?→RELOAD→LOCK→FETCH→
/// VALIDATE→UNLOCK state machine): acquire `repository`'s advisory lock,
/// consult the manifest for `dataset_name`'s staleness and candidate URLs,
/// and refetch `repository/filename` if it's missing or older than the
/// manifest's last-update timestamp. Never returns an error to the
/// caller — a lock timeout, a missing manifest entry, or a failed fetch
/// all just mean "serve whatever is already on disk", logged at `debug`
/// rather than silently discarded, so last-known-good data is never lost
/// to a transient refresh failure.
pub(crate) fn refresh_if_stale(repository: &Path, filename: &str, dataset_name: &str, lock_timeout: StdDuration) {
    let _lock = match lock::RepositoryLock::acquire(repository, lock_timeout) {
        Ok(lock) => lock,
        Err(err) => {
            tracing::debug!(dataset = dataset_name, %err, "could not acquire repository lock, serving cached data");
            return;
        }
    };

    let destination = repository.join(filename);
    match should_fetch(&destination, dataset_name) {
        Ok(true) => {
            if let Err(err) = fetch_latest(dataset_name, &destination) {
                tracing::debug!(dataset = dataset_name, %err, "refresh failed, serving cached data");
            }
        }
        Ok(false) => {}
        Err(err) => tracing::debug!(dataset = dataset_name, %err, "manifest lookup failed, serving cached data"),
    }
}

/// Whether `destination` needs refetching: no manifest entry for
/// `dataset_name` means `Automatic` mode behaves like `Manual` until one is
/// registered; otherwise compare the local file's modification time against
/// the manifest's last-update timestamp.
fn should_fetch(destination: &Path, dataset_name: &str) -> Result<bool> {
    let manifest = ManifestManager::global().lock().expect("manifest manager poisoned");
    let last_update = match manifest.get_last_update_timestamp_for(dataset_name) {
        Ok(ts) => ts,
        Err(_) => return Ok(false),
    };
    drop(manifest);

    match std::fs::metadata(destination).and_then(|m| m.modified()) {
        Ok(local_mtime) => Ok(chrono::DateTime::<chrono::Utc>::from(local_mtime) < last_update),
        Err(_) => Ok(true),
    }
}

#[cfg(feature = "remote-fetch")]
fn fetch_latest(dataset_name: &str, destination: &Path) -> Result<()> {
    let manifest = ManifestManager::global().lock().expect("manifest manager poisoned");
    let urls = manifest.get_remote_data_urls(dataset_name)?.to_vec();
    drop(manifest);

    let fetcher = fetch::ReqwestFetcher;
    let mut last_err = None;
    for url in &urls {
        match fetch::fetch_and_install(&fetcher, url, destination) {
            Ok(()) => return Ok(()),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| PhysicsError::DataUnavailable(format!("manifest has no URLs for '{dataset_name}'"))))
}

#[cfg(not(feature = "remote-fetch"))]
fn fetch_latest(dataset_name: &str, destination: &Path) -> Result<()> {
    let _ = destination;
    Err(PhysicsError::NotImplemented(format!(
        "fetching '{dataset_name}' requires the 'remote-fetch' feature"
    )))
}
