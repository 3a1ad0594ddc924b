//! The process-wide Earth Orientation Parameter manager.
//!
//! Grounded in
//! `original_source/.../Frame/Provider/IERS/Manager.cpp`: a mutex-guarded
//! singleton caching a loaded [`BulletinA`] and [`Finals2000A`], serving
//! polar motion / `UT1-UTC` / LOD queries by trying Bulletin A
//! observations, then Bulletin A predictions, then Finals 2000A, in that
//! order (LOD only ever comes from Finals 2000A, which the original notes
//! is the only source that carries it). `spec.md` §9's "avoid hidden
//! global state in tests" note is why [`EopManagerState::from_parts`]
//! exists as an injectable alternative to [`EopManager::get`].

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration as StdDuration;

use crate::config::ManagerConfig;
use crate::error::{PhysicsError, Result};

use super::bulletin_a::BulletinA;
use super::finals2000a::Finals2000A;

const BULLETIN_A_DATASET: &str = "bulletin-a";
const FINALS_2000A_DATASET: &str = "finals2000a";
const DEFAULT_MANUAL_LOCK_TIMEOUT: StdDuration = StdDuration::from_secs(60);

/// Whether the manager may reach the network/filesystem on its own
/// (`Automatic`) or must be fed data explicitly via `load_bulletin_a`/
/// `load_finals_2000a` (`Manual`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manual,
    Automatic,
}

pub struct EopManagerState {
    mode: Mode,
    local_repository: PathBuf,
    lock_timeout: StdDuration,
    bulletin_a: Option<BulletinA>,
    finals_2000a: Option<Finals2000A>,
}

impl EopManagerState {
    pub fn new(config: ManagerConfig) -> Self {
        EopManagerState {
            mode: config.mode,
            local_repository: config.local_repository,
            lock_timeout: config.lock_timeout,
            bulletin_a: None,
            finals_2000a: None,
        }
    }

    /// Construct with data already loaded, bypassing the filesystem
    /// entirely — the injectable path tests use instead of the process
    /// singleton. Always `Manual`, so `lock_timeout` is never consulted.
    pub fn from_parts(bulletin_a: Option<BulletinA>, finals_2000a: Option<Finals2000A>) -> Self {
        EopManagerState {
            mode: Mode::Manual,
            local_repository: PathBuf::new(),
            lock_timeout: DEFAULT_MANUAL_LOCK_TIMEOUT,
            bulletin_a,
            finals_2000a,
        }
    }

    pub fn load_bulletin_a(&mut self, bulletin_a: BulletinA) {
        self.bulletin_a = Some(bulletin_a);
    }

    pub fn load_finals_2000a(&mut self, finals_2000a: Finals2000A) {
        self.finals_2000a = Some(finals_2000a);
    }

    /// Re-checked on every `Automatic`-mode access (not just when nothing is
    /// loaded yet): a cached file can go stale without ever becoming
    /// `None`, so staleness has to be a standing question, not a one-shot
    /// fill-if-empty.
    fn ensure_bulletin_a(&mut self) -> Option<&BulletinA> {
        if self.mode == Mode::Automatic {
            super::refresh_if_stale(&self.local_repository, "ser7.dat", BULLETIN_A_DATASET, self.lock_timeout);
            if let Ok(text) = std::fs::read_to_string(self.local_repository.join("ser7.dat")) {
                if let Ok(parsed) = BulletinA::parse(&text) {
                    self.bulletin_a = Some(parsed);
                }
            }
        }
        self.bulletin_a.as_ref()
    }

    fn ensure_finals_2000a(&mut self) -> Option<&Finals2000A> {
        if self.mode == Mode::Automatic {
            super::refresh_if_stale(&self.local_repository, "finals2000A.data", FINALS_2000A_DATASET, self.lock_timeout);
            if let Ok(text) = std::fs::read_to_string(self.local_repository.join("finals2000A.data")) {
                if let Ok(parsed) = Finals2000A::parse(&text) {
                    self.finals_2000a = Some(parsed);
                }
            }
        }
        self.finals_2000a.as_ref()
    }

    pub fn get_polar_motion_at(&mut self, mjd: f64) -> Result<(f64, f64)> {
        if let Some(bulletin_a) = self.ensure_bulletin_a() {
            if let Ok(row) = bulletin_a.observation_at(mjd) {
                return Ok((row.x, row.y));
            }
            if let Ok(row) = bulletin_a.prediction_at(mjd) {
                return Ok((row.x, row.y));
            }
        }
        if let Some(finals_2000a) = self.ensure_finals_2000a() {
            let row = finals_2000a.row_at(mjd)?;
            return Ok((row.x, row.y));
        }
        Err(PhysicsError::DataUnavailable(format!("no polar motion data covers MJD {mjd}")))
    }

    pub fn get_ut1_minus_utc_at(&mut self, mjd: f64) -> Result<f64> {
        if let Some(bulletin_a) = self.ensure_bulletin_a() {
            if let Ok(row) = bulletin_a.observation_at(mjd) {
                return Ok(row.ut1_minus_utc);
            }
            if let Ok(row) = bulletin_a.prediction_at(mjd) {
                return Ok(row.ut1_minus_utc);
            }
        }
        if let Some(finals_2000a) = self.ensure_finals_2000a() {
            return Ok(finals_2000a.row_at(mjd)?.ut1_minus_utc);
        }
        Err(PhysicsError::DataUnavailable(format!("no UT1-UTC data covers MJD {mjd}")))
    }

    pub fn get_lod_at(&mut self, mjd: f64) -> Result<f64> {
        if let Some(finals_2000a) = self.ensure_finals_2000a() {
            return Ok(finals_2000a.row_at(mjd)?.lod);
        }
        Err(PhysicsError::DataUnavailable(format!("no length-of-day data covers MJD {mjd}")))
    }
}

/// Handle to the process-wide [`EopManagerState`] singleton.
pub struct EopManager;

impl EopManager {
    pub fn get() -> &'static Mutex<EopManagerState> {
        static MANAGER: OnceLock<Mutex<EopManagerState>> = OnceLock::new();
        MANAGER.get_or_init(|| Mutex::new(EopManagerState::new(ManagerConfig::eop_defaults())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULLETIN_A_SAMPLE: &str = "\
 02 01 18 Vol. XXVII No. 003
TAI-UTC = 37.0 17 seconds
  2017  12 31  58117     0.100000    0.000040     0.280000    0.000040     0.100000    0.000030
  2018   1   1  58118     0.101000    0.000040     0.281000    0.000040     0.101000    0.000030
";

    const FINALS_SAMPLE: &str = "\
58000 0.050 0.150 0.2000 0.0010
58001 0.051 0.151 0.2010 0.0011
";

    #[test]
    fn cascades_from_bulletin_a_to_finals_2000a() {
        let bulletin_a = BulletinA::parse(BULLETIN_A_SAMPLE).unwrap();
        let finals_2000a = Finals2000A::parse(FINALS_SAMPLE).unwrap();
        let mut state = EopManagerState::from_parts(Some(bulletin_a), Some(finals_2000a));

        let (x, y) = state.get_polar_motion_at(58117.0).unwrap();
        assert_eq!((x, y), (0.1, 0.28));

        let (x, y) = state.get_polar_motion_at(58000.0).unwrap();
        assert_eq!((x, y), (0.05, 0.15));
    }

    #[test]
    fn lod_only_comes_from_finals_2000a() {
        let finals_2000a = Finals2000A::parse(FINALS_SAMPLE).unwrap();
        let mut state = EopManagerState::from_parts(None, Some(finals_2000a));
        assert!((state.get_lod_at(58000.5).unwrap() - 0.00105).abs() < 1e-9);
    }

    #[test]
    fn no_data_at_all_is_data_unavailable() {
        let mut state = EopManagerState::from_parts(None, None);
        assert!(matches!(state.get_polar_motion_at(58000.0), Err(PhysicsError::DataUnavailable(_))));
    }
}
