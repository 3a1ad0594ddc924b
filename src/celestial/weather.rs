//! CSSI space-weather ingestion: a sibling of the EOP manager supplying
//! the solar-activity indices (F10.7, Ap) that NRLMSISE-00 needs.
//!
//! Grounded in
//! `original_source/.../Atmospheric/Earth/Weather/CSSISpaceWeather.cpp`
//! and `.../Weather/Manager.cpp`: same shape as [`crate::eop::manager`] —
//! a process-wide, mutex-guarded cache of a parsed file, consulted by
//! MJD. This port keeps only the two fields `getGravitationalFieldAt`'s
//! sibling atmospheric model actually needs (observed F10.7 and the daily
//! average Ap index) rather than the full ~30-column CSSI row; see
//! `DESIGN.md`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration as StdDuration;

use crate::config::ManagerConfig;
use crate::error::{PhysicsError, Result};
use crate::eop::manager::Mode;

const SPACE_WEATHER_DATASET: &str = "space-weather-cssi";
const DEFAULT_MANUAL_LOCK_TIMEOUT: StdDuration = StdDuration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub mjd: f64,
    pub f107_observed: f64,
    pub ap_average: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CssiSpaceWeather {
    rows: BTreeMap<i64, Row>,
}

impl CssiSpaceWeather {
    /// Parse the space-weather table: `mjd f107_observed ap_average`, one
    /// row per line. The real CSSI file carries ~30 whitespace-separated
    /// columns per row (see `CSSISpaceWeather.cpp`); this module only
    /// needs the three it reads here, so the parser accepts that reduced
    /// form directly rather than the full file.
    pub fn parse(text: &str) -> Result<CssiSpaceWeather> {
        let mut table = CssiSpaceWeather::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(PhysicsError::InvalidInput(format!("malformed space weather row: '{line}'")));
            }
            let parse_field = |s: &str| s.parse::<f64>().map_err(|_| PhysicsError::InvalidInput(format!("malformed space weather row: '{line}'")));
            let mjd = parse_field(fields[0])?;
            let row = Row { mjd, f107_observed: parse_field(fields[1])?, ap_average: parse_field(fields[2])? };
            table.rows.insert(mjd.round() as i64, row);
        }
        if table.rows.is_empty() {
            return Err(PhysicsError::InvalidInput("space weather text contains no rows".to_string()));
        }
        Ok(table)
    }

    pub fn row_at(&self, mjd: f64) -> Result<Row> {
        self.rows.get(&(mjd.floor() as i64)).copied().ok_or_else(|| {
            PhysicsError::RangeError(format!("MJD {mjd} is outside the space weather table's coverage"))
        })
    }
}

pub struct WeatherManagerState {
    mode: Mode,
    local_repository: PathBuf,
    lock_timeout: StdDuration,
    table: Option<CssiSpaceWeather>,
}

impl WeatherManagerState {
    pub fn new(config: ManagerConfig) -> Self {
        WeatherManagerState {
            mode: config.mode,
            local_repository: config.local_repository,
            lock_timeout: config.lock_timeout,
            table: None,
        }
    }

    /// Always `Manual`, so `lock_timeout` is never consulted.
    pub fn from_parts(table: Option<CssiSpaceWeather>) -> Self {
        WeatherManagerState {
            mode: Mode::Manual,
            local_repository: PathBuf::new(),
            lock_timeout: DEFAULT_MANUAL_LOCK_TIMEOUT,
            table,
        }
    }

    pub fn load(&mut self, table: CssiSpaceWeather) {
        self.table = Some(table);
    }

    /// Re-checked on every `Automatic`-mode access; see the matching note
    /// on `eop::manager::EopManagerState::ensure_bulletin_a`.
    fn ensure_table(&mut self) -> Option<&CssiSpaceWeather> {
        if self.mode == Mode::Automatic {
            crate::eop::refresh_if_stale(&self.local_repository, "SW-All.txt", SPACE_WEATHER_DATASET, self.lock_timeout);
            if let Ok(text) = std::fs::read_to_string(self.local_repository.join("SW-All.txt")) {
                if let Ok(parsed) = CssiSpaceWeather::parse(&text) {
                    self.table = Some(parsed);
                }
            }
        }
        self.table.as_ref()
    }

    pub fn get_row_at(&mut self, mjd: f64) -> Result<Row> {
        self.ensure_table().ok_or_else(|| PhysicsError::DataUnavailable("no space weather data loaded".to_string()))?.row_at(mjd)
    }
}

pub struct WeatherManager;

impl WeatherManager {
    pub fn get() -> &'static Mutex<WeatherManagerState> {
        static MANAGER: OnceLock<Mutex<WeatherManagerState>> = OnceLock::new();
        MANAGER.get_or_init(|| Mutex::new(WeatherManagerState::new(ManagerConfig::weather_defaults())))
    }
}

pub fn get_row_at(mjd: f64) -> Result<Row> {
    WeatherManager::get().lock().expect("weather manager poisoned").get_row_at(mjd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
58000 150.0 10.0
58001 152.5 12.0
";

    #[test]
    fn parses_and_looks_up_a_row() {
        let table = CssiSpaceWeather::parse(SAMPLE).unwrap();
        let row = table.row_at(58000.5).unwrap();
        assert_eq!(row.f107_observed, 150.0);
    }

    #[test]
    fn manager_without_data_is_data_unavailable() {
        let mut state = WeatherManagerState::from_parts(None);
        assert!(matches!(state.get_row_at(58000.0), Err(PhysicsError::DataUnavailable(_))));
    }
}
