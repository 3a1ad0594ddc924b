//! The data manifest: a small registry mapping a dataset name (`"bulletin-a"`,
//! `"finals2000a"`, `"space-weather-cssi"`) to its candidate remote URLs and
//! the timestamp the manifest itself was last refreshed at.
//!
//! `original_source/` carries no manifest file for this pack, so this
//! module is designed from `spec.md` §4.E's description alone: the EOP and
//! space-weather managers consult it to decide whether their cached file
//! is stale before refetching, exactly as
//! `original_source/.../Frame/Provider/IERS/Manager.cpp`'s
//! `ManifestManager::Get().getLastUpdateTimestampFor(...)` call implies,
//! without this pack's copy of `ManifestManager` itself to port from.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};

use crate::error::{PhysicsError, Result};

#[derive(Debug, Clone)]
struct Entry {
    urls: Vec<String>,
    last_update: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ManifestManager {
    entries: HashMap<String, Entry>,
}

impl ManifestManager {
    pub fn new() -> Self {
        ManifestManager::default()
    }

    pub fn global() -> &'static Mutex<ManifestManager> {
        static MANAGER: OnceLock<Mutex<ManifestManager>> = OnceLock::new();
        MANAGER.get_or_init(|| Mutex::new(ManifestManager::new()))
    }

    pub fn register(&mut self, name: &str, urls: Vec<String>, last_update: DateTime<Utc>) {
        self.entries.insert(name.to_string(), Entry { urls, last_update });
    }

    pub fn get_remote_data_urls(&self, name: &str) -> Result<&[String]> {
        self.entries.get(name).map(|entry| entry.urls.as_slice()).ok_or_else(|| no_such_entry(name))
    }

    pub fn get_last_update_timestamp_for(&self, name: &str) -> Result<DateTime<Utc>> {
        self.entries.get(name).map(|entry| entry.last_update).ok_or_else(|| no_such_entry(name))
    }
}

fn no_such_entry(name: &str) -> PhysicsError {
    PhysicsError::DataUnavailable(format!("manifest has no entry for dataset '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn registers_and_looks_up_an_entry() {
        let mut manifest = ManifestManager::new();
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        manifest.register("bulletin-a", vec!["https://example.invalid/ser7.dat".to_string()], timestamp);
        assert_eq!(manifest.get_remote_data_urls("bulletin-a").unwrap().len(), 1);
        assert_eq!(manifest.get_last_update_timestamp_for("bulletin-a").unwrap(), timestamp);
    }

    #[test]
    fn unknown_dataset_is_data_unavailable() {
        let manifest = ManifestManager::new();
        assert!(manifest.get_remote_data_urls("unknown").is_err());
    }
}
