//! Remote data acquisition for the EOP manager.
//!
//! Grounded in `original_source/.../Frame/Providers/IERS/Manager.cpp`'s
//! `fetchLatestBulletinA_`/`fetchLatestFinals2000A_`: fetch into a
//! temporary file, validate it is non-empty, then move it into place —
//! never overwrite the previous file with a partial download.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PhysicsError, Result};

/// A source of remote EOP data, abstracted so tests can substitute a
/// canned fetcher instead of reaching the network.
pub trait DataFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetch, write to `destination` via a sibling temporary file, then
/// rename into place. Rejects empty responses (`spec.md` §4.E's "a
/// zero-byte download must never replace good data").
pub fn fetch_and_install(fetcher: &dyn DataFetcher, url: &str, destination: &Path) -> Result<()> {
    let bytes = fetcher.fetch(url)?;
    if bytes.is_empty() {
        return Err(PhysicsError::DataUnavailable(format!("empty response fetching {url}")));
    }
    let tmp_path = temp_path_for(destination);
    {
        let mut tmp_file = std::fs::File::create(&tmp_path)?;
        tmp_file.write_all(&bytes)?;
    }
    std::fs::rename(&tmp_path, destination)?;
    Ok(())
}

fn temp_path_for(destination: &Path) -> PathBuf {
    let mut name = destination.file_name().and_then(|n| n.to_str()).unwrap_or("download").to_string();
    name.push_str(".part");
    destination.with_file_name(name)
}

#[cfg(feature = "remote-fetch")]
pub struct ReqwestFetcher;

#[cfg(feature = "remote-fetch")]
impl DataFetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = reqwest::blocking::get(url).map_err(|err| PhysicsError::IoError(err.to_string()))?;
        let bytes = response.bytes().map_err(|err| PhysicsError::IoError(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFetcher(Vec<u8>);
    impl DataFetcher for CannedFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn empty_response_is_rejected() {
        let dir = std::env::temp_dir().join(format!("physics-kernel-fetch-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let destination = dir.join("ser7.dat");
        let fetcher = CannedFetcher(Vec::new());
        let result = fetch_and_install(&fetcher, "http://example.invalid/ser7.dat", &destination);
        assert!(result.is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn non_empty_response_is_installed_atomically() {
        let dir = std::env::temp_dir().join(format!("physics-kernel-fetch-test-ok-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let destination = dir.join("ser7.dat");
        let fetcher = CannedFetcher(b"TAI-UTC = 37.0 17 seconds\n".to_vec());
        fetch_and_install(&fetcher, "http://example.invalid/ser7.dat", &destination).unwrap();
        assert!(destination.exists());
        assert!(!destination.with_file_name("ser7.dat.part").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
