//! Environment-variable configuration surface (`spec.md` §6).
//!
//! Every process-wide manager (EOP, space weather) reads its defaults
//! through this module rather than calling `std::env::var` directly, so
//! tests can inject overrides with [`Overrides`] instead of mutating the
//! real process environment — the re-architecture `spec.md` §9 asks for
//! ("avoid hidden global state in tests").

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use crate::eop::manager::Mode;

/// `OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_MODE`
pub const EOP_MODE_VAR: &str = "OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_MODE";
/// `OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_LOCAL_REPOSITORY`
pub const EOP_LOCAL_REPOSITORY_VAR: &str = "OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_LOCAL_REPOSITORY";
/// `OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_LOCAL_REPOSITORY_LOCK_TIMEOUT`
pub const EOP_LOCK_TIMEOUT_VAR: &str =
    "OSTK_PHYSICS_COORDINATE_FRAME_PROVIDER_IERS_MANAGER_LOCAL_REPOSITORY_LOCK_TIMEOUT";
/// `OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_MODE`
pub const WEATHER_MODE_VAR: &str = "OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_MODE";
/// `OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_LOCAL_REPOSITORY`
pub const WEATHER_LOCAL_REPOSITORY_VAR: &str =
    "OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_LOCAL_REPOSITORY";
/// `OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_LOCAL_REPOSITORY_LOCK_TIMEOUT`
pub const WEATHER_LOCK_TIMEOUT_VAR: &str =
    "OSTK_PHYSICS_ENVIRONMENT_ATMOSPHERIC_EARTH_WEATHER_MANAGER_LOCAL_REPOSITORY_LOCK_TIMEOUT";

const DEFAULT_LOCK_TIMEOUT: StdDuration = StdDuration::from_secs(60);

/// Resolved configuration for one of the two data managers (EOP, space
/// weather) — the pair (mode, local repository path, lock timeout) that
/// `spec.md` §6's configuration table names.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    pub mode: Mode,
    pub local_repository: PathBuf,
    pub lock_timeout: StdDuration,
}

impl ManagerConfig {
    /// Read `mode_var`/`repo_var`/`timeout_var` from the process
    /// environment, falling back to `Automatic` mode, a dot-directory
    /// under the user's home (or `.` if unresolvable), and a 60 second
    /// lock timeout.
    pub fn from_env(mode_var: &str, repo_var: &str, timeout_var: &str, default_subdir: &str) -> Self {
        let mode = match std::env::var(mode_var).ok().as_deref() {
            Some("Manual") => Mode::Manual,
            _ => Mode::Automatic,
        };
        let local_repository = std::env::var(repo_var)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_local_repository(default_subdir));
        let lock_timeout = std::env::var(timeout_var)
            .ok()
            .and_then(|text| crate::time::duration::Duration::parse(&text).ok())
            .and_then(|d| StdDuration::try_from_secs_f64(d.in_seconds().abs()).ok())
            .unwrap_or(DEFAULT_LOCK_TIMEOUT);
        ManagerConfig { mode, local_repository, lock_timeout }
    }

    pub fn eop_defaults() -> Self {
        Self::from_env(EOP_MODE_VAR, EOP_LOCAL_REPOSITORY_VAR, EOP_LOCK_TIMEOUT_VAR, "coordinate/frame/provider/iers")
    }

    pub fn weather_defaults() -> Self {
        Self::from_env(
            WEATHER_MODE_VAR,
            WEATHER_LOCAL_REPOSITORY_VAR,
            WEATHER_LOCK_TIMEOUT_VAR,
            "environment/atmospheric/earth/weather",
        )
    }
}

fn default_local_repository(subdir: &str) -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".physics-kernel").join(subdir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_automatic_mode() {
        let config = ManagerConfig::from_env("NONEXISTENT_MODE_VAR", "NONEXISTENT_REPO_VAR", "NONEXISTENT_TIMEOUT_VAR", "x");
        assert_eq!(config.mode, Mode::Automatic);
        assert_eq!(config.lock_timeout, DEFAULT_LOCK_TIMEOUT);
    }
}
