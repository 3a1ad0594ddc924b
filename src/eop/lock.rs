//! Cross-process advisory locking for a manager's local repository.
//!
//! Grounded in `original_source/.../Frame/Providers/IERS/Manager.cpp`'s
//! `lockLocalRepository_`/`unlockLocalRepository_`: a sentinel `.lock`
//! file under the repository directory, created with `create_new` so two
//! processes racing to create it only let one through, polled roughly
//! once a second until it disappears or a configurable timeout elapses.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PhysicsError, Result};

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A held advisory lock; removes its sentinel file on drop.
pub struct RepositoryLock {
    sentinel: PathBuf,
}

impl RepositoryLock {
    /// Block until `repository`'s `.lock` sentinel can be created, or
    /// return [`PhysicsError::Timeout`] after `timeout` elapses.
    pub fn acquire(repository: &Path, timeout: Duration) -> Result<RepositoryLock> {
        fs::create_dir_all(repository)?;
        let sentinel = repository.join(".lock");
        let start = Instant::now();
        loop {
            match fs::OpenOptions::new().create_new(true).write(true).open(&sentinel) {
                Ok(_) => return Ok(RepositoryLock { sentinel }),
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    if start.elapsed() >= timeout {
                        return Err(PhysicsError::Timeout(timeout));
                    }
                    std::thread::sleep(POLL_INTERVAL.min(timeout.saturating_sub(start.elapsed()).max(Duration::from_millis(1))));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Drop for RepositoryLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.sentinel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release_round_trips() {
        let dir = std::env::temp_dir().join(format!("physics-kernel-lock-test-{}", std::process::id()));
        {
            let _lock = RepositoryLock::acquire(&dir, Duration::from_secs(1)).unwrap();
            assert!(dir.join(".lock").exists());
        }
        assert!(!dir.join(".lock").exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_acquirer_times_out_while_first_holds_it() {
        let dir = std::env::temp_dir().join(format!("physics-kernel-lock-test-contended-{}", std::process::id()));
        let _held = RepositoryLock::acquire(&dir, Duration::from_secs(1)).unwrap();
        let result = RepositoryLock::acquire(&dir, Duration::from_millis(1100));
        assert!(matches!(result, Err(PhysicsError::Timeout(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
