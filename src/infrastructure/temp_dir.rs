// ============================================================
// TEMP DIRECTORY
// ============================================================
// Create and remove working directories under the system temp root

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::domain::error::{Error, Result};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Create a uniquely named directory under the system temp root and
/// return its path.
pub fn create() -> Result<PathBuf> {
    let root = std::env::temp_dir();
    loop {
        let path = root.join(unique_name());
        match fs::create_dir(&path) {
            Ok(()) => return Ok(path),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(Error::Io(format!(
                    "failed to create temp directory {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }
}

/// Remove a directory created by [`create`], recursively.
///
/// The directory is removed only when it exists and resolves to a path
/// under the system temp root; anything else is refused. Returns true
/// on successful removal.
pub fn remove(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    let resolved = match path.canonicalize() {
        Ok(p) => p,
        Err(_) => return false,
    };
    let root = match std::env::temp_dir().canonicalize() {
        Ok(p) => p,
        Err(_) => return false,
    };

    if !resolved.starts_with(&root) || resolved == root {
        warn!(path = %path.display(), "refused to remove path outside temp root");
        return false;
    }

    match fs::remove_dir_all(&resolved) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %resolved.display(), error = %e, "failed to remove temp directory");
            false
        }
    }
}

fn unique_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("kitbag-{}-{}-{}", process::id(), nanos, seq)
}
