//! Single-slot, file-backed seed persistence.
//!
//! The store holds at most one seed. Writes go to a temporary file in the
//! same directory and are renamed into place, so a concurrent reader sees
//! either the previous seed or the new one, never a torn write. A mutex
//! serializes writers; readers take a stable snapshot via the rename.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ProvisionError;
use crate::seed::SeedHex;

/// File-backed single-slot seed store.
///
/// The persisted artifact is a text file holding exactly the 64-character
/// hex seed followed by a newline, readable by any collaborator that needs
/// the raw secret.
pub struct SeedStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SeedStore {
    /// Create a store backed by `path`. No I/O happens until `put`/`get`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a seed, replacing any previous one atomically.
    ///
    /// # Errors
    /// Returns [`ProvisionError::Storage`] on any filesystem failure.
    pub fn put(&self, seed: &SeedHex) -> Result<(), ProvisionError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(seed.as_str().as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), "seed persisted");
        Ok(())
    }

    /// Read the stored seed, if any.
    ///
    /// # Errors
    /// Returns `Ok(None)` when nothing has been provisioned,
    /// [`ProvisionError::StoreCorrupted`] when the file exists but does not
    /// hold a valid seed, and [`ProvisionError::Storage`] on I/O failure.
    pub fn get(&self) -> Result<Option<SeedHex>, ProvisionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProvisionError::Storage(e)),
        };
        SeedHex::parse(&raw)
            .map(Some)
            .map_err(|_| ProvisionError::StoreCorrupted)
    }
}

impl std::fmt::Debug for SeedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedStore").field("path", &self.path).finish()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
