//! Shared persistence helpers for durable JSON values.
//!
//! The history log and the theme preference follow one contract: a read
//! that fails for any reason (missing file, unreadable file, malformed
//! contents) degrades to the type's default value, and a write replaces
//! the stored value atomically under an exclusive lock.

use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a JSON value from a file with shared locking.
///
/// Corrupt or foreign-format contents must never crash the consumer, so
/// every failure path logs a warning and returns `T::default()`.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        tracing::debug!("No file at {:?}, using default", path);
        return T::default();
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {:?}: {}. Using default.", path, e);
            return T::default();
        }
    };

    // Acquire shared lock for reading
    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {:?}: {}. Using default.", path, e);
        return T::default();
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {:?}: {}. Using default.", path, e);
        return T::default();
    }

    let _ = file.unlock();

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}. Using default.", path, e);
            T::default()
        }
    }
}

/// Save a JSON value to a file with exclusive locking.
///
/// Atomically replaces the previous value by:
/// 1. Writing to a temp file in the same directory
/// 2. Syncing to disk
/// 3. Renaming over the original
pub fn save_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "storage path missing parent")
    })?)?;

    // Exclusive lock on the temp file serializes concurrent writers
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    // Atomically replace the old value
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved value to {:?}", path);
    Ok(())
}
