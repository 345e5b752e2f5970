//! Whole-collection JSON snapshots.
//!
//! A snapshot file holds one collection serialized as a JSON array in
//! collection order. Writes go to a temporary file in the target directory
//! and are renamed into place, so a crash mid-write leaves the previous
//! snapshot intact.

use crate::error::{AbookError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use uuid::Uuid;

pub fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(AbookError::Io)?;
    }

    let content = serde_json::to_string_pretty(value).map_err(AbookError::Serialization)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("snapshot");
    let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
    // A partial tmp file is removed whichever step failed.
    if let Err(err) = write_then_rename(&tmp_file, path, &content) {
        let _ = fs::remove_file(&tmp_file);
        return Err(AbookError::Io(err));
    }

    tracing::debug!(path = %path.display(), "snapshot written");
    Ok(())
}

fn write_then_rename(tmp_file: &Path, path: &Path, content: &str) -> io::Result<()> {
    fs::write(tmp_file, content)?;
    fs::rename(tmp_file, path)
}

/// Reads a snapshot. A missing file is a first run and yields `T::default()`.
pub fn load<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot, starting empty");
        return Ok(T::default());
    }
    let content = fs::read_to_string(path).map_err(AbookError::Io)?;
    let value = serde_json::from_str(&content).map_err(AbookError::Serialization)?;
    tracing::debug!(path = %path.display(), "snapshot loaded");
    Ok(value)
}
