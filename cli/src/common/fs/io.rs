//! # Supportbot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the session store and the config
//! commands. Every error carries the path it concerns.
//!
//! - **`ensure_dir_exists`**: creates a directory (and parents) unless it is
//!   already there; fails if the path exists as something else.
//! - **`read_optional_to_string`**: reads a file, mapping "not found" to `None`
//!   so callers can treat a missing file as an ordinary condition.
//! - **`write_string_to_file`**: writes a file, creating its parent directory
//!   first and overwriting any previous content.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! match io::read_optional_to_string(Path::new("chat_history.json"))? {
//!     Some(json) => println!("{} bytes of history", json.len()),
//!     None => println!("No history found."),
//! }
//! io::write_string_to_file(Path::new("out/chat_history.json"), "[]")?;
//! ```
//!
use crate::core::error::{Result, SupportError};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if the
/// directory cannot be created.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(SupportError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads a whole file into a string, returning `Ok(None)` when it does not exist.
///
/// Any other I/O failure (permissions, invalid UTF-8, path is a directory) is an error.
pub fn read_optional_to_string(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // A bare file name has an empty parent, meaning the current directory.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("history/archive");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&new_dir)?;
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("chat_history.json");
        fs::write(&file_path, "[]")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_write_creates_parent_and_reads_back() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/chat_history.json");
        write_string_to_file(&file_path, "[]")?;
        assert_eq!(read_optional_to_string(&file_path)?, Some("[]".to_string()));

        // Overwrites rather than appends.
        write_string_to_file(&file_path, "[ ]")?;
        assert_eq!(read_optional_to_string(&file_path)?, Some("[ ]".to_string()));
        Ok(())
    }

    #[test]
    fn test_read_optional_missing_file_is_none() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nonexistent.json");
        assert_eq!(read_optional_to_string(&file_path)?, None);
        Ok(())
    }

    #[test]
    fn test_read_optional_directory_is_error() -> Result<()> {
        let base_dir = tempdir()?;
        assert!(read_optional_to_string(base_dir.path()).is_err());
        Ok(())
    }
}
