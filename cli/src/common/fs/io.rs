//! # Classes Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module centralizes the file reads the application performs: the quotes
//! file and the TOML configuration files. It wraps `std::fs::read_to_string`
//! so that every failure surfaces as a `ClassesError` the user can act on:
//!
//! - A missing path becomes `ClassesError::FileNotFound`.
//! - Any other I/O failure (permissions, a directory in place of a file,
//!   invalid UTF-8) becomes `ClassesError::FileUnreadable`, keeping the
//!   underlying `std::io::Error` as its source.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::common::fs::io;
//!
//! let contents = io::read_file_to_string(Path::new("quotes.txt"))?;
//! ```
//!
use crate::core::error::{ClassesError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a UTF-8 file into a string.
///
/// # Errors
///
/// Returns `ClassesError::FileNotFound` if nothing exists at `path`, and
/// `ClassesError::FileUnreadable` if the file exists but cannot be read as text.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("Read {} bytes from {:?}", content.len(), path);
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ClassesError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into()),
        Err(source) => Err(ClassesError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_existing_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("quotes.txt");
        fs::write(&file_path, "Make it so|Picard\n")?;

        assert_eq!(read_file_to_string(&file_path)?, "Make it so|Picard\n");
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nonexistent.txt");

        let err = read_file_to_string(&file_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClassesError>(),
            Some(ClassesError::FileNotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_read_directory_is_unreadable() -> Result<()> {
        let base_dir = tempdir()?;

        let err = read_file_to_string(base_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClassesError>(),
            Some(ClassesError::FileUnreadable { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_read_invalid_utf8_is_unreadable() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("binary.txt");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x7c])?;

        let err = read_file_to_string(&file_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClassesError>(),
            Some(ClassesError::FileUnreadable { .. })
        ));
        Ok(())
    }
}
