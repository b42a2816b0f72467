//! Whole-file read/write primitives
//!
//! Reads and writes are plain whole-file operations. Saves always overwrite
//! the target with no existence check and no atomic rename; a crash mid-write
//! can leave a corrupt file, which the tool accepts.

use std::fs;
use std::path::Path;

use crate::error::{SpendlogError, SpendlogResult};

/// Read an entire file as text
///
/// Fails with `FileNotFound` when the path does not exist.
pub fn read_text<P: AsRef<Path>>(path: P) -> SpendlogResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SpendlogError::file_not_found(path));
    }

    fs::read_to_string(path)
        .map_err(|e| SpendlogError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Overwrite the target file with the given text
pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> SpendlogResult<()> {
    let path = path.as_ref();

    fs::write(path, text)
        .map_err(|e| SpendlogError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
