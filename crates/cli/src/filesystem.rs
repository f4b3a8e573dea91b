use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// Read the whole input file into memory.
///
/// # Errors
/// Returns [`AppError::InputNotFound`] if `path` is not an existing regular
/// file, and [`AppError::Read`] if reading it fails.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `contents`.
///
/// # Errors
/// Returns [`AppError::Write`] if the file cannot be created or written.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
