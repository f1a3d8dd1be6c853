//! Capability-based filesystem helpers.

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::GenError;

/// Splits `path` into its parent directory and file name.
///
/// A bare file name resolves against the current directory.
pub fn split_file_path(path: &Utf8Path) -> Result<(Utf8PathBuf, &str), GenError> {
    let name = path.file_name().ok_or_else(|| {
        GenError::io(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "path does not name a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir.to_path_buf(),
        _ => Utf8PathBuf::from("."),
    };
    Ok((parent, name))
}

/// Opens a directory, creating it and its ancestors when missing.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, GenError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| GenError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| GenError::io(path, io_err))
        }
        Err(open_err) => Err(GenError::io(path, open_err)),
    }
}

/// Opens a directory if it exists, returning `None` when the path is missing.
pub fn open_optional_dir(path: &Utf8Path) -> Result<Option<Dir>, GenError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GenError::io(path, err)),
    }
}

/// Reads `name` from `dir`, returning `None` when the file is missing.
pub fn read_optional(dir: &Dir, name: &str, path: &Utf8Path) -> Result<Option<String>, GenError> {
    match dir.read_to_string(name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(GenError::io(path, err)),
    }
}

/// Reads a UTF-8 file that must exist.
pub fn read_file(path: &Utf8Path) -> Result<String, GenError> {
    let (parent, name) = split_file_path(path)?;
    let dir = Dir::open_ambient_dir(&parent, ambient_authority())
        .map_err(|err| GenError::io(&parent, err))?;
    dir.read_to_string(name).map_err(|err| GenError::io(path, err))
}
