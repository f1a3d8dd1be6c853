//! Output writers for `buildconfig-gen`.

use std::io::Write;

use buildconfig_codegen::{ConfigSnapshot, generate};
use camino::Utf8Path;
use cap_std::fs_utf8::OpenOptions;
use tracing::{debug, info};

use crate::error::GenError;
use crate::fs::{ensure_dir, open_optional_dir, read_optional, split_file_path};
use crate::settings::STDOUT_MARKER;

/// Result of writing the module to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or rewritten.
    Written,
    /// The file already held the module and was left untouched.
    Unchanged,
}

/// Writes `contents` to `path` unless the file already holds exactly that.
///
/// Parent directories are created as needed. With `force` the file is
/// rewritten regardless.
///
/// # Errors
///
/// Returns [`GenError::Io`] when a directory or the file cannot be accessed.
pub fn write_if_changed(
    path: &Utf8Path,
    contents: &str,
    force: bool,
) -> Result<WriteOutcome, GenError> {
    let (parent, name) = split_file_path(path)?;
    let dir = ensure_dir(&parent)?;
    if !force && read_optional(&dir, name, path)?.as_deref() == Some(contents) {
        debug!(%path, "output unchanged; leaving file untouched");
        return Ok(WriteOutcome::Unchanged);
    }

    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| GenError::io(path, io_err))?;
    file.write_all(contents.as_bytes())
        .map_err(|io_err| GenError::io(path, io_err))?;
    info!(%path, bytes = contents.len(), "wrote build configuration module");
    Ok(WriteOutcome::Written)
}

/// Confirms that `path` already holds `contents`.
///
/// # Errors
///
/// Returns [`GenError::Stale`] when the file is missing or differs, and
/// [`GenError::Io`] when it cannot be read.
pub fn check_up_to_date(path: &Utf8Path, contents: &str) -> Result<(), GenError> {
    let (parent, name) = split_file_path(path)?;
    let existing = match open_optional_dir(&parent)? {
        Some(dir) => read_optional(&dir, name, path)?,
        None => None,
    };
    if existing.as_deref() == Some(contents) {
        debug!(%path, "output is up to date");
        Ok(())
    } else {
        Err(GenError::Stale {
            path: path.to_path_buf(),
        })
    }
}

/// Streams the module for `snapshot` to `sink` and flushes it.
///
/// # Errors
///
/// Returns [`GenError::Io`], labelled with the stdout marker, when the sink
/// rejects a write.
pub fn write_stream<W: Write + ?Sized>(
    sink: &mut W,
    snapshot: &ConfigSnapshot,
) -> Result<(), GenError> {
    generate(snapshot, sink)
        .and_then(|()| sink.flush())
        .map_err(|io_err| GenError::io(STDOUT_MARKER, io_err))
}
