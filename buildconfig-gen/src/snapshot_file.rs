//! Loads a [`ConfigSnapshot`] from a TOML or JSON document.
//!
//! The document carries the two directory roots and a table of
//! substitutions:
//!
//! ```toml
//! topobjdir = "/build/obj"
//! topsrcdir = "/build/src"
//!
//! [substs]
//! MOZ_APP_NAME = "firefox"
//! NIGHTLY_BUILD = true
//! NSPR_CFLAGS = ["-I/usr/include/nspr4"]
//! ```

use buildconfig_codegen::ConfigSnapshot;
use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Json, Toml};
use tracing::debug;

use crate::error::GenError;
use crate::fs::read_file;

/// Document formats understood for snapshot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `.toml`, or a file without an extension.
    Toml,
    /// `.json`.
    Json,
}

impl SnapshotFormat {
    /// Picks the format from `path`'s extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Utf8Path) -> Result<Self, GenError> {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            None | Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(GenError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_owned(),
            }),
        }
    }
}

/// Reads and parses the snapshot at `path`.
///
/// # Errors
///
/// Returns [`GenError::Io`] when the file cannot be read, or the errors of
/// [`parse_snapshot`].
pub fn load_snapshot(path: &Utf8Path) -> Result<ConfigSnapshot, GenError> {
    let data = read_file(path)?;
    let snapshot = parse_snapshot(path, &data)?;
    debug!(%path, substs = snapshot.iter().count(), "loaded snapshot");
    Ok(snapshot)
}

/// Parses snapshot `data`, choosing the format from `path`.
///
/// # Errors
///
/// Returns [`GenError::UnsupportedFormat`] for an unknown extension and
/// [`GenError::Snapshot`] when the document is malformed or lacks the roots.
pub fn parse_snapshot(path: &Utf8Path, data: &str) -> Result<ConfigSnapshot, GenError> {
    let figment = match SnapshotFormat::from_path(path)? {
        SnapshotFormat::Json => Figment::from(Json::string(data)),
        SnapshotFormat::Toml => {
            // Surface TOML syntax errors with their line and column before
            // figment parses the document again.
            toml::from_str::<toml::Value>(data).map_err(|e| GenError::snapshot(path, e))?;
            Figment::from(Toml::string(data))
        }
    };
    figment
        .extract()
        .map_err(|e| GenError::snapshot(path, e))
}
