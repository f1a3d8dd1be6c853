//! Error types for `buildconfig-gen`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `buildconfig-gen` pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenError {
    /// A file or directory could not be read or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is malformed or has the wrong shape.
    #[error("failed to parse snapshot '{path}': {source}")]
    Snapshot {
        /// Snapshot file.
        path: Utf8PathBuf,
        /// Syntax or extraction failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The layered settings could not be extracted.
    #[error("failed to gather settings: {0}")]
    Settings(#[source] Box<figment::Error>),

    /// The snapshot file extension names a format that is not understood.
    #[error("unsupported snapshot format '{extension}' for {path}; use .toml or .json")]
    UnsupportedFormat {
        /// Snapshot file.
        path: Utf8PathBuf,
        /// Offending extension.
        extension: String,
    },

    /// A required setting was supplied by no layer.
    #[error("missing setting '{name}'; pass --{name} or set {env}")]
    MissingSetting {
        /// Setting name, matching its long flag.
        name: &'static str,
        /// Environment variable that also supplies it.
        env: &'static str,
    },

    /// `--check` was combined with writing to stdout.
    #[error("--check needs an output file, not stdout")]
    CheckStdout,

    /// `--check` found the output missing or different from the rendered module.
    #[error("{path} is out of date; rerun without --check to regenerate it")]
    Stale {
        /// Output file.
        path: Utf8PathBuf,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn snapshot(
        path: impl Into<Utf8PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Snapshot {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<figment::Error> for GenError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}
