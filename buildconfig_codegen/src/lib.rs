//! Build-time generator for a Rust module of build configuration values.
//!
//! Given a resolved [`ConfigSnapshot`], the generator writes:
//!
//! 1. `objdir_path!` and `srcdir_path!` templates plus the `TOPOBJDIR` and
//!    `TOPSRCDIR` constants,
//! 2. `windows_rs_path!` and `windows_rs_lib!` when the external directory is
//!    configured,
//! 3. one `pub const` per manifest entry, typed as `bool`, `&str` or
//!    `[&str; N]`.
//!
//! Output depends only on the snapshot, so identical input always yields
//! byte-identical text.

pub mod constants;
pub mod error;
pub mod escape;
pub mod generator;
pub mod macros;
pub mod manifest;
pub mod snapshot;

pub use error::{ManifestError, UnescapeError};
pub use generator::{Generator, generate, render};
pub use manifest::{ConstantKind, ConstantSpec, Manifest};
pub use snapshot::{ConfigSnapshot, ConfigValue, EXTERNAL_DIR_VAR, PathRoots, ValueKind};
