//! Command-line interface definitions for `buildconfig-gen`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser};

use crate::settings::SettingsOverrides;

/// Parsed CLI arguments for `buildconfig-gen`.
#[derive(Debug, Parser)]
#[command(name = "buildconfig-gen")]
#[command(about = "Generate the build configuration module from a configuration snapshot")]
#[command(version)]
pub struct Args {
    /// TOML settings file layered beneath the environment and flags.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Snapshot document (`.toml` or `.json`).
    #[arg(long, value_name = "path")]
    pub snapshot: Option<Utf8PathBuf>,
    /// Output file, or `-` for stdout.
    #[arg(long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
    /// Write and check behaviour flags.
    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Write and check behaviour flags.
#[derive(Debug, ClapArgs, Clone, Copy, Default)]
pub struct ModeArgs {
    /// Rewrite the output even when its content is unchanged.
    #[arg(long = "force", conflicts_with = "should_check")]
    pub should_force: bool,
    /// Fail instead of writing when the output is out of date.
    #[arg(long = "check")]
    pub should_check: bool,
}

impl Args {
    /// The settings supplied on the command line, for the top settings layer.
    #[must_use]
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            snapshot: self.snapshot.clone(),
            output: self.output.clone(),
            force: self.mode.should_force,
        }
    }
}
