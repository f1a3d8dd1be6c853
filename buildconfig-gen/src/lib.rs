//! Library half of the `buildconfig-gen` command.
//!
//! [`run`] layers the settings, loads the configuration snapshot, renders the
//! module with [`buildconfig_codegen`] and writes it out. The binary only
//! installs logging and parses arguments around it.

pub mod cli;
pub mod error;
mod fs;
pub mod logging;
pub mod output;
pub mod settings;
pub mod snapshot_file;

use buildconfig_codegen::render;
use camino::Utf8PathBuf;

pub use crate::cli::Args;
pub use crate::error::GenError;
use crate::output::WriteOutcome;
use crate::settings::{OutputTarget, Settings};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The module was streamed to stdout.
    Streamed,
    /// The output file was created or rewritten.
    Written(Utf8PathBuf),
    /// The output file already held the module.
    Unchanged(Utf8PathBuf),
    /// `--check` confirmed the output file is current.
    UpToDate(Utf8PathBuf),
}

/// Generates the module as directed by `args` and the lower settings layers.
///
/// # Errors
///
/// Returns a [`GenError`] when settings are missing or malformed, the
/// snapshot cannot be loaded, output cannot be written, or `--check` finds
/// the output stale.
pub fn run(args: &Args) -> Result<RunOutcome, GenError> {
    let settings = Settings::load(args)?.resolve()?;
    if args.mode.should_check && settings.output == OutputTarget::Stdout {
        return Err(GenError::CheckStdout);
    }
    let snapshot = snapshot_file::load_snapshot(&settings.snapshot)?;

    match settings.output {
        OutputTarget::Stdout => {
            output::write_stream(&mut std::io::stdout().lock(), &snapshot)?;
            Ok(RunOutcome::Streamed)
        }
        OutputTarget::File(path) if args.mode.should_check => {
            output::check_up_to_date(&path, &render(&snapshot))?;
            Ok(RunOutcome::UpToDate(path))
        }
        OutputTarget::File(path) => {
            match output::write_if_changed(&path, &render(&snapshot), settings.force)? {
                WriteOutcome::Written => Ok(RunOutcome::Written(path)),
                WriteOutcome::Unchanged => Ok(RunOutcome::Unchanged(path)),
            }
        }
    }
}
