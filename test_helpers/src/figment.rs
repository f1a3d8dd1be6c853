//! Helpers for running settings tests inside a `figment::Jail`.
//!
//! A jail gives each test a private working directory and restores any
//! environment variables it sets, which is what the layered settings loader
//! reads from.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Returns the jail's working directory as a UTF-8 path.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the directory is not valid UTF-8.
pub fn jail_dir(jail: &figment::Jail) -> figment::error::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(jail.directory().to_path_buf())
        .map_err(|path| figment::Error::from(format!("jail path is not UTF-8: {}", path.display())))
}

/// Converts any displayable error into a [`figment::Error`] so it can be
/// propagated out of a jail closure with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers own the error and hand it over with map_err"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
