//! Layered settings for `buildconfig-gen`.
//!
//! Layers, lowest precedence first: built-in defaults, the TOML file named by
//! `--config`, `BUILDCONFIG_GEN_*` environment variables, then command-line
//! flags.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Args;
use crate::error::GenError;
use crate::fs::read_file;

/// Prefix of the environment variables read into the settings.
pub const ENV_PREFIX: &str = "BUILDCONFIG_GEN_";

const ENV_KEYS: [&str; 3] = ["snapshot", "output", "force"];

/// Output path meaning "write to stdout".
pub const STDOUT_MARKER: &str = "-";

/// Settings as gathered from every layer, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Snapshot document to read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Utf8PathBuf>,
    /// Output file, or `-` for stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
    /// Rewrite the output even when unchanged.
    #[serde(default)]
    pub force: bool,
}

/// Values set on the command line.
///
/// Unset flags are skipped so they do not mask lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsOverrides {
    /// `--snapshot`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Utf8PathBuf>,
    /// `--output`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
    /// `--force`
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,
}

/// Where the generated module goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    Stdout,
    /// A file, written only when its content changes.
    File(Utf8PathBuf),
}

impl From<Utf8PathBuf> for OutputTarget {
    fn from(path: Utf8PathBuf) -> Self {
        if path.as_str() == STDOUT_MARKER {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

/// Validated settings with every required value present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Snapshot document to read.
    pub snapshot: Utf8PathBuf,
    /// Output destination.
    pub output: OutputTarget,
    /// Rewrite the output even when unchanged.
    pub force: bool,
}

impl Settings {
    /// Builds the layered figment for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] when `--config` names a file that cannot be
    /// read, or [`GenError::Settings`] when that file is not valid TOML.
    pub fn figment(args: &Args) -> Result<Figment, GenError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = &args.config {
            figment = figment.merge(config_file(path)?);
        }
        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
            .merge(Serialized::defaults(args.overrides())))
    }

    /// Gathers the settings for `args` from every layer.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Settings::figment`], or
    /// [`GenError::Settings`] when a layer has a value of the wrong type.
    pub fn load(args: &Args) -> Result<Self, GenError> {
        let settings: Self = Self::figment(args)?.extract()?;
        debug!(?settings, "gathered settings");
        Ok(settings)
    }

    /// Checks that the required settings are present.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingSetting`] naming the first absent setting.
    pub fn resolve(self) -> Result<ResolvedSettings, GenError> {
        let snapshot = self.snapshot.ok_or(GenError::MissingSetting {
            name: "snapshot",
            env: "BUILDCONFIG_GEN_SNAPSHOT",
        })?;
        let output = self.output.ok_or(GenError::MissingSetting {
            name: "output",
            env: "BUILDCONFIG_GEN_OUTPUT",
        })?;
        Ok(ResolvedSettings {
            snapshot,
            output: output.into(),
            force: self.force,
        })
    }
}

fn config_file(path: &Utf8Path) -> Result<Figment, GenError> {
    let data = read_file(path)?;
    toml::from_str::<toml::Value>(&data)
        .map_err(|e| GenError::from(figment::Error::from(format!("{path}: {e}"))))?;
    Ok(Figment::from(Toml::string(&data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rstest::rstest;
    use test_helpers::figment::{figment_error, jail_dir, with_jail};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("buildconfig-gen").chain(args.iter().copied()))
            .unwrap_or_else(|err| panic!("parse args: {err}"))
    }

    #[rstest]
    fn defaults_leave_required_settings_unset() {
        let settings = with_jail(|_| Settings::load(&parse(&[])).map_err(figment_error))
            .unwrap_or_else(|err| panic!("load settings: {err}"));
        assert_eq!(settings, Settings::default());
        assert!(matches!(
            settings.resolve(),
            Err(GenError::MissingSetting { name: "snapshot", .. })
        ));
    }

    #[rstest]
    fn layers_apply_in_precedence_order() {
        let settings = with_jail(|jail| {
            jail.create_file(
                "settings.toml",
                "snapshot = \"from-file.toml\"\noutput = \"from-file.rs\"\n",
            )?;
            jail.set_env("BUILDCONFIG_GEN_OUTPUT", "from-env.rs");
            jail.set_env("BUILDCONFIG_GEN_FORCE", "true");
            let args = parse(&["--config", "settings.toml", "--snapshot", "from-cli.json"]);
            Settings::load(&args).map_err(figment_error)
        })
        .unwrap_or_else(|err| panic!("load settings: {err}"));

        assert_eq!(settings.snapshot.as_deref().map(Utf8Path::as_str), Some("from-cli.json"));
        assert_eq!(settings.output.as_deref().map(Utf8Path::as_str), Some("from-env.rs"));
        assert!(settings.force);
    }

    #[rstest]
    fn unset_force_flag_keeps_lower_layer() {
        let resolved = with_jail(|jail| {
            jail.set_env("BUILDCONFIG_GEN_SNAPSHOT", "snap.toml");
            jail.set_env("BUILDCONFIG_GEN_OUTPUT", "-");
            jail.set_env("BUILDCONFIG_GEN_FORCE", "true");
            Settings::load(&parse(&[]))
                .and_then(Settings::resolve)
                .map_err(figment_error)
        })
        .unwrap_or_else(|err| panic!("resolve settings: {err}"));
        assert_eq!(resolved.output, OutputTarget::Stdout);
        assert!(resolved.force);
    }

    #[rstest]
    fn unrelated_prefixed_variables_are_ignored() {
        let settings = with_jail(|jail| {
            jail.set_env("BUILDCONFIG_GEN_COLOUR", "always");
            Settings::load(&parse(&[])).map_err(figment_error)
        })
        .unwrap_or_else(|err| panic!("load settings: {err}"));
        assert_eq!(settings, Settings::default());
    }

    #[rstest]
    fn missing_config_file_is_an_error() {
        let outcome = with_jail(|jail| {
            let missing = jail_dir(jail)?.join("absent.toml");
            Ok(Settings::load(&parse(&["--config", missing.as_str()])))
        })
        .unwrap_or_else(|err| panic!("run jail: {err}"));
        assert!(matches!(outcome, Err(GenError::Io { .. })));
    }

    #[rstest]
    fn malformed_config_file_is_a_settings_error() {
        let outcome = with_jail(|jail| {
            jail.create_file("settings.toml", "snapshot = ")?;
            Ok(Settings::load(&parse(&["--config", "settings.toml"])))
        })
        .unwrap_or_else(|err| panic!("run jail: {err}"));
        assert!(matches!(outcome, Err(GenError::Settings(_))));
    }

    #[rstest]
    #[case("-", OutputTarget::Stdout)]
    #[case("out/buildconfig.rs", OutputTarget::File(Utf8PathBuf::from("out/buildconfig.rs")))]
    fn output_marker_selects_stdout(#[case] raw: &str, #[case] expected: OutputTarget) {
        assert_eq!(OutputTarget::from(Utf8PathBuf::from(raw)), expected);
    }
}
