//! Resolved build configuration supplied to the generator.

use std::collections::BTreeMap;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Variable naming the optional external directory that gates the
/// conditional macro pair.
pub const EXTERNAL_DIR_VAR: &str = "MOZ_WINDOWS_RS_DIR";

/// A single resolved configuration value.
///
/// Deserializes untagged, so `true`, `"text"` and `["a", "b"]` map onto the
/// three variants directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean flag.
    Bool(bool),
    /// Scalar string.
    Str(String),
    /// Ordered list of strings.
    StrList(Vec<String>),
}

/// Discriminant of a [`ConfigValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// [`ConfigValue::Bool`].
    Bool,
    /// [`ConfigValue::Str`].
    Str,
    /// [`ConfigValue::StrList`].
    StrList,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Str => "string",
            Self::StrList => "string list",
        })
    }
}

impl ConfigValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Str(_) => ValueKind::Str,
            Self::StrList(_) => ValueKind::StrList,
        }
    }

    /// Interprets the value as a flag.
    ///
    /// Configuration systems frequently encode flags as `"1"`, so non-empty
    /// strings and lists count as set.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildconfig_codegen::ConfigValue;
    ///
    /// assert!(ConfigValue::from("1").is_truthy());
    /// assert!(!ConfigValue::from("").is_truthy());
    /// assert!(!ConfigValue::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(flag) => *flag,
            Self::Str(text) => !text.is_empty(),
            Self::StrList(items) => !items.is_empty(),
        }
    }

    /// Returns the scalar string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StrList(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(value: Vec<String>) -> Self {
        Self::StrList(value)
    }
}

impl From<&[&str]> for ConfigValue {
    fn from(value: &[&str]) -> Self {
        Self::StrList(value.iter().map(|item| (*item).to_owned()).collect())
    }
}

/// Read-only view of the resolved build configuration.
///
/// The two directory roots are always present; every other variable lives in
/// `substs` and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    topobjdir: Utf8PathBuf,
    topsrcdir: Utf8PathBuf,
    #[serde(default)]
    substs: BTreeMap<String, ConfigValue>,
}

impl ConfigSnapshot {
    /// Creates a snapshot with the given roots and no variables.
    #[must_use]
    pub fn new(topobjdir: impl Into<Utf8PathBuf>, topsrcdir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            topobjdir: topobjdir.into(),
            topsrcdir: topsrcdir.into(),
            substs: BTreeMap::new(),
        }
    }

    /// Returns the snapshot with `name` set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildconfig_codegen::{ConfigSnapshot, ConfigValue};
    ///
    /// let snapshot = ConfigSnapshot::new("/obj", "/src").with("MOZ_APP_NAME", "Demo App");
    /// assert_eq!(snapshot.get("MOZ_APP_NAME"), Some(&ConfigValue::from("Demo App")));
    /// ```
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.substs.insert(name.into(), value.into());
        self
    }

    /// Object directory root.
    #[must_use]
    pub fn topobjdir(&self) -> &Utf8Path {
        &self.topobjdir
    }

    /// Source directory root.
    #[must_use]
    pub fn topsrcdir(&self) -> &Utf8Path {
        &self.topsrcdir
    }

    /// Looks up a variable. Absence is not an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.substs.get(name)
    }

    /// Iterates over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.substs.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Resolves the directory roots that macro templates bind to.
    #[must_use]
    pub fn path_roots(&self) -> PathRoots<'_> {
        let external = match self.get(EXTERNAL_DIR_VAR) {
            Some(ConfigValue::Str(dir)) if !dir.is_empty() => Some(Utf8Path::new(dir.as_str())),
            Some(ConfigValue::Str(_)) | None => None,
            Some(other) => {
                debug!(
                    variable = EXTERNAL_DIR_VAR,
                    kind = %other.kind(),
                    "ignoring external directory that is not a string"
                );
                None
            }
        };
        PathRoots {
            objdir: &self.topobjdir,
            srcdir: &self.topsrcdir,
            external,
        }
    }
}

/// Directory roots bound into the generated path macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRoots<'a> {
    /// Object directory root.
    pub objdir: &'a Utf8Path,
    /// Source directory root.
    pub srcdir: &'a Utf8Path,
    /// External directory; `Some` only when configured and non-empty.
    pub external: Option<&'a Utf8Path>,
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ConfigValue::Bool(true), true)]
    #[case(ConfigValue::Bool(false), false)]
    #[case(ConfigValue::from("1"), true)]
    #[case(ConfigValue::from(""), false)]
    #[case(ConfigValue::from(vec!["x".to_owned()]), true)]
    #[case(ConfigValue::StrList(vec![]), false)]
    fn truthiness_follows_value_contents(#[case] value: ConfigValue, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn external_root_is_absent_by_default() {
        let snapshot = ConfigSnapshot::new("/obj", "/src");
        let roots = snapshot.path_roots();
        assert_eq!(roots.objdir.as_str(), "/obj");
        assert_eq!(roots.srcdir.as_str(), "/src");
        assert_eq!(roots.external, None);
    }

    #[rstest]
    #[case(ConfigValue::from(""))]
    #[case(ConfigValue::Bool(true))]
    #[case(ConfigValue::from(vec!["/ext".to_owned()]))]
    fn external_root_requires_non_empty_string(#[case] value: ConfigValue) {
        let snapshot = ConfigSnapshot::new("/obj", "/src").with(EXTERNAL_DIR_VAR, value);
        assert_eq!(snapshot.path_roots().external, None);
    }

    #[rstest]
    fn external_root_is_taken_from_snapshot() {
        let snapshot =
            ConfigSnapshot::new("/obj", "/src").with(EXTERNAL_DIR_VAR, "/vendor/windows");
        assert_eq!(
            snapshot.path_roots().external,
            Some(Utf8Path::new("/vendor/windows"))
        );
    }

    #[rstest]
    fn values_deserialize_untagged() {
        let snapshot: ConfigSnapshot = serde_json::from_str(
            r#"{
                "topobjdir": "/obj",
                "topsrcdir": "/src",
                "substs": {
                    "NIGHTLY_BUILD": true,
                    "MOZ_APP_NAME": "firefox",
                    "NSPR_CFLAGS": ["-I/nspr", "-DX"]
                }
            }"#,
        )
        .expect("snapshot parses");

        assert_eq!(snapshot.get("NIGHTLY_BUILD"), Some(&ConfigValue::Bool(true)));
        assert_eq!(
            snapshot.get("MOZ_APP_NAME").and_then(ConfigValue::as_str),
            Some("firefox")
        );
        assert_eq!(
            snapshot.get("NSPR_CFLAGS").and_then(ConfigValue::as_list),
            Some(&["-I/nspr".to_owned(), "-DX".to_owned()][..])
        );
    }

    #[rstest]
    fn substs_default_to_empty() {
        let snapshot: ConfigSnapshot =
            serde_json::from_str(r#"{ "topobjdir": "/obj", "topsrcdir": "/src" }"#)
                .expect("snapshot parses");
        assert_eq!(snapshot.iter().count(), 0);
    }
}
