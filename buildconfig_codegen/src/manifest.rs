//! The fixed list of constants written into the generated module.

use std::collections::HashSet;

use crate::constants::{emit_bool, emit_string, emit_string_array};
use crate::error::ManifestError;
use crate::macros::ROOT_CONSTANTS;
use crate::snapshot::ConfigSnapshot;

/// Declared type of a generated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKind {
    /// `bool`
    Bool,
    /// `&str`
    String,
    /// `[&str; N]`
    StringArray,
}

/// A named constant and its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstantSpec {
    /// Configuration variable, also used as the constant name.
    pub name: &'static str,
    /// Declared type.
    pub kind: ConstantKind,
}

impl ConstantSpec {
    /// Declares a boolean constant.
    #[must_use]
    pub const fn bool(name: &'static str) -> Self {
        Self {
            name,
            kind: ConstantKind::Bool,
        }
    }

    /// Declares a string constant.
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ConstantKind::String,
        }
    }

    /// Declares a string array constant.
    #[must_use]
    pub const fn string_array(name: &'static str) -> Self {
        Self {
            name,
            kind: ConstantKind::StringArray,
        }
    }

    /// Renders this constant's declaration from `snapshot`.
    #[must_use]
    pub fn render(&self, snapshot: &ConfigSnapshot) -> String {
        match self.kind {
            ConstantKind::Bool => emit_bool(snapshot, self.name),
            ConstantKind::String => emit_string(snapshot, self.name),
            ConstantKind::StringArray => emit_string_array(snapshot, self.name),
        }
    }
}

/// Constants exported by default, in emission order.
pub const DEFAULT_CONSTANTS: &[ConstantSpec] = &[
    ConstantSpec::string("MOZ_MACBUNDLE_ID"),
    ConstantSpec::string("MOZ_APP_BASENAME"),
    ConstantSpec::string("MOZ_APP_NAME"),
    ConstantSpec::string("MOZ_APP_VENDOR"),
    ConstantSpec::bool("MOZ_FOLD_LIBS"),
    ConstantSpec::bool("NIGHTLY_BUILD"),
    ConstantSpec::bool("RELEASE_OR_BETA"),
    ConstantSpec::bool("EARLY_BETA_OR_EARLIER"),
    ConstantSpec::bool("MOZ_DEV_EDITION"),
    ConstantSpec::bool("MOZ_ESR"),
    ConstantSpec::bool("MOZ_DIAGNOSTIC_ASSERT_ENABLED"),
    // Used by the crash reporter client.
    ConstantSpec::bool("MOZ_CRASHREPORTER_MOCK"),
    ConstantSpec::string_array("BINDGEN_SYSTEM_FLAGS"),
    ConstantSpec::string_array("MOZ_GTK3_CFLAGS"),
    ConstantSpec::string_array("MOZ_GTK3_LIBS"),
    ConstantSpec::string_array("NSPR_CFLAGS"),
    ConstantSpec::string_array("NSS_CFLAGS"),
    ConstantSpec::string_array("MOZ_PIXMAN_CFLAGS"),
    ConstantSpec::string_array("MOZ_ICU_CFLAGS"),
];

/// An ordered, validated list of constants.
///
/// Names are valid Rust identifiers, unique, and distinct from the root
/// constants emitted with the mandatory templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ConstantSpec>,
}

impl Manifest {
    /// Validates `entries` and builds a manifest preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidName`] when a name is not a Rust
    /// identifier, or [`ManifestError::Duplicate`] when a name repeats or
    /// collides with a root constant.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildconfig_codegen::manifest::{ConstantSpec, Manifest};
    /// use buildconfig_codegen::ManifestError;
    ///
    /// let ok = Manifest::new(vec![ConstantSpec::bool("A"), ConstantSpec::string("B")]);
    /// assert!(ok.is_ok());
    ///
    /// let clash = Manifest::new(vec![ConstantSpec::bool("A"), ConstantSpec::string("A")]);
    /// assert_eq!(clash, Err(ManifestError::Duplicate { name: "A".to_owned() }));
    /// ```
    pub fn new(entries: Vec<ConstantSpec>) -> Result<Self, ManifestError> {
        let mut seen: HashSet<&str> = ROOT_CONSTANTS.into_iter().collect();
        for spec in &entries {
            if !is_identifier(spec.name) {
                return Err(ManifestError::InvalidName {
                    name: spec.name.to_owned(),
                });
            }
            if !seen.insert(spec.name) {
                return Err(ManifestError::Duplicate {
                    name: spec.name.to_owned(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Entries in emission order.
    #[must_use]
    pub fn entries(&self) -> &[ConstantSpec] {
        &self.entries
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CONSTANTS.to_vec(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && name != "_"
        && !KEYWORDS.contains(&name)
}

/// Strict and reserved keywords of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_constants_pass_validation() {
        let validated =
            Manifest::new(DEFAULT_CONSTANTS.to_vec()).expect("default manifest is valid");
        assert_eq!(validated, Manifest::default());
    }

    #[rstest]
    fn default_manifest_keeps_declared_order() {
        let names: Vec<&str> = Manifest::default()
            .entries()
            .iter()
            .map(|spec| spec.name)
            .collect();
        assert_eq!(names.first().copied(), Some("MOZ_MACBUNDLE_ID"));
        assert_eq!(names.last().copied(), Some("MOZ_ICU_CFLAGS"));
        assert_eq!(names.len(), 19);
    }

    #[rstest]
    #[case("9LIVES")]
    #[case("WITH-DASH")]
    #[case("")]
    #[case("_")]
    #[case("SPACE NAME")]
    #[case("fn")]
    #[case("Self")]
    #[case("crate")]
    #[case("type")]
    #[case("gen")]
    fn invalid_names_are_rejected(#[case] name: &'static str) {
        assert_eq!(
            Manifest::new(vec![ConstantSpec::bool(name)]),
            Err(ManifestError::InvalidName {
                name: name.to_owned()
            })
        );
    }

    #[rstest]
    #[case("FN", true)]
    #[case("self_test", true)]
    #[case("r#type", false)]
    fn keywords_match_exactly(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_identifier(name), expected);
    }

    #[rstest]
    #[case("TOPOBJDIR")]
    #[case("TOPSRCDIR")]
    fn root_constant_names_are_reserved(#[case] name: &'static str) {
        assert_eq!(
            Manifest::new(vec![ConstantSpec::string(name)]),
            Err(ManifestError::Duplicate {
                name: name.to_owned()
            })
        );
    }

    #[rstest]
    fn render_dispatches_on_kind() {
        let snapshot = ConfigSnapshot::new("/obj", "/src").with("A", true);
        assert_eq!(
            ConstantSpec::bool("A").render(&snapshot),
            "pub const A: bool = true;\n"
        );
        assert_eq!(
            ConstantSpec::string("A").render(&snapshot),
            "pub const A: &str = \"\";\n"
        );
    }
}
