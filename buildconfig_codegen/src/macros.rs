//! `macro_rules!` templates bound to the build's directory roots.
//!
//! A template only records its root. Consumers expand it later with their own
//! literal path fragment, for example `include!(objdir_path!("dist/foo.rs"))`,
//! and the concatenation happens in `concat!` at that call site.

use std::fmt;

use camino::Utf8Path;
use tracing::debug;

use crate::escape::quote;
use crate::snapshot::PathRoots;

/// Body of a generated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateBody<'a> {
    /// `($path:literal)` expands to `concat!("<root>/", $path)`.
    PathConcat {
        /// Directory the fragment is appended to.
        root: &'a Utf8Path,
    },
    /// `()` expands to a `#[path]` module declaration and a glob re-export.
    ReExport {
        /// File whose public items are re-exported.
        file: String,
    },
}

/// A single `#[macro_export]` template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroTemplate<'a> {
    /// Macro name as invoked by consumers.
    pub name: &'static str,
    /// One-line doc comment.
    pub doc: &'static str,
    /// Expansion.
    pub body: TemplateBody<'a>,
}

impl<'a> MacroTemplate<'a> {
    const fn path_concat(name: &'static str, doc: &'static str, root: &'a Utf8Path) -> Self {
        Self {
            name,
            doc,
            body: TemplateBody::PathConcat { root },
        }
    }
}

impl fmt::Display for MacroTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/// {}", self.doc)?;
        writeln!(f, "#[macro_export]")?;
        writeln!(f, "macro_rules! {} {{", self.name)?;
        match &self.body {
            TemplateBody::PathConcat { root } => {
                writeln!(f, "    ($path:literal) => {{")?;
                writeln!(f, "        concat!({}, $path)", quote(&format!("{root}/")))?;
            }
            TemplateBody::ReExport { file } => {
                writeln!(f, "    () => {{")?;
                writeln!(f, "        #[path = {}]", quote(file))?;
                writeln!(f, "        mod lib;")?;
                writeln!(f, "        pub use lib::*;")?;
            }
        }
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

/// Names of the root constants emitted alongside the mandatory templates.
pub const ROOT_CONSTANTS: [&str; 2] = ["TOPOBJDIR", "TOPSRCDIR"];

/// The objdir and srcdir templates, always present.
#[must_use]
pub const fn mandatory_templates<'a>(roots: &PathRoots<'a>) -> [MacroTemplate<'a>; 2] {
    [
        MacroTemplate::path_concat(
            "objdir_path",
            "Macro used to name a path in the objdir for use with macros like `include!`",
            roots.objdir,
        ),
        MacroTemplate::path_concat(
            "srcdir_path",
            "Macro used to name a path in the srcdir for use with macros like `include!`",
            roots.srcdir,
        ),
    ]
}

/// The external-directory templates, present only when the external root is.
#[must_use]
pub fn conditional_templates<'a>(roots: &PathRoots<'a>) -> Option<[MacroTemplate<'a>; 2]> {
    let dir = roots.external?;
    Some([
        MacroTemplate::path_concat(
            "windows_rs_path",
            concat!(
                "Macro used to name a path in the windows-rs directory ",
                "for use with macros like `include!`"
            ),
            dir,
        ),
        MacroTemplate {
            name: "windows_rs_lib",
            doc: "Macro used to re-export windows-rs's public items",
            body: TemplateBody::ReExport {
                file: format!("{dir}/src/lib.rs"),
            },
        },
    ])
}

/// Renders the mandatory block: both root templates followed by the
/// `TOPOBJDIR` and `TOPSRCDIR` constants.
#[must_use]
pub fn emit_mandatory(roots: &PathRoots<'_>) -> String {
    let [objdir_template, srcdir_template] = mandatory_templates(roots);
    let [objdir_const, srcdir_const] = ROOT_CONSTANTS;
    format!(
        "\n{objdir_template}\n{srcdir_template}\n\
         /// The objdir path for use in build scripts\n\
         pub const {objdir_const}: &str = {};\n\
         /// The srcdir path for use in build scripts\n\
         pub const {srcdir_const}: &str = {};\n\n",
        quote(roots.objdir.as_str()),
        quote(roots.srcdir.as_str()),
    )
}

/// Renders the conditional block, or `None` when the external root is absent.
#[must_use]
pub fn emit_conditional(roots: &PathRoots<'_>) -> Option<String> {
    let Some(templates) = conditional_templates(roots) else {
        debug!("external directory not configured; skipping conditional templates");
        return None;
    };
    debug!(dir = ?roots.external, "emitting conditional templates");
    let rendered: Vec<String> = templates.iter().map(ToString::to_string).collect();
    Some(format!("\n{}", rendered.join("\n")))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]
mod tests {
    use super::*;
    use crate::snapshot::{ConfigSnapshot, EXTERNAL_DIR_VAR};
    use rstest::rstest;

    #[rstest]
    fn mandatory_block_binds_both_roots() {
        let snapshot = ConfigSnapshot::new("/build/obj", "/build/src");
        let block = emit_mandatory(&snapshot.path_roots());

        assert!(block.starts_with("\n/// Macro used to name a path in the objdir"));
        assert!(block.contains(
            "macro_rules! objdir_path {\n    ($path:literal) => {\n        \
             concat!(\"/build/obj/\", $path)\n    }\n}\n"
        ));
        assert!(block.contains(
            "macro_rules! srcdir_path {\n    ($path:literal) => {\n        \
             concat!(\"/build/src/\", $path)\n    }\n}\n"
        ));
        assert!(block.ends_with(
            "pub const TOPOBJDIR: &str = \"/build/obj\";\n\
             /// The srcdir path for use in build scripts\n\
             pub const TOPSRCDIR: &str = \"/build/src\";\n\n"
        ));
    }

    #[rstest]
    fn roots_are_escaped() {
        let snapshot = ConfigSnapshot::new("C:\\obj dir", "/src");
        let block = emit_mandatory(&snapshot.path_roots());
        assert!(block.contains("concat!(\"C\\u{3a}\\\\obj dir/\", $path)"));
        assert!(block.contains("pub const TOPOBJDIR: &str = \"C\\u{3a}\\\\obj dir\";"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn conditional_block_absent_without_external_dir(#[case] dir: Option<&str>) {
        let base = ConfigSnapshot::new("/obj", "/src");
        let snapshot = match dir {
            Some(value) => base.with(EXTERNAL_DIR_VAR, value),
            None => base,
        };
        assert_eq!(conditional_templates(&snapshot.path_roots()), None);
        assert_eq!(emit_conditional(&snapshot.path_roots()), None);
    }

    #[rstest]
    fn conditional_block_binds_external_dir() {
        let snapshot =
            ConfigSnapshot::new("/obj", "/src").with(EXTERNAL_DIR_VAR, "/third_party/windows");
        let block = emit_conditional(&snapshot.path_roots()).expect("conditional block");

        let expected = "\n\
/// Macro used to name a path in the windows-rs directory for use with macros like `include!`
#[macro_export]
macro_rules! windows_rs_path {
    ($path:literal) => {
        concat!(\"/third_party/windows/\", $path)
    }
}

/// Macro used to re-export windows-rs's public items
#[macro_export]
macro_rules! windows_rs_lib {
    () => {
        #[path = \"/third_party/windows/src/lib\\u{2e}rs\"]
        mod lib;
        pub use lib::*;
    }
}
";
        assert_eq!(block, expected);
    }
}
