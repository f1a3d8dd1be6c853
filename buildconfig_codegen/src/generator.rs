//! Orchestrates the emitters and writes the module to a sink.

use std::io::{self, Write};

use tracing::debug;

use crate::macros::{emit_conditional, emit_mandatory};
use crate::manifest::Manifest;
use crate::snapshot::ConfigSnapshot;

/// Writes a generated module for a given manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    manifest: Manifest,
}

impl Generator {
    /// Creates a generator emitting `manifest`'s constants.
    #[must_use]
    pub const fn with_manifest(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// The manifest this generator emits.
    #[must_use]
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Writes the mandatory templates, the conditional templates and every
    /// manifest constant, in that order.
    ///
    /// # Errors
    ///
    /// Returns the sink's error unchanged if a write fails.
    pub fn generate<W: Write + ?Sized>(
        &self,
        snapshot: &ConfigSnapshot,
        sink: &mut W,
    ) -> io::Result<()> {
        for section in self.sections(snapshot) {
            sink.write_all(section.as_bytes())?;
        }
        Ok(())
    }

    /// Renders the module into a `String`.
    #[must_use]
    pub fn render(&self, snapshot: &ConfigSnapshot) -> String {
        self.sections(snapshot).concat()
    }

    fn sections(&self, snapshot: &ConfigSnapshot) -> Vec<String> {
        let roots = snapshot.path_roots();
        let entries = self.manifest.entries();

        let mut sections = Vec::with_capacity(entries.len() + 2);
        sections.push(emit_mandatory(&roots));
        sections.extend(emit_conditional(&roots));
        sections.extend(entries.iter().map(|spec| spec.render(snapshot)));

        debug!(
            constants = entries.len(),
            conditional = roots.external.is_some(),
            "rendered build configuration module"
        );
        sections
    }
}

/// Writes the default module for `snapshot` to `sink`.
///
/// # Errors
///
/// Returns the sink's error unchanged if a write fails.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::{ConfigSnapshot, generate};
///
/// let snapshot = ConfigSnapshot::new("/obj", "/src");
/// let mut out = Vec::new();
/// generate(&snapshot, &mut out)?;
/// assert!(String::from_utf8_lossy(&out).contains("macro_rules! objdir_path"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn generate<W: Write + ?Sized>(snapshot: &ConfigSnapshot, sink: &mut W) -> io::Result<()> {
    Generator::default().generate(snapshot, sink)
}

/// Renders the default module for `snapshot` into a `String`.
#[must_use]
pub fn render(snapshot: &ConfigSnapshot) -> String {
    Generator::default().render(snapshot)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]
mod tests {
    use super::*;
    use crate::manifest::ConstantSpec;
    use rstest::rstest;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn sink_errors_propagate_unchanged() {
        let snapshot = ConfigSnapshot::new("/obj", "/src");
        let err = generate(&snapshot, &mut FailingSink).expect_err("write should fail");
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(err.to_string(), "disk full");
    }

    #[rstest]
    fn generate_and_render_agree() {
        let snapshot = ConfigSnapshot::new("/obj", "/src").with("MOZ_APP_NAME", "demo");
        let mut out = Vec::new();
        generate(&snapshot, &mut out).expect("write to Vec");
        assert_eq!(out, render(&snapshot).into_bytes());
    }

    #[rstest]
    fn custom_manifest_controls_constants() {
        let manifest =
            Manifest::new(vec![ConstantSpec::bool("ONLY_FLAG")]).expect("valid manifest");
        let generator = Generator::with_manifest(manifest.clone());
        assert_eq!(generator.manifest(), &manifest);

        let module = generator.render(&ConfigSnapshot::new("/obj", "/src"));
        assert!(module.ends_with(
            "pub const TOPSRCDIR: &str = \"/src\";\n\npub const ONLY_FLAG: bool = false;\n"
        ));
        assert!(!module.contains("MOZ_APP_NAME"));
    }
}
