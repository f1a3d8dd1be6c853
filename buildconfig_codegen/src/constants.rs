//! Typed constant declarations rendered from snapshot lookups.
//!
//! Each emitter resolves an absent variable to its kind's default, so none of
//! them can fail.

use tracing::warn;

use crate::escape::quote;
use crate::snapshot::{ConfigSnapshot, ConfigValue, ValueKind};

/// Renders `pub const NAME: bool = ...;`.
///
/// The value is the truthiness of the entry; an absent entry is `false`.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::ConfigSnapshot;
/// use buildconfig_codegen::constants::emit_bool;
///
/// let snapshot = ConfigSnapshot::new("/obj", "/src").with("NIGHTLY_BUILD", "1");
/// assert_eq!(emit_bool(&snapshot, "NIGHTLY_BUILD"), "pub const NIGHTLY_BUILD: bool = true;\n");
/// assert_eq!(emit_bool(&snapshot, "MOZ_ESR"), "pub const MOZ_ESR: bool = false;\n");
/// ```
#[must_use]
pub fn emit_bool(snapshot: &ConfigSnapshot, name: &str) -> String {
    let value = snapshot.get(name).is_some_and(ConfigValue::is_truthy);
    format!("pub const {name}: bool = {value};\n")
}

/// Renders `pub const NAME: &str = "...";`.
///
/// An absent entry, or one that is not a scalar string, renders as `""`.
#[must_use]
pub fn emit_string(snapshot: &ConfigSnapshot, name: &str) -> String {
    let value = match snapshot.get(name) {
        Some(ConfigValue::Str(text)) => text.as_str(),
        Some(other) => {
            report_mismatch(name, ValueKind::Str, other);
            ""
        }
        None => "",
    };
    format!("pub const {name}: &str = {};\n", quote(value))
}

/// Renders `pub const NAME: [&str; N] = [...];`, keeping element order.
///
/// An absent entry, or one that is not a list, renders as a zero-length
/// array.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::ConfigSnapshot;
/// use buildconfig_codegen::constants::emit_string_array;
///
/// let flags: &[&str] = &["-I/a", "-DB"];
/// let snapshot = ConfigSnapshot::new("/obj", "/src").with("NSS_CFLAGS", flags);
/// assert_eq!(
///     emit_string_array(&snapshot, "NSS_CFLAGS"),
///     "pub const NSS_CFLAGS: [&str; 2] = [\"-I/a\",\"-DB\"];\n"
/// );
/// ```
#[must_use]
pub fn emit_string_array(snapshot: &ConfigSnapshot, name: &str) -> String {
    let items: &[String] = match snapshot.get(name) {
        Some(ConfigValue::StrList(items)) => items,
        Some(other) => {
            report_mismatch(name, ValueKind::StrList, other);
            &[]
        }
        None => &[],
    };
    let elements: Vec<String> = items.iter().map(|item| quote(item)).collect();
    format!(
        "pub const {name}: [&str; {}] = [{}];\n",
        items.len(),
        elements.join(",")
    )
}

fn report_mismatch(name: &str, expected: ValueKind, found: &ConfigValue) {
    warn!(
        variable = name,
        expected = %expected,
        found = %found.kind(),
        "configuration value has the wrong kind; using the default"
    );
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface unexpected failures"
)]
mod tests {
    use super::*;
    use crate::escape::unescape;
    use rstest::{fixture, rstest};

    #[fixture]
    fn empty() -> ConfigSnapshot {
        ConfigSnapshot::new("/obj", "/src")
    }

    #[rstest]
    fn absent_bool_defaults_to_false(empty: ConfigSnapshot) {
        assert_eq!(emit_bool(&empty, "X"), "pub const X: bool = false;\n");
    }

    #[rstest]
    fn absent_string_defaults_to_empty(empty: ConfigSnapshot) {
        assert_eq!(emit_string(&empty, "Y"), "pub const Y: &str = \"\";\n");
    }

    #[rstest]
    fn absent_list_defaults_to_zero_length(empty: ConfigSnapshot) {
        assert_eq!(
            emit_string_array(&empty, "Z"),
            "pub const Z: [&str; 0] = [];\n"
        );
    }

    #[rstest]
    #[case(ConfigValue::Bool(true), "true")]
    #[case(ConfigValue::Bool(false), "false")]
    #[case(ConfigValue::from("1"), "true")]
    #[case(ConfigValue::from(""), "false")]
    fn bool_uses_truthiness(
        empty: ConfigSnapshot,
        #[case] value: ConfigValue,
        #[case] rendered: &str,
    ) {
        let snapshot = empty.with("FLAG", value);
        assert_eq!(
            emit_bool(&snapshot, "FLAG"),
            format!("pub const FLAG: bool = {rendered};\n")
        );
    }

    #[rstest]
    fn string_body_decodes_to_original(empty: ConfigSnapshot) {
        let snapshot = empty.with("MOZ_APP_NAME", "Demo App");
        let line = emit_string(&snapshot, "MOZ_APP_NAME");
        assert_eq!(line, "pub const MOZ_APP_NAME: &str = \"Demo App\";\n");

        let body = line
            .strip_prefix("pub const MOZ_APP_NAME: &str = \"")
            .and_then(|rest| rest.strip_suffix("\";\n"))
            .expect("declaration has the expected shape");
        assert_eq!(unescape(body).as_deref(), Ok("Demo App"));
    }

    #[rstest]
    fn string_escapes_special_characters(empty: ConfigSnapshot) {
        let snapshot = empty.with("MOZ_APP_VENDOR", "Mozilla \"Corp\"\\");
        assert_eq!(
            emit_string(&snapshot, "MOZ_APP_VENDOR"),
            "pub const MOZ_APP_VENDOR: &str = \"Mozilla \\\"Corp\\\"\\\\\";\n"
        );
    }

    #[rstest]
    fn list_preserves_order(empty: ConfigSnapshot) {
        let items: &[&str] = &["a", "b", "c"];
        let snapshot = empty.with("L", items);
        assert_eq!(
            emit_string_array(&snapshot, "L"),
            "pub const L: [&str; 3] = [\"a\",\"b\",\"c\"];\n"
        );
    }

    #[rstest]
    fn mismatched_kinds_fall_back_to_defaults(empty: ConfigSnapshot) {
        let items: &[&str] = &["x"];
        let snapshot = empty.with("S", items).with("L", "scalar");
        assert_eq!(emit_string(&snapshot, "S"), "pub const S: &str = \"\";\n");
        assert_eq!(
            emit_string_array(&snapshot, "L"),
            "pub const L: [&str; 0] = [];\n"
        );
    }
}
