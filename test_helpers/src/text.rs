//! Text helpers for behavioural steps and generated-module assertions.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Returns the escaped body of `pub const NAME: &str = "...";` in `module`.
///
/// The body is returned without its surrounding quotes and still escaped.
#[must_use]
pub fn string_constant_body<'a>(module: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!("pub const {name}: &str = \"");
    module
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.strip_suffix("\";"))
}

/// Returns the declared length of `pub const NAME: [&str; N] = ...;`.
#[must_use]
pub fn array_constant_len(module: &str, name: &str) -> Option<usize> {
    let prefix = format!("pub const {name}: [&str; ");
    module
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.split_once(']'))
        .and_then(|(len, _)| len.parse().ok())
}

/// Returns the value of `pub const NAME: bool = ...;`.
#[must_use]
pub fn bool_constant(module: &str, name: &str) -> Option<bool> {
    let prefix = format!("pub const {name}: bool = ");
    module
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.strip_suffix(';'))
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = "pub const A: &str = \"x\\\"y\";\n\
                          pub const B: [&str; 2] = [\"p\",\"q\"];\n\
                          pub const C: bool = true;\n";

    #[test]
    fn unquote_removes_single_outer_quotes() {
        assert_eq!(unquote("'value'"), "value");
        assert_eq!(unquote("\"Demo App\""), "Demo App");
        assert_eq!(unquote("bare"), "bare");
    }

    #[test]
    fn constant_lookups_parse_declarations() {
        assert_eq!(string_constant_body(MODULE, "A"), Some("x\\\"y"));
        assert_eq!(array_constant_len(MODULE, "B"), Some(2));
        assert_eq!(bool_constant(MODULE, "C"), Some(true));
        assert_eq!(bool_constant(MODULE, "A"), None);
    }

    #[test]
    fn count_occurrences_counts_matches() {
        assert_eq!(count_occurrences(MODULE, "pub const"), 3);
    }
}
