//! Property tests for literal escaping.

use buildconfig_codegen::escape::{escape, is_unescaped, quote, unescape};
use proptest::prelude::*;

proptest! {
    #[test]
    fn escape_round_trips(value in any::<String>()) {
        prop_assert_eq!(unescape(&escape(&value)), Ok(value));
    }

    #[test]
    fn escape_round_trips_path_like_text(value in "[a-zA-Z0-9/$+_~ .\\-\\\\\"\r\n]{0,64}") {
        prop_assert_eq!(unescape(&escape(&value)), Ok(value));
    }

    #[test]
    fn escaped_bodies_are_closed(value in any::<String>()) {
        let body = escape(&value);
        prop_assert!(body.is_ascii());
        prop_assert!(!body.chars().any(char::is_control));

        let mut chars = body.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                let marker = chars.next();
                prop_assert!(
                    matches!(marker, Some('r' | 'n' | '\\' | '"' | 'u')),
                    "marker {marker:?}"
                );
                if marker == Some('u') {
                    prop_assert_eq!(chars.next(), Some('{'));
                    let digits: String = chars.by_ref().take_while(|c| *c != '}').collect();
                    prop_assert!(!digits.is_empty() && digits.len() <= 6);
                    prop_assert!(
                        digits
                            .chars()
                            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
                    );
                }
            } else {
                prop_assert!(is_unescaped(ch), "raw {ch:?} outside the pass-through set");
            }
        }
    }

    #[test]
    fn pass_through_text_is_unchanged(value in "[a-zA-Z0-9/$+_~ \\-]{0,64}") {
        prop_assert_eq!(escape(&value), value.clone());
        prop_assert_eq!(quote(&value), format!("\"{value}\""));
    }
}
