//! Rust string literal escaping for generated declarations.
//!
//! Only a small set of path-friendly characters pass through untouched. Four
//! characters have named escapes, and everything else becomes a `\u{..}`
//! escape. [`unescape`] decodes exactly these forms and nothing else.

use crate::error::UnescapeError;

/// Returns `true` when `ch` may appear verbatim inside an escaped body.
#[must_use]
pub const fn is_unescaped(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '/' | '$' | '+' | '-' | '_' | '~' | ' ')
}

/// Escapes `value` for placement between the quotes of a Rust string literal.
///
/// The function is total: characters outside the pass-through set are
/// rendered as numeric code-point escapes.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::escape::escape;
///
/// assert_eq!(escape("/obj/dist"), "/obj/dist");
/// assert_eq!(escape("a\"b"), "a\\\"b");
/// assert_eq!(escape("1.0"), "1\\u{2e}0");
/// ```
#[must_use]
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for ch in value.chars() {
        push_escaped(ch, &mut result);
    }
    result
}

fn push_escaped(ch: char, result: &mut String) {
    match ch {
        c if is_unescaped(c) => result.push(c),
        '\r' => result.push_str("\\r"),
        '\n' => result.push_str("\\n"),
        '\\' => result.push_str("\\\\"),
        '"' => result.push_str("\\\""),
        other => result.extend(other.escape_unicode()),
    }
}

/// Escapes `value` and wraps it in double quotes, producing a complete
/// string literal.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::escape::quote;
///
/// assert_eq!(quote("Demo App"), "\"Demo App\"");
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for ch in value.chars() {
        push_escaped(ch, &mut result);
    }
    result.push('"');
    result
}

/// Decodes a body produced by [`escape`].
///
/// Only the escapes that [`escape`] emits are accepted: `\r`, `\n`, `\\`,
/// `\"` and `\u{X}` with one to six hexadecimal digits.
///
/// # Errors
///
/// Returns an [`UnescapeError`] when the body contains a raw quote or line
/// break, an unknown or truncated escape, or a code point that is not a
/// Unicode scalar value.
///
/// # Examples
///
/// ```
/// use buildconfig_codegen::escape::{escape, unescape};
///
/// let original = "He said \"hi\"\\";
/// assert_eq!(unescape(&escape(original)).as_deref(), Ok(original));
/// ```
pub fn unescape(body: &str) -> Result<String, UnescapeError> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' => {
                let (_, marker) = chars.next().ok_or(UnescapeError::Truncated { offset })?;
                match marker {
                    'r' => result.push('\r'),
                    'n' => result.push('\n'),
                    '\\' => result.push('\\'),
                    '"' => result.push('"'),
                    'u' => result.push(decode_code_point(&mut chars, offset)?),
                    other => return Err(UnescapeError::UnknownEscape { ch: other, offset }),
                }
            }
            '"' | '\r' | '\n' => return Err(UnescapeError::UnexpectedCharacter { ch, offset }),
            other => result.push(other),
        }
    }

    Ok(result)
}

fn decode_code_point(
    chars: &mut std::str::CharIndices<'_>,
    offset: usize,
) -> Result<char, UnescapeError> {
    match chars.next() {
        Some((_, '{')) => {}
        Some((_, other)) => return Err(UnescapeError::UnknownEscape { ch: other, offset }),
        None => return Err(UnescapeError::Truncated { offset }),
    }

    let mut value: u32 = 0;
    let mut digits = 0_u8;
    loop {
        let (_, ch) = chars.next().ok_or(UnescapeError::Truncated { offset })?;
        if ch == '}' {
            break;
        }
        let digit = ch
            .to_digit(16)
            .ok_or(UnescapeError::UnknownEscape { ch, offset })?;
        digits += 1;
        if digits > 6 {
            return Err(UnescapeError::InvalidCodePoint { value, offset });
        }
        value = (value << 4) | digit;
    }

    if digits == 0 {
        return Err(UnescapeError::Truncated { offset });
    }
    char::from_u32(value).ok_or(UnescapeError::InvalidCodePoint { value, offset })
}
