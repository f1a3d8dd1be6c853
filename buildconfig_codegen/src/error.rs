//! Error types for `buildconfig_codegen`.
//!
//! Generation itself only fails when the output sink does, and that error is
//! returned as the sink's own [`std::io::Error`]. The types here cover the
//! two fallible helpers: manifest construction and literal decoding.

use thiserror::Error;

/// Errors raised while assembling a constant manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// The name cannot be used as a Rust identifier.
    #[error("'{name}' is not a valid constant name")]
    InvalidName {
        /// Offending constant name.
        name: String,
    },

    /// The name is declared more than once in the generated module.
    #[error("constant '{name}' is declared more than once")]
    Duplicate {
        /// Constant name that collides.
        name: String,
    },
}

/// Errors raised while decoding an escaped literal body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnescapeError {
    /// A character that must always be escaped appeared verbatim.
    #[error("unexpected unescaped {ch:?} at byte {offset}")]
    UnexpectedCharacter {
        /// The raw character.
        ch: char,
        /// Byte offset within the body.
        offset: usize,
    },

    /// A backslash was followed by something other than a known escape.
    #[error("unknown escape {ch:?} at byte {offset}")]
    UnknownEscape {
        /// Character that followed the escape marker.
        ch: char,
        /// Byte offset of the escape marker.
        offset: usize,
    },

    /// The body ended in the middle of an escape.
    #[error("truncated escape at byte {offset}")]
    Truncated {
        /// Byte offset of the escape marker.
        offset: usize,
    },

    /// A numeric escape did not name a Unicode scalar value.
    #[error("invalid code point {value:#x} at byte {offset}")]
    InvalidCodePoint {
        /// Decoded numeric value.
        value: u32,
        /// Byte offset of the escape marker.
        offset: usize,
    },
}
