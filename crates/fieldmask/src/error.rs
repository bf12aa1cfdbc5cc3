//! crates/fieldmask/src/error.rs
//!
//! Errors raised while building a mask from text or paths.

use thiserror::Error;

/// Result type for mask construction.
pub type ParseResult<T> = Result<T, FormatError>;

/// Malformed mask source.
///
/// Format errors are raised while a mask is being constructed, so they never
/// leave a half-built mask or any destination state behind.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// A dotted path contained an empty segment (leading, trailing, or
    /// doubled `.`).
    #[error("invalid field path \"{path}\": empty field name")]
    EmptySegment {
        /// The offending path as supplied by the caller.
        path: String,
    },
    /// A `,` or `}` appeared where a field name was expected.
    #[error("unexpected '{delimiter}' at offset {offset}: expected a field name")]
    UnexpectedDelimiter {
        /// The delimiter that was found.
        delimiter: char,
        /// Byte offset of the delimiter in the mask text.
        offset: usize,
    },
    /// A `{` was never closed.
    #[error("unmatched '{{' opened at offset {offset}")]
    UnclosedBrace {
        /// Byte offset of the opening brace.
        offset: usize,
    },
    /// A character that cannot continue the current term, such as a field name
    /// directly after a closed sub-mask or a name split by whitespace.
    #[error("unexpected '{character}' at offset {offset}")]
    UnexpectedCharacter {
        /// The character that was found.
        character: char,
        /// Byte offset of the character in the mask text.
        offset: usize,
    },
    /// The mask nests deeper than the configured limit.
    #[error("mask nesting exceeds the maximum depth of {max_depth}")]
    DepthExceeded {
        /// The limit that was exceeded.
        max_depth: usize,
    },
}

impl FormatError {
    /// Returns the byte offset in the mask text where the error was detected,
    /// when the error originates from the compact parser.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedDelimiter { offset, .. }
            | Self::UnclosedBrace { offset }
            | Self::UnexpectedCharacter { offset, .. } => Some(*offset),
            Self::EmptySegment { .. } | Self::DepthExceeded { .. } => None,
        }
    }
}
