//! Error type for the chord definition parser.
//!
//! [`FormatError`] reports malformed definition text: a missing
//! `{define: ...}` envelope, a non-integer token where a number is expected,
//! mismatched frets/fingers counts, or a malformed `add:` clause. It is
//! raised at the offending entry and surfaced to the caller unchanged; there
//! is no recovery or retry.

use thiserror::Error;

/// A malformed chord definition.
///
/// Carries a human-readable message and the byte offset into the source
/// text where the offending entry starts or where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed chord definition at byte {offset}: {message}")]
pub struct FormatError {
    message: String,
    offset: usize,
}

impl FormatError {
    /// Creates a new format error with a message and source byte offset.
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }

    /// The error message without positional information.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
