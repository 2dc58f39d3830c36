//! Error types for chordbox operations.
//!
//! This module provides the main error type [`ChordError`] which wraps the
//! error conditions that can occur while building or querying a chord chart.

use thiserror::Error;

use chordbox_parser::FormatError;

/// The main error type for chordbox operations.
///
/// `Format` carries a parser error unchanged; `NotFound` reports a chart
/// lookup for a normalized name with no matching entry. There is no
/// fallback guessing and no partial result in either case.
#[derive(Debug, Error)]
pub enum ChordError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("no chord chart entry matches '{name}'")]
    NotFound { name: String },
}
