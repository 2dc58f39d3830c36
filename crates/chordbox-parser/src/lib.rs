//! Parser for the chordbox chord definition language.
//!
//! Turns definition text such as
//!
//! ```text
//! {define: E5 base-fret 7 frets 0 1 3 3 x x}
//! ```
//!
//! into a structured [`Definition`]: a chord name, a base fret, and one
//! [`ChordString`](chordbox_core::shape::ChordString) per fret token.
//! Malformed text is reported as a [`FormatError`] with a byte offset.
//!
//! # Example
//!
//! ```
//! let def = chordbox_parser::parse("{define: A frets 2 1 0 0}").unwrap();
//! assert_eq!(def.name(), "A");
//! assert_eq!(def.strings().len(), 4);
//! ```

pub mod error;
mod parser;

pub use error::FormatError;
pub use parser::{Definition, parse, parse_chart};
