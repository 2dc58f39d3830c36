//! Chord diagram parsing, layout, and chart lookup for fretted instruments.
//!
//! `chordbox` turns `{define: ...}` chord definitions into laid-out chord
//! diagrams and searchable chord charts. A [`ChordDiagram`] holds one
//! voicing and computes pixel positions for its strings, frets, and dots; a
//! [`ChordChart`] is a catalogue of voicings keyed by normalized chord name
//! that renders lookups as markdown grids.
//!
//! # Example
//!
//! ```
//! use chordbox::ChordChart;
//!
//! let chart = ChordChart::build(
//!     "{define: F#7 frets 3 4 2 4 fingers 2 3 1 4}\n\
//!      {define: G 0 2 3 2}",
//! )?;
//!
//! let grid = chart.grid_as_md("F#7!")?;
//! assert!(grid.starts_with("### F#7"));
//! # Ok::<(), chordbox::ChordError>(())
//! ```

mod chart;
pub mod config;
mod diagram;
mod error;

pub use chart::ChordChart;
pub use config::DiagramConfig;
pub use diagram::{ChordDiagram, Fret};
pub use error::ChordError;

pub use chordbox_core::{geometry, shape};
pub use chordbox_parser::{Definition, FormatError};
