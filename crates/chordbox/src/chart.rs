//! Chord chart lookup.
//!
//! A [`ChordChart`] is a catalogue of chord definitions keyed by normalized
//! chord name. Building the chart parses every `{define: ...}` block in the
//! source text and lays each voicing out; lookups normalize the requested
//! name first, so equivalent spellings (`F#7`, `F#7!`, `F#7///`) resolve to
//! the same entry. The chart is read-only after construction.

use indexmap::IndexMap;
use log::{debug, info};

use crate::{ChordDiagram, error::ChordError};

/// Quality-suffix aliases mapped to their canonical spelling.
///
/// The table is finite and explicit. Rewriting runs to a fixpoint so that
/// stacked aliases (a stem that itself ends in an alias) fully resolve in
/// one normalization pass; no canonical spelling ends in an alias, so the
/// rewrite always terminates.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("add9", "9"),
    ("add11", "11"),
    ("add13", "13"),
    ("sus", "sus4"),
];

/// A catalogue of chord voicings keyed by normalized chord name.
#[derive(Debug, Clone, Default)]
pub struct ChordChart {
    entries: IndexMap<String, Vec<ChordDiagram>>,
}

impl ChordChart {
    /// Builds a chart from source text containing zero or more
    /// `{define: ...}` blocks separated by arbitrary whitespace.
    ///
    /// Every voicing is parsed and laid out up front. The first malformed
    /// entry aborts the whole build; no partial chart is ever observable.
    ///
    /// # Errors
    ///
    /// Propagates the parser's [`FormatError`](chordbox_parser::FormatError)
    /// for any malformed entry.
    pub fn build(source: &str) -> Result<Self, ChordError> {
        let definitions = chordbox_parser::parse_chart(source)?;

        let mut entries: IndexMap<String, Vec<ChordDiagram>> = IndexMap::new();
        for definition in definitions {
            let key = Self::normalise_chord_name(definition.name());
            let mut diagram = ChordDiagram::from(definition);
            diagram.draw();
            entries.entry(key).or_default().push(diagram);
        }

        info!(names = entries.len(); "chord chart built");
        Ok(Self { entries })
    }

    /// Canonical form of a chord name, used as the chart lookup key.
    ///
    /// Trailing performance annotations (runs of `!` or `/`) are stripped
    /// first, then quality-suffix aliases are rewritten to their canonical
    /// spelling. The result is case-preserving aside from the alias table,
    /// and normalization is idempotent.
    pub fn normalise_chord_name(name: &str) -> String {
        let mut current = name.trim_end_matches(['!', '/']).to_string();

        'rewrite: loop {
            for (alias, canonical) in NAME_ALIASES {
                if let Some(stem) = current.strip_suffix(alias) {
                    current = format!("{stem}{canonical}");
                    continue 'rewrite;
                }
            }
            return current;
        }
    }

    /// All voicings stored under the normalized form of `name`, in source
    /// order, or `None` if the chart has no matching entry.
    pub fn voicings(&self, name: &str) -> Option<&[ChordDiagram]> {
        self.entries
            .get(&Self::normalise_chord_name(name))
            .map(Vec::as_slice)
    }

    /// Number of distinct normalized names in the chart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every voicing matching `name` as a markdown grid.
    ///
    /// Requests whose names normalize identically produce byte-identical
    /// output: the rendered label is the stored entry's name, not the
    /// requested spelling.
    ///
    /// # Errors
    ///
    /// Returns [`ChordError::NotFound`] when no entry matches the
    /// normalized name.
    pub fn grid_as_md(&self, name: &str) -> Result<String, ChordError> {
        let key = Self::normalise_chord_name(name);
        let voicings = self.entries.get(&key).ok_or_else(|| ChordError::NotFound {
            name: key.clone(),
        })?;

        debug!(name = key.as_str(), voicings = voicings.len(); "rendering chord grid");

        let grids: Vec<String> = voicings.iter().map(render_grid).collect();
        Ok(grids.join("\n"))
    }
}

/// Renders one laid-out voicing as a fixed-width markdown table.
///
/// Columns are strings, rows are fret rows of the visible window. The first
/// body row is the nut row (`0` open, `x` muted, blank fretted); each
/// following row shows the absolute fret number in occupied cells.
fn render_grid(diagram: &ChordDiagram) -> String {
    let num_strings = diagram.num_strings();
    let base_fret = diagram.base_fret();

    // Widest cell decides the column width: the bottom row of the window
    // holds the largest absolute fret number.
    let highest_absolute = base_fret - 1 + diagram.num_frets();
    let width = highest_absolute.to_string().len().max(1);

    let mut out = String::new();
    out.push_str(&format!("### {}\n", diagram.name()));
    if base_fret > 1 {
        out.push_str(&format!("*base fret {base_fret}*\n"));
    }
    out.push('\n');

    let header: Vec<String> = (1..=num_strings).map(|i| i.to_string()).collect();
    out.push_str(&format_row(&header, width));
    let separator: Vec<String> = (0..num_strings).map(|_| "-".repeat(width)).collect();
    out.push_str(&format_row(&separator, width));

    // Nut row: open and muted markers
    let nut: Vec<String> = diagram
        .strings()
        .iter()
        .map(|string| match string.dots()[0].fret() {
            None => "x".to_string(),
            Some(0) => "0".to_string(),
            Some(_) => String::new(),
        })
        .collect();
    out.push_str(&format_row(&nut, width));

    // One row per visible fret, cells hold the absolute fret number
    for row in 1..=diagram.num_frets() {
        let cells: Vec<String> = diagram
            .strings()
            .iter()
            .map(|string| {
                let occupied = string
                    .dots()
                    .iter()
                    .any(|dot| dot.fret() == Some(row));
                if occupied {
                    (base_fret - 1 + row).to_string()
                } else {
                    String::new()
                }
            })
            .collect();
        out.push_str(&format_row(&cells, width));
    }

    out
}

fn format_row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push_str(&format!(" {cell:>width$} |"));
    }
    line.push('\n');
    line
}
