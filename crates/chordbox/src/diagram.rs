//! Chord diagram layout.
//!
//! [`ChordDiagram`] holds a chord shape plus the geometry derived from it.
//! [`ChordDiagram::parse_definition`] populates the shape from definition
//! text; [`ChordDiagram::draw`] recomputes all derived geometry from the
//! current shape. `draw` is idempotent and can be called any number of
//! times; it always reflects the latest shape and never fails for a
//! structurally valid shape (an empty shape yields the minimal diagram).

use log::trace;

use chordbox_core::{
    geometry::Size,
    shape::{ChordString, MIN_FRET_SPAN},
};
use chordbox_parser::{Definition, FormatError};

use crate::config::DiagramConfig;

/// One fret row of a laid-out diagram.
///
/// `number` is the 1-based row index within the visible window; `y` is the
/// vertical pixel position assigned by layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fret {
    number: u32,
    y: f32,
}

impl Fret {
    /// Returns the 1-based row index of this fret within the window.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the vertical pixel position of this fret row.
    pub fn y(&self) -> f32 {
        self.y
    }
}

/// A chord shape with derived layout geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordDiagram {
    name: String,
    base_fret: u32,
    strings: Vec<ChordString>,
    config: DiagramConfig,

    // Derived geometry, recomputed by draw()
    num_frets: u32,
    frets: Vec<Fret>,
    string_top: f32,
    string_bottom: f32,
    box_size: Size,
}

impl Default for ChordDiagram {
    fn default() -> Self {
        Self::with_shape("", Vec::new())
    }
}

impl ChordDiagram {
    /// Creates an empty diagram with a generic (empty) name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a diagram from an explicit shape.
    ///
    /// The base fret defaults to 1; geometry is undefined until
    /// [`draw`](Self::draw) runs.
    pub fn with_shape(name: impl Into<String>, strings: Vec<ChordString>) -> Self {
        Self {
            name: name.into(),
            base_fret: 1,
            strings,
            config: DiagramConfig::default(),
            num_frets: MIN_FRET_SPAN,
            frets: Vec::new(),
            string_top: 0.0,
            string_bottom: 0.0,
            box_size: Size::default(),
        }
    }

    /// Replaces the layout configuration.
    pub fn with_config(mut self, config: DiagramConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces this diagram's shape from a `{define: ...}` string.
    ///
    /// Previously computed geometry goes stale; call [`draw`](Self::draw)
    /// to refresh it.
    ///
    /// # Errors
    ///
    /// Returns the parser's [`FormatError`] unchanged for malformed text.
    pub fn parse_definition(&mut self, text: &str) -> Result<(), FormatError> {
        let definition = chordbox_parser::parse(text)?;
        *self = Self::from(definition).with_config(self.config);
        Ok(())
    }

    /// Recomputes all derived geometry from the current shape.
    pub fn draw(&mut self) {
        let margin = self.config.margin();
        let num_strings = self.strings.len();

        // The window grows past the minimum span when the shape needs it.
        let highest = self
            .strings
            .iter()
            .filter_map(ChordString::highest_fret)
            .max()
            .unwrap_or(0);
        self.num_frets = highest.max(MIN_FRET_SPAN);

        self.string_top = margin.top();
        self.frets = (1..=self.num_frets)
            .map(|number| Fret {
                number,
                y: self.string_top + number as f32 * self.config.fret_spacing(),
            })
            .collect();
        // num_frets >= MIN_FRET_SPAN, so the last fret always exists and
        // sits strictly below string_top.
        self.string_bottom = self.string_top + self.num_frets as f32 * self.config.fret_spacing();

        let content = Size::new(
            num_strings.saturating_sub(1) as f32 * self.config.string_spacing(),
            self.num_frets as f32 * self.config.fret_spacing(),
        );
        self.box_size = content.add_padding(margin);

        for (index, string) in self.strings.iter_mut().enumerate() {
            string.set_string_x(margin.left() + index as f32 * self.config.string_spacing());
        }

        trace!(
            num_strings = num_strings,
            num_frets = self.num_frets;
            "laid out chord diagram"
        );
    }

    /// The chord's display label; empty for a generic diagram.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting fret number of the shape; 1 for open-position chords.
    pub fn base_fret(&self) -> u32 {
        self.base_fret
    }

    /// The shape, one [`ChordString`] per instrument string.
    pub fn strings(&self) -> &[ChordString] {
        &self.strings
    }

    /// Number of instrument strings in the shape.
    pub fn num_strings(&self) -> usize {
        self.strings.len()
    }

    /// Number of fret rows in the visible window, at least
    /// [`MIN_FRET_SPAN`].
    pub fn num_frets(&self) -> u32 {
        self.num_frets
    }

    /// The laid-out fret rows, in strictly increasing `y` order.
    pub fn frets(&self) -> &[Fret] {
        &self.frets
    }

    /// Vertical position where the strings start (the nut line).
    pub fn string_top(&self) -> f32 {
        self.string_top
    }

    /// Vertical position where the strings end (the last fret row).
    pub fn string_bottom(&self) -> f32 {
        self.string_bottom
    }

    /// Total diagram width including margins.
    pub fn box_width(&self) -> f32 {
        self.box_size.width()
    }

    /// Total diagram height including margins.
    pub fn box_height(&self) -> f32 {
        self.box_size.height()
    }

    /// The layout configuration in effect.
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }
}

impl From<Definition> for ChordDiagram {
    fn from(definition: Definition) -> Self {
        let (name, base_fret, strings) = definition.into_parts();
        Self {
            base_fret,
            ..Self::with_shape(name, strings)
        }
    }
}
