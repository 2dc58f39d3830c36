//! Configuration for chord diagram layout.
//!
//! [`DiagramConfig`] holds the pixel-spacing constants the layout engine
//! uses: how far apart strings and fret rows sit, and the margin around the
//! diagram box. The type implements [`serde::Deserialize`] for flexible
//! loading from external sources; the defaults produce compact diagrams.
//!
//! The structural layout invariants (strictly increasing positions, strings
//! inside the box) hold for any configuration with positive spacings and
//! margins; the exact values only change proportions.

use serde::Deserialize;

use chordbox_core::geometry::Insets;

const DEFAULT_STRING_SPACING: f32 = 20.0;
const DEFAULT_FRET_SPACING: f32 = 20.0;
const DEFAULT_MARGIN: f32 = 12.0;

/// Pixel-spacing constants for diagram layout.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Horizontal distance between adjacent strings.
    string_spacing: f32,

    /// Vertical distance between adjacent fret rows.
    fret_spacing: f32,

    /// Margin around the diagram content on all four sides.
    margin: Insets,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`] with the specified spacings and margin.
    pub fn new(string_spacing: f32, fret_spacing: f32, margin: Insets) -> Self {
        Self {
            string_spacing,
            fret_spacing,
            margin,
        }
    }

    /// Returns the horizontal distance between adjacent strings.
    pub fn string_spacing(&self) -> f32 {
        self.string_spacing
    }

    /// Returns the vertical distance between adjacent fret rows.
    pub fn fret_spacing(&self) -> f32 {
        self.fret_spacing
    }

    /// Returns the margin around the diagram content.
    pub fn margin(&self) -> Insets {
        self.margin
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            string_spacing: DEFAULT_STRING_SPACING,
            fret_spacing: DEFAULT_FRET_SPACING,
            margin: Insets::uniform(DEFAULT_MARGIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_positive_spacings() {
        let config = DiagramConfig::default();
        assert!(config.string_spacing() > 0.0);
        assert!(config.fret_spacing() > 0.0);
        assert!(config.margin().right() > 0.0);
    }

    #[test]
    fn test_custom_config() {
        let config = DiagramConfig::new(10.0, 15.0, Insets::uniform(5.0));
        assert_eq!(config.string_spacing(), 10.0);
        assert_eq!(config.fret_spacing(), 15.0);
        assert_eq!(config.margin().top(), 5.0);
    }
}
