//! Geometric primitives for chord diagram layout.
//!
//! This module provides the small set of geometric types used when
//! calculating positions and sizes of diagram elements.
//!
//! # Coordinate System
//!
//! Chordbox uses a coordinate system consistent with SVG:
//!
//! - **Origin**: top-left corner at `(0, 0)`
//! - **X-axis**: increases rightward, one instrument string per column
//! - **Y-axis**: increases downward, one fret row per step

use serde::{Deserialize, Serialize};

/// Dimensions of a diagram element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size grown by the given insets on all four sides
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// Spacing around an element (padding, margin, etc.) with potentially
/// different values for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_new() {
        let size = Size::new(100.0, 200.0);
        assert_eq!(size.width(), 100.0);
        assert_eq!(size.height(), 200.0);
    }

    #[test]
    fn test_size_default_is_zero() {
        let size = Size::default();
        assert_eq!(size.width(), 0.0);
        assert_eq!(size.height(), 0.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 20.0);
        let padded = size.add_padding(Insets::uniform(5.0));

        assert_eq!(padded.width(), 20.0); // 10 + 5*2
        assert_eq!(padded.height(), 30.0); // 20 + 5*2
    }

    #[test]
    fn test_insets_accessors() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.top(), 1.0);
        assert_eq!(insets.right(), 2.0);
        assert_eq!(insets.bottom(), 3.0);
        assert_eq!(insets.left(), 4.0);
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(5.0);
        assert_eq!(insets.top(), 5.0);
        assert_eq!(insets.right(), 5.0);
        assert_eq!(insets.bottom(), 5.0);
        assert_eq!(insets.left(), 5.0);
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 6.0); // 2.0 + 4.0
        assert_eq!(insets.vertical_sum(), 4.0); // 1.0 + 3.0
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn insets_strategy() -> impl Strategy<Value = Insets> {
        (0.0f32..100.0, 0.0f32..100.0, 0.0f32..100.0, 0.0f32..100.0)
            .prop_map(|(t, r, b, l)| Insets::new(t, r, b, l))
    }

    /// Padding never shrinks a size when all insets are non-negative.
    fn check_padding_grows(size: Size, insets: Insets) -> Result<(), TestCaseError> {
        let padded = size.add_padding(insets);

        prop_assert!(padded.width() >= size.width());
        prop_assert!(padded.height() >= size.height());
        Ok(())
    }

    /// Padding adds exactly the horizontal and vertical sums.
    fn check_padding_sums(size: Size, insets: Insets) -> Result<(), TestCaseError> {
        let padded = size.add_padding(insets);

        prop_assert!(approx_eq!(
            f32,
            padded.width(),
            size.width() + insets.horizontal_sum(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            padded.height(),
            size.height() + insets.vertical_sum(),
            epsilon = 0.001
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn padding_grows(size in size_strategy(), insets in insets_strategy()) {
            check_padding_grows(size, insets)?;
        }

        #[test]
        fn padding_sums(size in size_strategy(), insets in insets_strategy()) {
            check_padding_sums(size, insets)?;
        }
    }
}
