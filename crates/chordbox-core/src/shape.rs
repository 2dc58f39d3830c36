//! The chord shape model.
//!
//! A chord shape is an ordered list of [`ChordString`]s, one per instrument
//! string, each carrying one or more [`Dot`] markings. Fret values stored on
//! dots are relative to the diagram's base fret: with a base fret of 1 they
//! are literal fret numbers, with a base fret `B > 1` a stored value `v`
//! marks physical fret `B - 1 + v`. A stored value of 0 is an open string.

use serde::{Deserialize, Serialize};

/// Minimum number of fret rows a diagram displays.
///
/// Shapes whose highest stored fret fits within this span render in the
/// default window; taller shapes grow the window to fit.
pub const MIN_FRET_SPAN: u32 = 5;

/// A single fret/finger marking on one instrument string.
///
/// `fret` is `None` for the muted marker (`x` in definition syntax) and
/// `Some(0)` for an open string. `finger` identifies which finger plays the
/// dot; `None` means unassigned. A muted dot never carries a finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    fret: Option<u32>,
    finger: Option<u8>,
}

impl Dot {
    /// Creates a dot from optional fret and finger values.
    ///
    /// A muted dot (`fret == None`) drops any finger assignment, keeping the
    /// invariant that unplayed strings carry no fingering.
    pub fn new(fret: Option<u32>, finger: Option<u8>) -> Self {
        Self {
            fret,
            finger: fret.and(finger),
        }
    }

    /// Creates a fretted dot with no finger assignment.
    pub fn fretted(fret: u32) -> Self {
        Self {
            fret: Some(fret),
            finger: None,
        }
    }

    /// Creates a muted-string marker.
    pub fn muted() -> Self {
        Self {
            fret: None,
            finger: None,
        }
    }

    /// Returns a copy of this dot with the given finger assigned.
    ///
    /// Has no effect on a muted dot.
    pub fn with_finger(self, finger: u8) -> Self {
        Self {
            finger: self.fret.map(|_| finger),
            ..self
        }
    }

    /// Returns the stored fret value, or `None` for a muted string.
    pub fn fret(self) -> Option<u32> {
        self.fret
    }

    /// Returns the assigned finger, if any.
    pub fn finger(self) -> Option<u8> {
        self.finger
    }

    /// Returns true if this dot marks an unplayed string.
    pub fn is_muted(self) -> bool {
        self.fret.is_none()
    }
}

/// One instrument string with its dots in insertion order.
///
/// The first dot comes from the base fret list of a definition; further dots
/// are appended by `add:` clauses (e.g. a barre plus a melody note). The
/// horizontal pixel position `string_x` is undefined until layout runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordString {
    dots: Vec<Dot>,
    string_x: Option<f32>,
}

impl ChordString {
    /// Creates a string from a list of dots.
    pub fn new(dots: Vec<Dot>) -> Self {
        Self {
            dots,
            string_x: None,
        }
    }

    /// Creates a string holding a single dot.
    pub fn single(dot: Dot) -> Self {
        Self::new(vec![dot])
    }

    /// Appends a dot, preserving insertion order.
    pub fn push_dot(&mut self, dot: Dot) {
        self.dots.push(dot);
    }

    /// Returns the dots on this string in insertion order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Returns the horizontal pixel position assigned by layout, or `None`
    /// if layout has not run yet.
    pub fn string_x(&self) -> Option<f32> {
        self.string_x
    }

    /// Assigns the horizontal pixel position. Called by the layout engine.
    pub fn set_string_x(&mut self, x: f32) {
        self.string_x = Some(x);
    }

    /// Highest stored fret value on this string, ignoring muted dots and
    /// open strings.
    pub fn highest_fret(&self) -> Option<u32> {
        self.dots
            .iter()
            .copied()
            .filter_map(Dot::fret)
            .filter(|f| *f > 0)
            .max()
    }
}
