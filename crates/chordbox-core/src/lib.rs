//! Chordbox Core Types and Definitions
//!
//! This crate provides the foundational types for the chordbox chord
//! diagram language. It includes:
//!
//! - **Shape**: the chord shape model ([`shape::Dot`], [`shape::ChordString`])
//! - **Geometry**: basic geometric types ([`geometry`] module)

pub mod geometry;
pub mod shape;
