//! Integration tests for the public chord chart API
//!
//! These tests verify that the end-to-end flow works: source text in,
//! laid-out diagrams and markdown grids out.

use chordbox::{ChordChart, ChordDiagram, ChordError, config::DiagramConfig};

const SONGBOOK: &str = "\
    {define: F#7 frets 3 4 2 4 fingers 2 3 1 4}\n\
    {define: Fadd9 frets 1 0 1 0}\n\
    {define: C/G 0 0 0 3}\n\
    {define: E5 frets 0 8 10 10 x x}\n";

#[test]
fn test_build_chart_from_songbook() {
    let chart = ChordChart::build(SONGBOOK).expect("songbook should parse");
    assert_eq!(chart.len(), 4);
}

#[test]
fn test_equivalent_spellings_render_identically() {
    let chart = ChordChart::build(SONGBOOK).expect("songbook should parse");

    let plain = chart.grid_as_md("F#7").expect("F#7 is defined");
    let accented = chart.grid_as_md("F#7!").expect("F#7! normalizes to F#7");
    let strummed = chart.grid_as_md("F#7///").expect("F#7/// normalizes to F#7");

    assert_eq!(plain, accented);
    assert_eq!(plain, strummed);
}

#[test]
fn test_alias_lookup() {
    let chart = ChordChart::build(SONGBOOK).expect("songbook should parse");

    // Fadd9 is stored under the canonical name F9
    assert!(chart.voicings("F9").is_some());
    assert!(chart.voicings("Fadd9").is_some());
    assert_eq!(ChordChart::normalise_chord_name("Fadd9"), "F9");
}

#[test]
fn test_unknown_chord_is_not_found() {
    let chart = ChordChart::build(SONGBOOK).expect("songbook should parse");
    let err = chart.grid_as_md("Bb13").expect_err("Bb13 is not defined");

    assert!(matches!(err, ChordError::NotFound { .. }));
    assert!(err.to_string().contains("Bb13"));
}

#[test]
fn test_malformed_songbook_aborts_build() {
    let source = "{define: A frets 2 1 0 0}\n{define: broken frets}\n";
    let result = ChordChart::build(source);

    assert!(matches!(result, Err(ChordError::Format(_))));
}

#[test]
fn test_high_voicing_is_windowed() {
    let chart = ChordChart::build(SONGBOOK).expect("songbook should parse");
    let voicings = chart.voicings("E5").expect("E5 is defined");

    // The E5 shape sits high on the neck, so the diagram shows a shifted
    // window rather than eight frets of empty board.
    assert_eq!(voicings[0].base_fret(), 8);
    assert!(chart.grid_as_md("E5").unwrap().contains("*base fret 8*"));
}

#[test]
fn test_diagram_layout_with_custom_config() {
    let mut diagram = ChordDiagram::new().with_config(DiagramConfig::default());
    diagram
        .parse_definition("{define: G 0 2 3 2}")
        .expect("definition should parse");
    diagram.draw();

    assert_eq!(diagram.num_strings(), 4);
    assert_eq!(diagram.num_frets(), 5);
    assert!(diagram.box_width() > 0.0);
    assert!(diagram.box_height() > 0.0);
}
