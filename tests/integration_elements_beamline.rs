//! Integration tests: elements module + beamline module
//!
//! These tests verify that element construction, beamline assembly,
//! compilation and spatial queries work correctly together.

use beam_rs::beamline::Beamline;
use beam_rs::elements::Element;
use beam_rs::BeamlineError;

mod common;
use common::{single_quad_line, test_drive_elements};

// =================================================================================================
// Assembly and Ordering
// =================================================================================================

#[test]
fn test_reordering_after_reposition() {
    // Two quadrupoles at centers 0.0 and 1.0; move the second to -1.0 and
    // recompile: it must now come first and the links must follow.
    let mut line = Beamline::named("channel 1");
    line.push(Element::quadrupole("Q1", 0.2, 0.0, 2.0).unwrap());
    line.push(Element::quadrupole("Q2", 0.2, 1.0, -2.0).unwrap());
    line.compile();

    let names: Vec<_> = line.iter_sorted().unwrap().map(|e| e.name().to_owned()).collect();
    assert_eq!(names, ["Q1", "Q2"]);

    line.element_mut(1).unwrap().set_center(-1.0);
    line.compile();

    let names: Vec<_> = line.iter_sorted().unwrap().map(|e| e.name().to_owned()).collect();
    assert_eq!(names, ["Q2", "Q1"]);

    let (prev, next) = line.neighbors(0).unwrap();
    assert!(prev.is_none());
    assert_eq!(next.unwrap().name(), "Q1");

    let (prev, next) = line.neighbors(1).unwrap();
    assert_eq!(prev.unwrap().name(), "Q2");
    assert!(next.is_none());
}

#[test]
fn test_assembly_order_is_irrelevant() {
    let mut forward = Beamline::new();
    let mut reversed = Beamline::new();

    let elements = test_drive_elements();
    for element in elements.iter() {
        forward.push(element.clone());
    }
    for element in elements.iter().rev() {
        reversed.push(element.clone());
    }
    forward.compile();
    reversed.compile();

    let forward_names: Vec<_> =
        forward.iter_sorted().unwrap().map(|e| e.name().to_owned()).collect();
    let reversed_names: Vec<_> =
        reversed.iter_sorted().unwrap().map(|e| e.name().to_owned()).collect();
    assert_eq!(forward_names, reversed_names);
}

#[test]
fn test_display_formats() {
    let elements = test_drive_elements();
    let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        ["Quadrupole.Q1", "Quadrupole.Q2", "Solenoid.Sol1", "SectorBend.S_bend1"]
    );
}

// =================================================================================================
// Point Lookup
// =================================================================================================

#[test]
fn test_element_at_scenario() {
    let line = single_quad_line();

    // Center 1.0, length 0.2 -> (0.9, 1.1) strictly contains 1.0.
    assert_eq!(line.element_at(1.0).unwrap().unwrap().name(), "Q");
    // Nothing covers 0.5.
    assert!(line.element_at(0.5).unwrap().is_none());
}

#[test]
fn test_element_at_many_elements() {
    let mut line = Beamline::new();
    for i in 0..100 {
        let center = i as f64;
        line.push(Element::drift(format!("D{}", i), 0.5, center).unwrap());
    }
    line.compile();

    for i in [0usize, 1, 42, 99] {
        let center = i as f64;
        let hit = line.element_at(center).unwrap().unwrap();
        assert_eq!(hit.name(), format!("D{}", i));
        // Midpoints of the gaps are uncovered.
        assert!(line.element_at(center + 0.5).unwrap().is_none());
    }
}

// =================================================================================================
// Staleness Discipline
// =================================================================================================

#[test]
fn test_stale_queries_fail_loudly() {
    let mut line = single_quad_line();

    // Fresh compile: fine.
    assert!(line.element_at(1.0).unwrap().is_some());

    // Any mutation invalidates every query until recompile.
    line.push(Element::drift("D", 0.3, 5.0).unwrap());
    assert_eq!(line.element_at(1.0).unwrap_err(), BeamlineError::NotCompiled);
    assert_eq!(line.matrix_between(0.0, 1.0).unwrap_err(), BeamlineError::NotCompiled);
    assert_eq!(line.scan(0.0, 1.0, 5).unwrap_err(), BeamlineError::NotCompiled);

    line.compile();
    assert!(line.element_at(1.0).unwrap().is_some());
    assert!(line.element_at(5.0).unwrap().is_some());
}

#[test]
fn test_uncompiled_line_rejects_queries() {
    let mut line = Beamline::new();
    line.push(Element::drift("D", 1.0, 0.0).unwrap());

    assert_eq!(line.element_at(0.0).unwrap_err(), BeamlineError::NotCompiled);
    assert_eq!(line.matrix_between(0.0, 1.0).unwrap_err(), BeamlineError::NotCompiled);
}

// =================================================================================================
// Geometry Validation
// =================================================================================================

#[test]
fn test_invalid_geometry_reported_with_context() {
    let err = Element::quadrupole("QBAD", -0.2, 0.0, 2.0).unwrap_err();
    match err {
        BeamlineError::InvalidGeometry { element, reason } => {
            assert_eq!(element, "QBAD");
            assert!(reason.contains("-0.2"));
        }
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }

    let err = Element::sector_bend("BBAD", 0.0, 0.0, 0.31).unwrap_err();
    assert!(matches!(err, BeamlineError::InvalidGeometry { .. }));
}
