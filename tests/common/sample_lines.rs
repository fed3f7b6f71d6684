//! Canonical beamlines shared by the integration tests

use beam_rs::beamline::Beamline;
use beam_rs::elements::Element;

/// A FODO-style cell with every element kind and implicit drift gaps:
///
/// ```text
/// QF(0.2, K1=1.8) @ 0.0 .. B1(0.6, α=0.15) @ 1.0 .. QD(0.2, K1=-1.8) @ 2.0 .. SOL(0.5, K=1.1) @ 3.0
/// ```
///
/// Compiled and ready for queries; covered span is (-0.1, 3.25).
pub fn fodo_cell() -> Beamline {
    let mut line = Beamline::named("fodo cell");
    line.push(Element::quadrupole("QF", 0.2, 0.0, 1.8).unwrap());
    line.push(Element::sector_bend("B1", 0.6, 1.0, 0.15).unwrap());
    line.push(Element::quadrupole("QD", 0.2, 2.0, -1.8).unwrap());
    line.push(Element::solenoid("SOL", 0.5, 3.0, 1.1).unwrap());
    line.compile();
    line
}

/// One quadrupole centered at 1.0 with length 0.2, the point-lookup
/// scenario: covered interval (0.9, 1.1).
pub fn single_quad_line() -> Beamline {
    let mut line = Beamline::new();
    line.push(Element::quadrupole("Q", 0.2, 1.0, 2.0).unwrap());
    line.compile();
    line
}

/// The historical demonstration set: Q1/Q2 quadrupoles, a solenoid and a
/// sector bend, uncompiled so tests can exercise assembly and reordering.
pub fn test_drive_elements() -> Vec<Element> {
    vec![
        Element::quadrupole("Q1", 0.2, 0.0, 2.0).unwrap(),
        Element::quadrupole("Q2", 0.2, 1.0, -2.0).unwrap(),
        Element::solenoid("Sol1", 0.5, 2.0, 1.4).unwrap(),
        Element::sector_bend("S_bend1", 0.6, 3.0, 0.31).unwrap(),
    ]
}
