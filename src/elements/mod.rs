//! Beamline elements
//!
//! All devices produce their 6×6 transfer matrix through
//! [`Element::matrix`](crate::elements::Element::matrix) /
//! [`Element::matrix_over`](crate::elements::Element::matrix_over). The
//! element owns the physics (closed-form matrix for a traversal length),
//! the beamline owns the geometry (where along the axis that traversal
//! happens).
//!
//! # Available Devices
//!
//! ## [`Drift`]: field-free gap
//!
//! Pure shear in both transverse planes. Also the fallback every other
//! device degenerates to when its strength parameter is exactly zero.
//!
//! ## [`Quadrupole`]: transverse focusing
//!
//! Geometric strength K1 (1/m²). The sign of K1 selects which plane is
//! focused (circular trig) and which is defocused (hyperbolic).
//!
//! ## [`Solenoid`]: coupled rotation
//!
//! Strength K (1/m). Couples the two transverse planes through a fully
//! populated 4×4 block.
//!
//! ## [`SectorBend`]: dipole bend
//!
//! Total bend angle α (rad) over the element's arc length. Produces
//! dispersion (coupling from δ into the bend plane) and path-length terms.
//!
//! # The Element wrapper
//!
//! [`Element`] ties a device kind to its place on the beamline: a name, a
//! physical length and a mutable center position. The kind set is closed
//! ([`ElementKind`]) so matrix dispatch is an exhaustive match, not open
//! inheritance.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod element;

pub mod drift;
pub mod quadrupole;
pub mod sector_bend;
pub mod solenoid;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use element::{by_center, Element, ElementKind};

pub use drift::Drift;
pub use quadrupole::Quadrupole;
pub use sector_bend::SectorBend;
pub use solenoid::Solenoid;
