//! The beamline container and interval transport
//!
//! # Core Concepts
//!
//! ## The Architecture (GEOMETRY vs PHYSICS)
//!
//! The beamline layer separates concerns into three steps:
//!
//! 1. **Assembly**: elements are pushed in any order; the line owns them
//!    (arena storage, addressed by insertion index)
//!
//! 2. **Compilation** ([`Beamline::compile`]): sorts by center position,
//!    rebuilds the parallel `center`/`start`/`end` arrays and the
//!    adjacency implied by the sorted order. The compiled index is an
//!    immutable snapshot: every mutation invalidates it and queries on a
//!    stale line fail with
//!    [`NotCompiled`](crate::BeamlineError::NotCompiled) instead of
//!    returning stale answers.
//!
//! 3. **Queries**: point lookup ([`Beamline::element_at`]), neighbor
//!    lookup, and the composite transfer matrix over an arbitrary
//!    interval ([`Beamline::matrix_between`]).
//!
//! ## Interval composition
//!
//! `matrix_between(s1, s2)` partitions [s1, s2] into sub-segments walking
//! the sorted elements: gaps (and any stretch outside the covered span)
//! are field-free drifts, covered stretches use the element's matrix for
//! exactly the covered length. Sub-segment matrices are multiplied with
//! the segment nearest s1 as the rightmost factor. Backward intervals
//! (s1 > s2) are the matrix inverse of the forward composite.
//!
//! # Module Organization
//!
//! - **`line`**: the container (assembly, compilation, spatial index,
//!   point and neighbor lookup
//! - **`transport`**: interval composition, phase-space tracking and
//!   scanning along the line
//!
//! # Quick Start Example
//!
//! ```rust
//! use beam_rs::elements::Element;
//! use beam_rs::beamline::Beamline;
//!
//! # fn main() -> Result<(), beam_rs::BeamlineError> {
//! let mut line = Beamline::new();
//! line.push(Element::quadrupole("QF", 0.2, 0.0, 2.0)?);
//! line.push(Element::quadrupole("QD", 0.2, 1.0, -2.0)?);
//! line.compile();
//!
//! // Point lookup
//! assert_eq!(line.element_at(1.0)?.unwrap().name(), "QD");
//! assert!(line.element_at(0.5)?.is_none());
//!
//! // Composite transfer matrix across the whole covered span plus margins
//! let m = line.matrix_between(-0.5, 1.5)?;
//! assert!(m.try_inverse().is_some());
//! # Ok(())
//! # }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod line;
mod transport;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use line::Beamline;
pub use transport::OpticsScan;
