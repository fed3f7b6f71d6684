//! beam-rs: Linear Beamline Optics
//!
//! A library for first-order (linear) optics of particle-accelerator
//! beamlines: magnetic elements placed along a 1-D beam axis, each
//! described by an exact closed-form 6×6 transfer matrix, composed into
//! the transfer matrix between two arbitrary longitudinal positions.
//!
//! # Architecture
//!
//! beam-rs is built on two core principles:
//!
//! 1. **Separation of Elements and Transport**
//!    - Elements define the physics (per-device transfer matrices)
//!    - The beamline provides the geometry (ordering, indexing, composition)
//!
//! 2. **Compiled, loud-failing spatial queries**
//!    - `compile()` builds an immutable sorted index
//!    - Any mutation invalidates it; stale queries fail, never lie
//!
//! # Quick Start
//!
//! ```rust
//! use beam_rs::elements::Element;
//! use beam_rs::beamline::Beamline;
//!
//! # fn main() -> Result<(), beam_rs::BeamlineError> {
//! // 1. Construct elements (name, length, center position, strength)
//! let qf = Element::quadrupole("QF", 0.2, 0.0, 2.0)?;
//! let qd = Element::quadrupole("QD", 0.2, 1.0, -2.0)?;
//!
//! // 2. Assemble and compile a beamline
//! let mut line = Beamline::named("demo cell");
//! line.push(qf);
//! line.push(qd);
//! line.compile();
//!
//! // 3. Query it
//! let hit = line.element_at(1.0)?;          // -> Some(&QD)
//! let m = line.matrix_between(-0.5, 1.5)?;  // composite 6x6 transfer matrix
//! println!("found {:?}, m11 = {}", hit.map(|e| e.to_string()), m[(0, 0)]);
//! # Ok(())
//! # }
//! ```
//!
//! # Phase-space convention
//!
//! The six coordinates, in fixed order, are (x, x′, y, y′, z, δ):
//! transverse positions and slopes, longitudinal offset, and relative
//! momentum deviation. A transfer matrix maps the state at the entry of a
//! traversed segment to the state at its exit.
//!
//! # Modules
//!
//! - [`optics`]: core numeric types (transfer matrix, phase-space vector)
//! - [`elements`]: physical devices (drift, quadrupole, solenoid, sector bend)
//! - [`beamline`]: ordered container, spatial index, matrix composition
//! - [`output`]: CSV export and plotting of optics scans

// Core modules
pub mod optics;

pub mod elements;
pub mod beamline;

pub mod output;

mod error;

pub use error::BeamlineError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use beam_rs::prelude::*;
    //! ```
    pub use crate::optics::{PhaseSpace, TransferMatrix};
    pub use crate::elements::{Drift, Element, ElementKind, Quadrupole, SectorBend, Solenoid};
    pub use crate::beamline::{Beamline, OpticsScan};
    pub use crate::error::BeamlineError;
}
