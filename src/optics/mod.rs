//! Core optics types
//!
//! This module provides the numeric foundation shared by elements and the
//! beamline:
//!
//! - **Transfer matrix**: 6×6 linear operator mapping a phase-space state
//!   from one longitudinal position to another
//! - **Phase-space vector**: (x, x′, y, y′, z, δ)
//!
//! # Architecture
//!
//! Matrices and state vectors are **separate from the devices that produce
//! them**:
//! - An element produces its matrix from a traversal length (physics)
//! - The beamline multiplies matrices in traversal order (geometry)
//!
//! This separation allows the composition algorithm to treat every
//! sub-segment (gap drift or partial element) identically.
//!
//! # Example
//!
//! ```rust
//! use beam_rs::optics::{drift_matrix, PhaseSpace, X, XP};
//!
//! let m = drift_matrix(2.0);
//! let state = PhaseSpace::from_column_slice(&[1e-3, 2e-3, 0.0, 0.0, 0.0, 0.0]);
//! let out = m * state;
//!
//! // x grows by l * x'
//! assert!((out[X] - (1e-3 + 2.0 * 2e-3)).abs() < 1e-15);
//! assert!((out[XP] - 2e-3).abs() < 1e-15);
//! ```

// module declaration
pub mod matrix;
pub mod state;

// re-export commonly used types for convenience
pub use matrix::{compose, drift_matrix, transverse_block_determinants, TransferMatrix};
pub use state::{PhaseSpace, DELTA, X, XP, Y, YP, Z};
