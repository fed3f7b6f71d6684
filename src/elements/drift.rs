//! Field-free drift space
//!
//! # Mathematical Background
//!
//! With no field, the linearized equations of motion are x″ = y″ = 0: the
//! slopes are constant and the positions shear linearly,
//!
//! ```text
//! x(l) = x(0) + l·x′(0)        y(l) = y(0) + l·y′(0)
//! ```
//!
//! (z, δ) are untouched at this order. The drift is the degenerate case of
//! every other device: a quadrupole with K1 = 0, a solenoid with K = 0 and
//! a sector bend with α = 0 all reduce to it, which is why those kinds
//! branch to this matrix instead of dividing by their strength.

use crate::optics::{drift_matrix, TransferMatrix};

/// Field-free drift space.
///
/// Carries no parameters of its own; the traversal length is supplied per
/// matrix evaluation, the physical length lives on the wrapping
/// [`Element`](crate::elements::Element).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drift;

impl Drift {
    /// Create a new drift.
    pub fn new() -> Self {
        Self
    }

    /// Transfer matrix for a traversal of length `l` (meters).
    pub fn matrix(&self, l: f64) -> TransferMatrix {
        drift_matrix(l)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
