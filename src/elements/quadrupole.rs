//! Quadrupole magnet
//!
//! # Mathematical Background
//!
//! A quadrupole field gives the linearized equations of motion
//!
//! ```text
//! x″ + K1·x = 0        y″ − K1·y = 0
//! ```
//!
//! with geometric strength K1 (1/m²). One transverse plane sees a restoring
//! force (focusing, circular trig solutions), the other an anti-restoring
//! force (defocusing, hyperbolic solutions). With k = √|K1| the exact
//! solutions over a traversal length l are, for the focusing plane,
//!
//! ```text
//! ⎡  cos kl     sin kl / k ⎤
//! ⎣ −k·sin kl   cos kl     ⎦
//! ```
//!
//! and for the defocusing plane the same block with cosh/sinh and a
//! positive lower-left sign. K1 > 0 focuses x and defocuses y; K1 < 0
//! swaps the planes. (z, δ) are uncoupled at this order.
//!
//! The K1 = 0 branch returns the drift matrix directly: the formulas
//! above divide by k, so the zero-strength case is an explicit branch, not
//! a limit evaluated numerically.

use nalgebra::matrix;

use crate::optics::{drift_matrix, TransferMatrix};

/// Quadrupole magnet with geometric strength K1 (1/m²).
///
/// The sign of K1 selects the focused plane: positive focuses
/// horizontally, negative vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrupole {
    /// Geometric focusing strength K1 (1/m²).
    pub k1: f64,
}

impl Quadrupole {
    /// Create a new quadrupole of strength `k1` (1/m²).
    pub fn new(k1: f64) -> Self {
        Self { k1 }
    }

    /// Transfer matrix for a traversal of length `l` (meters).
    ///
    /// K1 = 0 yields the drift matrix of the same length.
    pub fn matrix(&self, l: f64) -> TransferMatrix {
        if self.k1 == 0.0 {
            return drift_matrix(l);
        }

        let k = self.k1.abs().sqrt();
        let (sin_kl, cos_kl) = (k * l).sin_cos();
        let sinh_kl = (k * l).sinh();
        let cosh_kl = (k * l).cosh();

        if self.k1 > 0.0 {
            matrix![
                cos_kl,      sin_kl / k,  0.0,         0.0,         0.0, 0.0;
                -k * sin_kl, cos_kl,      0.0,         0.0,         0.0, 0.0;
                0.0,         0.0,         cosh_kl,     sinh_kl / k, 0.0, 0.0;
                0.0,         0.0,         k * sinh_kl, cosh_kl,     0.0, 0.0;
                0.0,         0.0,         0.0,         0.0,         1.0, 0.0;
                0.0,         0.0,         0.0,         0.0,         0.0, 1.0;
            ]
        } else {
            matrix![
                cosh_kl,     sinh_kl / k, 0.0,         0.0,        0.0, 0.0;
                k * sinh_kl, cosh_kl,     0.0,         0.0,        0.0, 0.0;
                0.0,         0.0,         cos_kl,      sin_kl / k, 0.0, 0.0;
                0.0,         0.0,         -k * sin_kl, cos_kl,     0.0, 0.0;
                0.0,         0.0,         0.0,         0.0,        1.0, 0.0;
                0.0,         0.0,         0.0,         0.0,        0.0, 1.0;
            ]
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
