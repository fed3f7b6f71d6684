//! Solenoid magnet
//!
//! # Mathematical Background
//!
//! A solenoid's longitudinal field rotates the transverse plane while
//! focusing both directions, fully coupling (x, x′) and (y, y′). With
//! geometric strength K (1/m) and S = sin Kl, C = cos Kl, the exact 4×4
//! transverse map over a traversal length l is
//!
//! ```text
//! ⎡  C²      SC/K    SC      S²/K ⎤
//! ⎢ −KSC     C²     −KS²     SC   ⎥
//! ⎢ −SC     −S²/K    C²      SC/K ⎥
//! ⎣  KS²    −SC     −KSC     C²   ⎦
//! ```
//!
//! The (z, δ) block is the identity: to first order a solenoid transports
//! the longitudinal coordinates like a drift does. (The historical form of
//! this matrix circulating with a zero (z, δ) block is a transcription
//! omission; a zero block makes the matrix singular, which would forbid
//! backward traversal and break interval composition through a solenoid.)
//!
//! The K = 0 branch returns the drift matrix; the entries above divide by
//! K, so zero strength is an explicit branch.

use nalgebra::matrix;

use crate::optics::{drift_matrix, TransferMatrix};

/// Solenoid magnet with geometric strength K (1/m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solenoid {
    /// Geometric strength K (1/m).
    pub k: f64,
}

impl Solenoid {
    /// Create a new solenoid of strength `k` (1/m).
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Transfer matrix for a traversal of length `l` (meters).
    ///
    /// K = 0 yields the drift matrix of the same length.
    pub fn matrix(&self, l: f64) -> TransferMatrix {
        if self.k == 0.0 {
            return drift_matrix(l);
        }

        let k = self.k;
        let (s, c) = (k * l).sin_cos();

        matrix![
            c * c,       s * c / k,   s * c,       s * s / k, 0.0, 0.0;
            -k * s * c,  c * c,       -k * s * s,  s * c,     0.0, 0.0;
            -s * c,      -s * s / k,  c * c,       s * c / k, 0.0, 0.0;
            k * s * s,   -s * c,      -k * s * c,  c * c,     0.0, 0.0;
            0.0,         0.0,         0.0,         0.0,       1.0, 0.0;
            0.0,         0.0,         0.0,         0.0,       0.0, 1.0;
        ]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
