//! Transfer matrices
//!
//! # Mathematical Background
//!
//! Under the linear (first-order) approximation, propagation of a particle
//! through any beamline segment is a linear map on the phase-space vector
//! (x, x′, y, y′, z, δ):
//!
//! ```text
//! u(s2) = M(s1 → s2) · u(s1)
//! ```
//!
//! where M is the 6×6 **transfer matrix** of the segment. Matrices of
//! consecutive segments compose by multiplication, with the segment nearest
//! the entry applied first (rightmost factor):
//!
//! ```text
//! M(s1 → s3) = M(s2 → s3) · M(s1 → s2)
//! ```
//!
//! The simplest segment is the field-free **drift** of length l, which
//! shears both transverse planes (x += l·x′, y += l·y′) and leaves (z, δ)
//! untouched. Every element kind in this crate degenerates to the drift at
//! zero strength, so the drift builder lives here rather than with the
//! devices.

use nalgebra::{matrix, Matrix6};

/// 6×6 linear transfer matrix over (x, x′, y, y′, z, δ).
pub type TransferMatrix = Matrix6<f64>;

/// Transfer matrix of a field-free drift of length `l` (meters).
///
/// Identity everywhere except the transverse shears x += l·x′ and
/// y += l·y′. `drift_matrix(0.0)` is the identity.
///
/// # Example
///
/// ```rust
/// use beam_rs::optics::drift_matrix;
///
/// let m = drift_matrix(1.5);
/// assert_eq!(m[(0, 1)], 1.5);
/// assert_eq!(m[(2, 3)], 1.5);
/// assert_eq!(m[(4, 4)], 1.0);
/// ```
pub fn drift_matrix(l: f64) -> TransferMatrix {
    matrix![
        1.0, l,   0.0, 0.0, 0.0, 0.0;
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0;
        0.0, 0.0, 1.0, l,   0.0, 0.0;
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0;
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0;
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0;
    ]
}

/// Compose sub-segment matrices given in physical traversal order.
///
/// The first matrix in the iterator is the one nearest the entry and is
/// applied first, i.e. the result is `M_last · … · M_first`. An empty
/// iterator composes to the identity.
///
/// # Example
///
/// ```rust
/// use beam_rs::optics::{compose, drift_matrix};
///
/// // Two consecutive drifts compose to one longer drift.
/// let m = compose([drift_matrix(1.0), drift_matrix(2.0)]);
/// assert_eq!(m, drift_matrix(3.0));
/// ```
pub fn compose<I>(segments: I) -> TransferMatrix
where
    I: IntoIterator<Item = TransferMatrix>,
{
    segments
        .into_iter()
        .fold(TransferMatrix::identity(), |acc, m| m * acc)
}

/// Determinants of the (x, x′) and (y, y′) 2×2 sub-blocks, in that order.
///
/// For any uncoupled element the determinant of each transverse block is
/// exactly 1 (symplecticity of the linearized motion); this helper exists
/// so tests and diagnostics can check it without slicing by hand.
pub fn transverse_block_determinants(m: &TransferMatrix) -> (f64, f64) {
    let det_x = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
    let det_y = m[(2, 2)] * m[(3, 3)] - m[(2, 3)] * m[(3, 2)];
    (det_x, det_y)
}

// =================================================================================================
// Tests
// =================================================================================================
