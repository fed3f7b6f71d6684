//! Sector bend (uniform dipole)
//!
//! # Mathematical Background
//!
//! A sector dipole bends the reference orbit by a total angle α over the
//! element's arc length L, i.e. with constant curvature h = α/L. A
//! traversal of length l ≤ L sweeps the angle θ = h·l. With C = cos θ and
//! S = sin θ the exact map is
//!
//! ```text
//! ⎡  C       S/h    0  0  0   (1−C)/h  ⎤
//! ⎢ −h·S     C      0  0  0    S       ⎥
//! ⎢  0       0      1  l  0    0       ⎥
//! ⎢  0       0      0  1  0    0       ⎥
//! ⎢ −S    −(1−C)/h  0  0  1  −(θ−S)/h  ⎥
//! ⎣  0       0      0  0  0    1       ⎦
//! ```
//!
//! The bend plane is horizontal: the dispersion column couples momentum
//! deviation δ into (x, x′), and the path-length row couples (x, x′) into
//! z, since an off-momentum particle rides a longer or shorter orbit. The
//! vertical plane is an uncoupled drift at this order (no gradient, no
//! fringe fields).
//!
//! Because h stays fixed and only θ scales with the traversal length,
//! splitting a bend at any interior point composes exactly:
//! M(l₁ + l₂) = M(l₂)·M(l₁). The matrix is symplectic (each diagonal 2×2
//! block is unimodular and the dispersion/path-length terms are conjugate).
//!
//! The α = 0 branch returns the drift matrix; the entries above divide by
//! h, so zero angle is an explicit branch.

use nalgebra::matrix;

use crate::optics::{drift_matrix, TransferMatrix};

/// Uniform sector bend with total bend angle α (rad) over the element's
/// arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorBend {
    /// Total bend angle of the central orbit α (rad).
    pub angle: f64,
}

impl SectorBend {
    /// Create a new sector bend of total angle `angle` (rad).
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Transfer matrix for a traversal of length `l` (meters) out of a
    /// total arc length `arc_length`.
    ///
    /// `arc_length` fixes the curvature h = α/arc_length; the traversal
    /// sweeps θ = h·l. α = 0 yields the drift matrix of length `l`.
    /// For nonzero α the arc length must be positive; the wrapping
    /// [`Element`](crate::elements::Element) enforces this at
    /// construction.
    pub fn matrix(&self, l: f64, arc_length: f64) -> TransferMatrix {
        if self.angle == 0.0 {
            return drift_matrix(l);
        }

        let h = self.angle / arc_length;
        let theta = h * l;
        let (s, c) = theta.sin_cos();

        matrix![
            c,        s / h,          0.0, 0.0, 0.0, (1.0 - c) / h;
            -h * s,   c,              0.0, 0.0, 0.0, s;
            0.0,      0.0,            1.0, l,   0.0, 0.0;
            0.0,      0.0,            0.0, 1.0, 0.0, 0.0;
            -s,       -(1.0 - c) / h, 0.0, 0.0, 1.0, -(theta - s) / h;
            0.0,      0.0,            0.0, 0.0, 0.0, 1.0;
        ]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
