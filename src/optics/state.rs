//! Phase-space state vectors
//!
//! A particle's linear-optics state is the 6-vector (x, x′, y, y′, z, δ):
//!
//! - **x, y** : transverse positions (m)
//! - **x′, y′** : transverse slopes dx/ds, dy/ds (rad)
//! - **z** : longitudinal offset from the reference particle (m)
//! - **δ** : relative momentum deviation Δp/p (dimensionless)
//!
//! The coordinate order is fixed across the whole crate; the index
//! constants below exist so call sites never hard-code raw indices.

use nalgebra::Vector6;

/// Phase-space state vector (x, x′, y, y′, z, δ).
pub type PhaseSpace = Vector6<f64>;

/// Index of the horizontal position x.
pub const X: usize = 0;
/// Index of the horizontal slope x′.
pub const XP: usize = 1;
/// Index of the vertical position y.
pub const Y: usize = 2;
/// Index of the vertical slope y′.
pub const YP: usize = 3;
/// Index of the longitudinal offset z.
pub const Z: usize = 4;
/// Index of the relative momentum deviation δ.
pub const DELTA: usize = 5;

/// Build a phase-space vector from named coordinates.
///
/// # Example
///
/// ```rust
/// use beam_rs::optics::state::{phase_space, X, DELTA};
///
/// let u = phase_space(1e-3, 0.0, 0.0, 0.0, 0.0, 1e-4);
/// assert_eq!(u[X], 1e-3);
/// assert_eq!(u[DELTA], 1e-4);
/// ```
pub fn phase_space(x: f64, xp: f64, y: f64, yp: f64, z: f64, delta: f64) -> PhaseSpace {
    PhaseSpace::new(x, xp, y, yp, z, delta)
}

// =================================================================================================
// Tests
// =================================================================================================
