//! Interval transport: matrix composition, tracking and scanning
//!
//! # The composition algorithm
//!
//! `matrix_between(s1, s2)` is the one genuinely algorithmic operation in
//! the crate. For s1 < s2 it partitions [s1, s2] into sub-segments by
//! walking the compiled sorted order with a running cursor:
//!
//! ```text
//! s1 ──┤ drift ├──[ element (partial) ]──┤ drift ├──[ element ]── s2
//! ```
//!
//! - any stretch not covered by an element (a gap between elements, or
//!   anything outside the covered span) is a field-free drift of that
//!   stretch's length;
//! - a covered stretch uses the element's matrix for exactly the covered
//!   length, entry aligned with the element's own entry (the per-kind
//!   formulas are parameterized by traversal length precisely so boundary
//!   elements straddling s1 or s2 can be cut);
//! - overlapping elements (never produced by a physical lattice, but not
//!   assumed away) are consumed in sorted order: a later element
//!   contributes only the part past the running cursor.
//!
//! Sub-segment matrices compose with the segment nearest s1 as the
//! rightmost factor, so applying the composite to a state vector equals
//! applying each sub-segment in physical traversal order.
//!
//! s1 = s2 is the identity. s1 > s2 is defined as the matrix inverse of
//! the forward composite; every shipped element matrix is unimodular, so
//! the inverse exists; the unreachable failure arm reports
//! [`NonInvertible`](crate::BeamlineError::NonInvertible) rather than
//! panicking inside a read-only query.
//!
//! The whole operation reads the compiled snapshot only: it never mutates
//! an element or the line.

use crate::beamline::Beamline;
use crate::error::BeamlineError;
use crate::optics::{drift_matrix, PhaseSpace, TransferMatrix};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sample count above which [`Beamline::scan`] switches to parallel
/// evaluation (only with the `parallel` feature; each sample point is an
/// independent read-only composition, so the split is embarrassingly
/// parallel).
#[cfg(feature = "parallel")]
const PARALLEL_SCAN_THRESHOLD: usize = 128;

// =================================================================================================
// Interval Composition
// =================================================================================================

impl Beamline {
    /// Composite 6×6 transfer matrix from position `s1` to position `s2`.
    ///
    /// # Errors
    ///
    /// - `NotCompiled` when the line has no current compiled index.
    /// - `NonInvertible` for a backward interval whose forward composite
    ///   has no inverse (cannot occur for the shipped element kinds).
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_rs::elements::Element;
    /// use beam_rs::beamline::Beamline;
    ///
    /// # fn main() -> Result<(), beam_rs::BeamlineError> {
    /// let mut line = Beamline::new();
    /// line.push(Element::quadrupole("Q", 0.2, 1.0, 2.0)?);
    /// line.compile();
    ///
    /// // Pure gap: a 0.4 m drift.
    /// let m = line.matrix_between(0.1, 0.5)?;
    /// assert!((m[(0, 1)] - 0.4).abs() < 1e-12);
    ///
    /// // Identity law.
    /// let m = line.matrix_between(0.3, 0.3)?;
    /// assert_eq!(m, beam_rs::optics::TransferMatrix::identity());
    /// # Ok(())
    /// # }
    /// ```
    pub fn matrix_between(&self, s1: f64, s2: f64) -> Result<TransferMatrix, BeamlineError> {
        let index = self.compiled()?;

        if s1 == s2 {
            return Ok(TransferMatrix::identity());
        }
        if s1 > s2 {
            let forward = self.matrix_between(s2, s1)?;
            return forward
                .try_inverse()
                .ok_or(BeamlineError::NonInvertible { s1, s2 });
        }

        let mut composite = TransferMatrix::identity();
        let mut cursor = s1;

        for rank in 0..index.order.len() {
            let covered_entry = cursor.max(index.starts[rank]);
            let covered_exit = s2.min(index.ends[rank]);
            if covered_exit <= covered_entry {
                continue;
            }

            // Gap (or out-of-range stretch) before this element.
            if covered_entry > cursor {
                composite = drift_matrix(covered_entry - cursor) * composite;
            }

            let element = &self.elements()[index.order[rank]];
            composite = element.matrix_over(covered_exit - covered_entry) * composite;
            cursor = covered_exit;
        }

        // Trailing uncovered stretch up to s2.
        if cursor < s2 {
            composite = drift_matrix(s2 - cursor) * composite;
        }

        Ok(composite)
    }

    /// Propagate a phase-space state from `s1` to `s2`.
    pub fn track(
        &self,
        state: &PhaseSpace,
        s1: f64,
        s2: f64,
    ) -> Result<PhaseSpace, BeamlineError> {
        Ok(self.matrix_between(s1, s2)? * state)
    }

    /// Sample the composite transfer matrix from `s_from` at `points`
    /// evenly spaced positions up to `s_to` (inclusive on both ends).
    ///
    /// With the `parallel` feature and a large sample count the positions
    /// are evaluated with rayon; each evaluation only reads the compiled
    /// snapshot, so the results are identical to the sequential path.
    ///
    /// # Errors
    ///
    /// - `EmptyScan` when `points` is zero.
    /// - `NotCompiled` when the line has no current compiled index.
    pub fn scan(&self, s_from: f64, s_to: f64, points: usize) -> Result<OpticsScan, BeamlineError> {
        if points == 0 {
            return Err(BeamlineError::EmptyScan { requested: points });
        }
        // Fail before spawning any work.
        self.compiled()?;

        let positions: Vec<f64> = if points == 1 {
            vec![s_from]
        } else {
            let step = (s_to - s_from) / (points - 1) as f64;
            (0..points).map(|i| s_from + step * i as f64).collect()
        };

        let matrices = self.scan_positions(s_from, &positions)?;

        Ok(OpticsScan {
            origin: s_from,
            positions,
            matrices,
        })
    }

    #[cfg(feature = "parallel")]
    fn scan_positions(
        &self,
        s_from: f64,
        positions: &[f64],
    ) -> Result<Vec<TransferMatrix>, BeamlineError> {
        if positions.len() > PARALLEL_SCAN_THRESHOLD {
            positions
                .par_iter()
                .map(|&s| self.matrix_between(s_from, s))
                .collect()
        } else {
            positions
                .iter()
                .map(|&s| self.matrix_between(s_from, s))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan_positions(
        &self,
        s_from: f64,
        positions: &[f64],
    ) -> Result<Vec<TransferMatrix>, BeamlineError> {
        positions
            .iter()
            .map(|&s| self.matrix_between(s_from, s))
            .collect()
    }
}

// =================================================================================================
// Optics Scan
// =================================================================================================

/// Sampled composite transfer matrices along a beamline.
///
/// Produced by [`Beamline::scan`]; consumed by the CSV export and
/// plotting helpers in [`output`](crate::output).
#[derive(Debug, Clone)]
pub struct OpticsScan {
    /// Origin position every matrix is taken from (m).
    pub origin: f64,

    /// Sample positions (m), index-aligned with `matrices`.
    pub positions: Vec<f64>,

    /// Composite matrix from `origin` to each sample position.
    pub matrices: Vec<TransferMatrix>,
}

impl OpticsScan {
    /// Number of sample points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the scan holds no samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Trace of a single matrix entry `(row, col)` across all samples.
    ///
    /// Useful for plotting e.g. m₁₁ or the dispersion entry m₁₆ against s.
    pub fn entry_trace(&self, row: usize, col: usize) -> Vec<f64> {
        self.matrices.iter().map(|m| m[(row, col)]).collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;

    fn tolerance_eq(a: &TransferMatrix, b: &TransferMatrix, tol: f64) -> bool {
        (0..6).all(|r| (0..6).all(|c| (a[(r, c)] - b[(r, c)]).abs() < tol))
    }

    fn sample_line() -> Beamline {
        let mut line = Beamline::named("sample");
        line.push(Element::quadrupole("QF", 0.2, 0.0, 2.0).unwrap());
        line.push(Element::quadrupole("QD", 0.2, 1.0, -2.0).unwrap());
        line.push(Element::solenoid("SOL", 0.5, 2.0, 1.4).unwrap());
        line.push(Element::sector_bend("B1", 0.6, 3.0, 0.31).unwrap());
        line.compile();
        line
    }

    #[test]
    fn test_identity_law() {
        let line = sample_line();
        for s in [-2.0, 0.0, 1.0, 2.5, 10.0] {
            assert_eq!(line.matrix_between(s, s).unwrap(), TransferMatrix::identity());
        }
    }

    #[test]
    fn test_requires_compile() {
        let mut line = sample_line();
        line.element_mut(0).unwrap().set_center(0.5);
        assert_eq!(
            line.matrix_between(0.0, 1.0).unwrap_err(),
            BeamlineError::NotCompiled
        );
    }

    #[test]
    fn test_gap_is_pure_drift() {
        let line = sample_line();
        // (0.1, 0.9) lies strictly between QF and QD.
        let m = line.matrix_between(0.3, 0.7).unwrap();
        assert_eq!(m, drift_matrix(0.7 - 0.3));
    }

    #[test]
    fn test_out_of_range_is_drift() {
        let line = sample_line();
        // Entirely upstream of the first element ((-0.1) is QF's start).
        let m = line.matrix_between(-3.0, -1.0).unwrap();
        assert_eq!(m, drift_matrix(2.0));

        // Up to (but not into) the first element: still pure drift.
        let m = line.matrix_between(-1.0, -0.1).unwrap();
        assert_eq!(m, drift_matrix(-0.1 - (-1.0)));
    }

    #[test]
    fn test_full_element_equals_element_matrix() {
        let line = sample_line();
        let qf = line.element(0).unwrap().clone();
        let m = line.matrix_between(qf.start(), qf.end()).unwrap();
        assert!(tolerance_eq(&m, &qf.matrix(), 1e-14));
    }

    #[test]
    fn test_composition_law_across_cuts() {
        let line = sample_line();
        // Cuts inside elements (0.0 in QF, 2.0 in SOL, 3.1 in B1) and in gaps.
        let cuts = [-0.5, -0.05, 0.0, 0.5, 1.0, 1.5, 2.0, 2.2, 2.9, 3.1, 3.5];
        for window in cuts.windows(3) {
            let (s1, s2, s3) = (window[0], window[1], window[2]);
            let whole = line.matrix_between(s1, s3).unwrap();
            let split =
                line.matrix_between(s2, s3).unwrap() * line.matrix_between(s1, s2).unwrap();
            assert!(
                tolerance_eq(&whole, &split, 1e-12),
                "composition law fails for cuts ({}, {}, {})",
                s1,
                s2,
                s3
            );
        }
    }

    #[test]
    fn test_backward_is_inverse_of_forward() {
        let line = sample_line();
        let forward = line.matrix_between(-0.5, 3.5).unwrap();
        let backward = line.matrix_between(3.5, -0.5).unwrap();
        let product = backward * forward;
        assert!(tolerance_eq(&product, &TransferMatrix::identity(), 1e-9));
    }

    #[test]
    fn test_track_applies_composite() {
        let line = sample_line();
        let state = PhaseSpace::from_column_slice(&[1e-3, 0.0, -1e-3, 2e-4, 0.0, 1e-4]);
        let direct = line.matrix_between(-0.5, 3.5).unwrap() * state;
        let tracked = line.track(&state, -0.5, 3.5).unwrap();
        assert_eq!(direct, tracked);
    }

    #[test]
    fn test_scan_positions_and_traces() {
        let line = sample_line();
        let scan = line.scan(-0.5, 3.5, 9).unwrap();

        assert_eq!(scan.len(), 9);
        assert_eq!(scan.origin, -0.5);
        assert!((scan.positions[0] + 0.5).abs() < 1e-15);
        assert!((scan.positions[8] - 3.5).abs() < 1e-15);

        // First sample is M(origin, origin) = identity.
        assert_eq!(scan.matrices[0], TransferMatrix::identity());

        let trace = scan.entry_trace(0, 0);
        assert_eq!(trace.len(), 9);
        assert_eq!(trace[0], 1.0);
    }

    #[test]
    fn test_scan_rejects_zero_points() {
        let line = sample_line();
        assert_eq!(
            line.scan(0.0, 1.0, 0).unwrap_err(),
            BeamlineError::EmptyScan { requested: 0 }
        );
    }

    #[test]
    fn test_single_point_scan() {
        let line = sample_line();
        let scan = line.scan(1.0, 2.0, 1).unwrap();
        assert_eq!(scan.len(), 1);
        assert_eq!(scan.positions[0], 1.0);
        assert_eq!(scan.matrices[0], TransferMatrix::identity());
    }
}
