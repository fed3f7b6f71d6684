//! Helper functions for integration tests

use beam_rs::optics::{PhaseSpace, TransferMatrix};

/// Assert that two transfer matrices are close (element-wise tolerance).
pub fn assert_matrices_close(a: &TransferMatrix, b: &TransferMatrix, tolerance: f64, message: &str) {
    for row in 0..6 {
        for col in 0..6 {
            let diff = (a[(row, col)] - b[(row, col)]).abs();
            assert!(
                diff < tolerance,
                "{}: entry ({}, {}) differs by {} (tolerance {})",
                message,
                row,
                col,
                diff,
                tolerance
            );
        }
    }
}

/// Assert that two phase-space vectors are close.
pub fn assert_phase_close(a: &PhaseSpace, b: &PhaseSpace, tolerance: f64, message: &str) {
    for i in 0..6 {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff < tolerance,
            "{}: coordinate {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
