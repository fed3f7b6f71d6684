//! Error types for beamline operations
//!
//! # Design notes
//!
//! * **Contextual**: variants carry the values that caused the failure
//!   (element name, positions), so callers can report without re-deriving.
//! * **Matchable**: every failure class is its own variant; nothing is
//!   reported as a bare string.
//! * **Synchronous**: all operations are pure numeric computation; there
//!   are no transient failures and no retry semantics.
//!
//! # Failure classes
//!
//! 1. **Geometry**: an element was constructed with impossible dimensions.
//! 2. **Staleness**: a spatial query ran before `compile()`, or after a
//!    mutation invalidated the compiled index.
//! 3. **Inversion**: a backward traversal whose forward composite has no
//!    inverse (defensive; the shipped element matrices are all unimodular).
//! 4. **Degenerate request**: a scan over zero sample points.

use std::error::Error;
use std::fmt::{Display, Formatter};

// =================================================================================================
// Error Type
// =================================================================================================

/// Error type for beamline construction and queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BeamlineError {
    /// Element dimensions are physically impossible: a negative length, or
    /// a sector bend with nonzero angle over zero arc length (undefined
    /// curvature).
    InvalidGeometry {
        /// Name of the offending element.
        element: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A spatial query (`element_at`, `matrix_between`, `track`, `scan`)
    /// was issued before a successful `compile()`, or after a mutation
    /// invalidated the compiled index. Recompile and retry.
    NotCompiled,

    /// Backward traversal (`s1 > s2`) requires inverting the forward
    /// composite matrix, and the inverse does not exist.
    NonInvertible {
        /// Requested start position (m).
        s1: f64,
        /// Requested end position (m).
        s2: f64,
    },

    /// A scan was requested with zero sample points.
    EmptyScan {
        /// Number of points requested.
        requested: usize,
    },
}

impl Display for BeamlineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BeamlineError::InvalidGeometry { element, reason } => {
                write!(f, "invalid geometry for element '{}': {}", element, reason)
            }
            BeamlineError::NotCompiled => {
                write!(
                    f,
                    "beamline index is stale or absent; call compile() before spatial queries"
                )
            }
            BeamlineError::NonInvertible { s1, s2 } => {
                write!(
                    f,
                    "backward transfer matrix from {} m to {} m is not invertible",
                    s1, s2
                )
            }
            BeamlineError::EmptyScan { requested } => {
                write!(f, "scan requires at least one sample point, got {}", requested)
            }
        }
    }
}

impl Error for BeamlineError {}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_context() {
        let err = BeamlineError::InvalidGeometry {
            element: "Q1".to_string(),
            reason: "negative length -0.2 m".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Q1"));
        assert!(msg.contains("negative length"));
    }

    #[test]
    fn test_not_compiled_mentions_compile() {
        assert!(BeamlineError::NotCompiled.to_string().contains("compile()"));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn Error> = Box::new(BeamlineError::EmptyScan { requested: 0 });
        assert!(err.to_string().contains("at least one"));
    }
}
