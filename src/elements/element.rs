//! The element wrapper and the closed kind enum
//!
//! # Design
//!
//! Dispatch over the device kind is a **closed tagged enum**, not a trait
//! object: the set of linear elements is small and fixed, and an
//! exhaustive `match` guarantees a new kind cannot be added without
//! deciding its matrix. Each variant carries the device's parameter struct
//! and delegates to its closed-form `matrix` implementation.
//!
//! [`Element`] adds what a device needs to live on a beamline: a name, a
//! physical length and a center position along the axis. Geometry is
//! validated at construction so matrix evaluation never has to guard
//! against negative lengths or an undefined bend curvature.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::elements::{Drift, Quadrupole, SectorBend, Solenoid};
use crate::error::BeamlineError;
use crate::optics::TransferMatrix;

// =================================================================================================
// Element Kind (Closed Tagged Enum)
// =================================================================================================

/// Kind of a beamline element, carrying the device's parameters.
///
/// # Extensibility
///
/// The enum is intentionally closed: matrix dispatch is an exhaustive
/// match, so adding a kind forces every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    /// Field-free drift space.
    Drift(Drift),

    /// Quadrupole with geometric strength K1 (1/m²).
    Quadrupole(Quadrupole),

    /// Solenoid with geometric strength K (1/m).
    Solenoid(Solenoid),

    /// Sector bend with total angle α (rad) over the element arc length.
    SectorBend(SectorBend),
}

impl ElementKind {
    /// Kind name used for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Drift(_) => "Drift",
            ElementKind::Quadrupole(_) => "Quadrupole",
            ElementKind::Solenoid(_) => "Solenoid",
            ElementKind::SectorBend(_) => "SectorBend",
        }
    }

    /// Transfer matrix for a traversal of length `l` out of an element of
    /// physical length `element_length`.
    ///
    /// Only the sector bend needs `element_length` (it fixes the
    /// curvature); the uniform kinds are parameterized by `l` alone.
    pub fn matrix(&self, l: f64, element_length: f64) -> TransferMatrix {
        match self {
            ElementKind::Drift(drift) => drift.matrix(l),
            ElementKind::Quadrupole(quad) => quad.matrix(l),
            ElementKind::Solenoid(sol) => sol.matrix(l),
            ElementKind::SectorBend(bend) => bend.matrix(l, element_length),
        }
    }
}

// =================================================================================================
// Element
// =================================================================================================

/// A physical device placed on the beamline.
///
/// Carries the device kind plus the geometry the beamline needs: a name
/// (unique by convention, not enforced), a physical length L ≥ 0 and the
/// position of its longitudinal midpoint. The derived interval is
/// `start = center − L/2`, `end = center + L/2`.
///
/// # Example
///
/// ```rust
/// use beam_rs::elements::Element;
///
/// let q1 = Element::quadrupole("Q1", 0.2, 0.0, 2.0).unwrap();
/// assert_eq!(q1.to_string(), "Quadrupole.Q1");
/// assert_eq!(q1.start(), -0.1);
/// assert_eq!(q1.end(), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    length: f64,
    center: f64,
    kind: ElementKind,
}

impl Element {
    /// Create an element of an explicit kind.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` when `length` is negative or not finite, or for a
    /// sector bend with nonzero angle over zero length (the curvature
    /// α/L would be undefined).
    pub fn new(
        name: impl Into<String>,
        length: f64,
        center: f64,
        kind: ElementKind,
    ) -> Result<Self, BeamlineError> {
        let name = name.into();

        if !length.is_finite() || length < 0.0 {
            return Err(BeamlineError::InvalidGeometry {
                element: name,
                reason: format!("length must be finite and non-negative, got {} m", length),
            });
        }

        if let ElementKind::SectorBend(bend) = kind {
            if bend.angle != 0.0 && length == 0.0 {
                return Err(BeamlineError::InvalidGeometry {
                    element: name,
                    reason: format!(
                        "bend angle {} rad over zero arc length has undefined curvature",
                        bend.angle
                    ),
                });
            }
        }

        Ok(Self {
            name,
            length,
            center,
            kind,
        })
    }

    // ====================================== Factory methods ======================================

    /// Create a drift space.
    pub fn drift(name: impl Into<String>, length: f64, center: f64) -> Result<Self, BeamlineError> {
        Self::new(name, length, center, ElementKind::Drift(Drift::new()))
    }

    /// Create a quadrupole of geometric strength `k1` (1/m²).
    pub fn quadrupole(
        name: impl Into<String>,
        length: f64,
        center: f64,
        k1: f64,
    ) -> Result<Self, BeamlineError> {
        Self::new(name, length, center, ElementKind::Quadrupole(Quadrupole::new(k1)))
    }

    /// Create a solenoid of geometric strength `k` (1/m).
    pub fn solenoid(
        name: impl Into<String>,
        length: f64,
        center: f64,
        k: f64,
    ) -> Result<Self, BeamlineError> {
        Self::new(name, length, center, ElementKind::Solenoid(Solenoid::new(k)))
    }

    /// Create a sector bend of total angle `angle` (rad).
    pub fn sector_bend(
        name: impl Into<String>,
        length: f64,
        center: f64,
        angle: f64,
    ) -> Result<Self, BeamlineError> {
        Self::new(name, length, center, ElementKind::SectorBend(SectorBend::new(angle)))
    }

    // ========================================== Queries ==========================================

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical length L (m).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position of the longitudinal midpoint (m).
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Device kind and parameters.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Entry position, `center − L/2` (m).
    pub fn start(&self) -> f64 {
        self.center - self.length / 2.0
    }

    /// Exit position, `center + L/2` (m).
    pub fn end(&self) -> f64 {
        self.center + self.length / 2.0
    }

    /// Reposition the element's midpoint.
    ///
    /// On an element owned by a compiled
    /// [`Beamline`](crate::beamline::Beamline) this must go through the
    /// beamline's mutable accessors, which invalidate the compiled index.
    pub fn set_center(&mut self, center: f64) {
        self.center = center;
    }

    // ========================================== Physics ==========================================

    /// Transfer matrix over the full physical length.
    pub fn matrix(&self) -> TransferMatrix {
        self.kind.matrix(self.length, self.length)
    }

    /// Transfer matrix for a partial traversal of length `l`, entry
    /// aligned with the element's own entry.
    ///
    /// This is what interval composition uses for boundary elements that
    /// straddle the requested range.
    pub fn matrix_over(&self, l: f64) -> TransferMatrix {
        self.kind.matrix(l, self.length)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.kind.name(), self.name)
    }
}

/// Total order over elements by center position.
///
/// `f64::total_cmp` makes the order total even in the presence of special
/// values, which keeps `sort_by` deterministic.
pub fn by_center(a: &Element, b: &Element) -> Ordering {
    a.center.total_cmp(&b.center)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::drift_matrix;

    #[test]
    fn test_display_is_kind_dot_name() {
        let sol = Element::solenoid("Sol1", 0.5, 2.0, 1.4).unwrap();
        assert_eq!(sol.to_string(), "Solenoid.Sol1");
        assert_eq!(format!("{:?}", sol.kind().name()), "\"Solenoid\"");
    }

    #[test]
    fn test_start_end_derived_from_center() {
        let q = Element::quadrupole("Q", 0.2, 1.0, 2.0).unwrap();
        assert!((q.start() - 0.9).abs() < 1e-15);
        assert!((q.end() - 1.1).abs() < 1e-15);
    }

    #[test]
    fn test_negative_length_rejected() {
        let err = Element::drift("D", -0.1, 0.0).unwrap_err();
        assert!(matches!(err, BeamlineError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_bend_with_zero_length_rejected() {
        let err = Element::sector_bend("B", 0.0, 0.0, 0.31).unwrap_err();
        assert!(matches!(err, BeamlineError::InvalidGeometry { .. }));

        // zero angle over zero length is a degenerate but legal marker
        assert!(Element::sector_bend("B0", 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_full_matrix_zero_length_is_identity() {
        for element in [
            Element::drift("D", 0.0, 0.0).unwrap(),
            Element::quadrupole("Q", 0.0, 0.0, 2.0).unwrap(),
            Element::solenoid("S", 0.0, 0.0, 1.4).unwrap(),
            Element::sector_bend("B", 0.0, 0.0, 0.0).unwrap(),
        ] {
            assert_eq!(element.matrix(), TransferMatrix::identity(), "{}", element);
        }
    }

    #[test]
    fn test_zero_strength_kinds_match_drift() {
        let length = 0.7;
        let reference = drift_matrix(length);

        for element in [
            Element::quadrupole("Q0", length, 0.0, 0.0).unwrap(),
            Element::solenoid("S0", length, 0.0, 0.0).unwrap(),
            Element::sector_bend("B0", length, 0.0, 0.0).unwrap(),
        ] {
            assert_eq!(element.matrix(), reference, "{}", element);
        }
    }

    #[test]
    fn test_ordering_by_center() {
        let a = Element::drift("A", 0.1, -1.0).unwrap();
        let b = Element::drift("B", 0.1, 1.0).unwrap();
        assert_eq!(by_center(&a, &b), Ordering::Less);
        assert_eq!(by_center(&b, &a), Ordering::Greater);
        assert_eq!(by_center(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_set_center_moves_interval() {
        let mut q = Element::quadrupole("Q2", 0.2, 1.0, -2.0).unwrap();
        q.set_center(-1.0);
        assert!((q.start() + 1.1).abs() < 1e-15);
        assert!((q.end() + 0.9).abs() < 1e-15);
    }
}
