//! The beamline container
//!
//! # Design
//!
//! The line is an **arena plus a sorted index**: elements live in a plain
//! `Vec` in insertion order (stable addresses for the lifetime of the
//! line), and `compile()` builds a separate permutation sorted by center
//! position together with parallel `center`/`start`/`end` arrays.
//! "Previous" and "next" are index arithmetic over the sorted permutation,
//! not stored back-references, so there is no pointer graph to keep
//! consistent.
//!
//! # Staleness discipline
//!
//! Every mutating operation (push, insert, remove, mutable element
//! access) drops the compiled index. Spatial queries on a line without a
//! current index fail with [`BeamlineError::NotCompiled`]: loudly, never
//! with stale answers. `compile()` is idempotent and cheap to re-run.

use crate::elements::{by_center, Element};
use crate::error::BeamlineError;

// =================================================================================================
// Compiled Index
// =================================================================================================

/// Snapshot of the sorted spatial index, rebuilt by [`Beamline::compile`].
///
/// All arrays are index-aligned with the sorted sequence: entry `rank`
/// describes the element `elements[order[rank]]`.
#[derive(Debug, Clone)]
pub(crate) struct CompiledIndex {
    /// Indices into the element arena, sorted by center position.
    pub(crate) order: Vec<usize>,

    /// Center position per sorted rank.
    pub(crate) centers: Vec<f64>,

    /// Entry position (`center − L/2`) per sorted rank.
    pub(crate) starts: Vec<f64>,

    /// Exit position (`center + L/2`) per sorted rank.
    pub(crate) ends: Vec<f64>,

    /// Whether the sorted intervals are pairwise disjoint. Physical
    /// beamlines always are; the flag only selects the lookup strategy,
    /// overlap is never an error.
    pub(crate) disjoint: bool,

    /// Covered span (min start, max end), `None` for an empty line.
    pub(crate) span: Option<(f64, f64)>,
}

// =================================================================================================
// Beamline
// =================================================================================================

/// Ordered container of beamline elements with a compiled spatial index.
///
/// # Example
///
/// ```rust
/// use beam_rs::elements::Element;
/// use beam_rs::beamline::Beamline;
///
/// # fn main() -> Result<(), beam_rs::BeamlineError> {
/// let mut line = Beamline::named("channel 1");
/// line.push(Element::quadrupole("Q1", 0.2, 0.0, 2.0)?);
/// line.push(Element::quadrupole("Q2", 0.2, 1.0, -2.0)?);
/// line.compile();
///
/// let names: Vec<_> = line.iter_sorted()?.map(|e| e.name().to_owned()).collect();
/// assert_eq!(names, ["Q1", "Q2"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Beamline {
    name: Option<String>,
    elements: Vec<Element>,
    compiled: Option<CompiledIndex>,
}

impl Beamline {
    /// Create an empty, unnamed beamline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty beamline with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            elements: Vec::new(),
            compiled: None,
        }
    }

    /// Beamline name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // ========================================= Assembly ==========================================

    /// Append an element. Invalidates the compiled index.
    pub fn push(&mut self, element: Element) {
        self.compiled = None;
        self.elements.push(element);
    }

    /// Insert an element at insertion-order position `index`. Invalidates
    /// the compiled index.
    ///
    /// Insertion order is irrelevant to queries (compilation sorts by
    /// center); this exists for list-like assembly workflows.
    pub fn insert(&mut self, index: usize, element: Element) {
        self.compiled = None;
        self.elements.insert(index, element);
    }

    /// Remove and return the element at insertion-order position `index`.
    /// Invalidates the compiled index.
    pub fn remove(&mut self, index: usize) -> Element {
        self.compiled = None;
        self.elements.remove(index)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the line holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Shared access to the element at insertion-order position `index`.
    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Mutable access to the element at insertion-order position `index`.
    ///
    /// Invalidates the compiled index unconditionally: repositioning an
    /// element (or changing its length or strength) changes the spatial
    /// index, and the line cannot observe what the caller does with the
    /// reference.
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.compiled = None;
        self.elements.get_mut(index)
    }

    // ======================================== Compilation ========================================

    /// Sort elements by center position and rebuild the spatial index.
    ///
    /// Idempotent and safe to call repeatedly; must be called before any
    /// spatial query is trusted. The sort is stable, so elements with
    /// equal centers keep their insertion order.
    pub fn compile(&mut self) {
        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by(|&a, &b| by_center(&self.elements[a], &self.elements[b]));

        let centers: Vec<f64> = order.iter().map(|&i| self.elements[i].center()).collect();
        let starts: Vec<f64> = order.iter().map(|&i| self.elements[i].start()).collect();
        let ends: Vec<f64> = order.iter().map(|&i| self.elements[i].end()).collect();

        let disjoint = (1..order.len())
            .all(|rank| ends[rank - 1] <= starts[rank] && starts[rank - 1] <= starts[rank]);

        let span = if order.is_empty() {
            None
        } else {
            let min_start = starts.iter().copied().fold(f64::INFINITY, f64::min);
            let max_end = ends.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some((min_start, max_end))
        };

        self.compiled = Some(CompiledIndex {
            order,
            centers,
            starts,
            ends,
            disjoint,
            span,
        });
    }

    /// Whether the compiled index is current.
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }

    /// The compiled index, or `NotCompiled` when absent or invalidated.
    pub(crate) fn compiled(&self) -> Result<&CompiledIndex, BeamlineError> {
        self.compiled.as_ref().ok_or(BeamlineError::NotCompiled)
    }

    // ========================================= Queries ===========================================

    /// Iterate elements in sorted (beamline) order.
    pub fn iter_sorted(&self) -> Result<impl Iterator<Item = &Element> + '_, BeamlineError> {
        let index = self.compiled()?;
        Ok(index.order.iter().map(move |&i| &self.elements[i]))
    }

    /// Element at sorted rank `rank` (0 = most upstream).
    pub fn sorted(&self, rank: usize) -> Result<Option<&Element>, BeamlineError> {
        let index = self.compiled()?;
        Ok(index.order.get(rank).map(|&i| &self.elements[i]))
    }

    /// Previous and next neighbors of the element at sorted rank `rank`.
    ///
    /// Adjacency is index arithmetic over the sorted order; the ends of
    /// the line have `None` on the open side.
    pub fn neighbors(
        &self,
        rank: usize,
    ) -> Result<(Option<&Element>, Option<&Element>), BeamlineError> {
        let index = self.compiled()?;

        let previous = rank
            .checked_sub(1)
            .and_then(|r| index.order.get(r))
            .map(|&i| &self.elements[i]);
        let next = index.order.get(rank + 1).map(|&i| &self.elements[i]);

        Ok((previous, next))
    }

    /// Center positions per sorted rank.
    pub fn centers(&self) -> Result<&[f64], BeamlineError> {
        Ok(&self.compiled()?.centers)
    }

    /// Entry positions per sorted rank.
    pub fn starts(&self) -> Result<&[f64], BeamlineError> {
        Ok(&self.compiled()?.starts)
    }

    /// Exit positions per sorted rank.
    pub fn ends(&self) -> Result<&[f64], BeamlineError> {
        Ok(&self.compiled()?.ends)
    }

    /// Covered span (first entry, last exit), `None` for an empty line.
    pub fn span(&self) -> Result<Option<(f64, f64)>, BeamlineError> {
        Ok(self.compiled()?.span)
    }

    /// The element whose open interval `(start, end)` strictly contains
    /// position `s`, or `None` when no element covers `s`.
    ///
    /// Physical beamlines have disjoint elements, and for those the
    /// lookup is a binary search over the sorted entry positions,
    /// O(log n). Should intervals overlap (the line does not assume they
    /// cannot), the lookup falls back to a linear scan in sorted order and
    /// returns the first match. That scan is the documented performance floor.
    pub fn element_at(&self, s: f64) -> Result<Option<&Element>, BeamlineError> {
        let index = self.compiled()?;

        if index.disjoint {
            let p = index.starts.partition_point(|&start| start < s);
            if p == 0 {
                return Ok(None);
            }
            let rank = p - 1;
            if index.ends[rank] > s {
                return Ok(Some(&self.elements[index.order[rank]]));
            }
            return Ok(None);
        }

        for rank in 0..index.order.len() {
            if index.starts[rank] < s && s < index.ends[rank] {
                return Ok(Some(&self.elements[index.order[rank]]));
            }
        }
        Ok(None)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
