//! # Edge Deduplication
//!
//! Flattens cells into consecutive point pairs and keeps the first
//! occurrence of every unordered pair.

use std::collections::HashSet;

use tracing::debug;

use crate::extract::Cell;

/// An edge between two points, oriented as first encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the point the tube starts at
    pub start: u32,
    /// Index of the point the tube ends at
    pub end: u32,
}

impl Edge {
    /// Creates an edge.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Endpoint pair in ascending order, identical for both orientations.
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// Expands each cell into its wrapping pairs `(cell[i], cell[(i + 1) % n])`.
///
/// A two-point cell yields the pair and its reverse.
pub fn cell_pairs(cells: &[Cell]) -> impl Iterator<Item = Edge> + '_ {
    cells.iter().flat_map(|cell| {
        let n = cell.len();
        (0..n).map(move |i| Edge::new(cell[i], cell[(i + 1) % n]))
    })
}

/// Returns the unique edges of `cells` in first-occurrence order.
///
/// Each kept edge retains the orientation it was first seen with.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::{dedupe_edges, Edge};
///
/// let edges = dedupe_edges(&[vec![3, 1], vec![1, 3, 2]]);
/// assert_eq!(edges, vec![Edge::new(3, 1), Edge::new(3, 2), Edge::new(2, 1)]);
/// ```
pub fn dedupe_edges(cells: &[Cell]) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let edges: Vec<Edge> = cell_pairs(cells)
        .filter(|edge| seen.insert(edge.key()))
        .collect();
    debug!(cells = cells.len(), edges = edges.len(), "deduplicated edges");
    edges
}
