//! Shared helpers for integration tests.

use arbor_core::Edge;

/// Builds edges from `(vertex1, vertex2, weight)` triples.
#[must_use]
pub fn edges(pairs: &[(usize, usize, f64)]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|&(vertex1, vertex2, weight)| {
            Edge::try_new(vertex1, vertex2, weight).expect("fixture edge must be valid")
        })
        .collect()
}

/// The complete graph on four vertices; its MST costs 6 and it has 16
/// spanning trees.
#[must_use]
pub fn square_with_diagonals() -> Vec<Edge> {
    edges(&[
        (1, 2, 1.0),
        (2, 3, 2.0),
        (3, 4, 4.0),
        (4, 1, 3.0),
        (1, 3, 2.0),
        (2, 4, 3.0),
    ])
}
