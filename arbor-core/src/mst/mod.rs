//! Minimum spanning tree construction (Kruskal).
//!
//! Edges are stably sorted by weight, so among equal weights the caller's
//! input order decides which edge is accepted first. That makes the seed tree
//! handed to the exchange enumerator deterministic for a given edge list.

use tracing::{Span, debug, field, instrument};

use crate::{Edge, TreeKey, UnionFind};

/// A spanning tree (or, for disconnected input, a spanning forest) together
/// with its total weight.
///
/// Trees are immutable once built; the exchange enumerator derives new trees
/// by copying edge sequences rather than editing stored ones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_cost: f64,
    vertex_count: usize,
}

impl SpanningTree {
    /// Builds a tree from an edge sequence. The cost depends only on the
    /// multiset of weights, never on the sequence order.
    pub(crate) fn from_edges(edges: Vec<Edge>, vertex_count: usize) -> Self {
        let total_cost = ascending_sum(&edges);
        Self {
            edges,
            total_cost,
            vertex_count,
        }
    }

    /// Returns the tree edges in the order they were accepted or exchanged.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the edge weights, added in ascending weight order.
    ///
    /// Trees with the same weights therefore report bit-identical costs, and
    /// the Kruskal tree never reports more than any other spanning tree of
    /// the same input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> f64 { self.total_cost }

    /// Returns the working vertex count (the largest identifier in the input).
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the tree holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the tree has exactly `vertex_count - 1` edges and
    /// therefore connects every vertex in `1..=vertex_count`.
    ///
    /// Kruskal never reports disconnection as an error; callers needing a
    /// strict spanning tree check this instead.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Returns the order-independent identity of this tree.
    #[must_use]
    pub fn key(&self) -> TreeKey {
        TreeKey::from_edges(&self.edges)
    }

    /// Consumes the tree, returning its edges and total cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge>, f64) {
        (self.edges, self.total_cost)
    }
}

/// Returns the working vertex count for `edges`: the largest identifier seen.
///
/// Identifiers need not be contiguous, so gaps still count towards the total.
/// Returns 0 for an empty edge list.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, vertex_count};
///
/// let edges = [Edge::try_new(1, 7, 2.0)?, Edge::try_new(2, 3, 1.0)?];
/// assert_eq!(vertex_count(&edges), 7);
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[must_use]
pub fn vertex_count(edges: &[Edge]) -> usize {
    edges.iter().map(Edge::max_vertex).max().unwrap_or(0)
}

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// A disconnected graph yields a minimum spanning forest with fewer than
/// `n - 1` edges; see [`SpanningTree::is_spanning`]. An empty edge list
/// yields an empty tree of cost 0.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, compute_mst};
///
/// let edges = [
///     Edge::try_new(1, 2, 1.0)?,
///     Edge::try_new(2, 3, 2.0)?,
///     Edge::try_new(1, 3, 5.0)?,
/// ];
/// let tree = compute_mst(&edges);
/// assert_eq!(tree.total_cost(), 3.0);
/// assert!(tree.is_spanning());
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[instrument(
    name = "mst.compute",
    skip(edges),
    fields(edges = edges.len(), vertices = field::Empty, accepted = field::Empty),
)]
#[must_use]
pub fn compute_mst(edges: &[Edge]) -> SpanningTree {
    let vertices = vertex_count(edges);
    let span = Span::current();
    span.record("vertices", vertices);

    if edges.is_empty() {
        debug!("edge list is empty, returning empty tree");
        return SpanningTree::from_edges(Vec::new(), 0);
    }

    let tree = kruskal(edges, vertices);
    span.record("accepted", tree.len());
    if !tree.is_spanning() {
        debug!(
            accepted = tree.len(),
            required = vertices.saturating_sub(1),
            "input does not connect every vertex, returning spanning forest"
        );
    }
    tree
}

fn kruskal(edges: &[Edge], vertices: usize) -> SpanningTree {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    // `sort_by` is stable: equal weights keep their input order.
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let required = vertices.saturating_sub(1);
    let mut sets = UnionFind::new(vertices);
    let mut accepted = Vec::with_capacity(required);

    for edge in sorted {
        if accepted.len() == required {
            break;
        }
        if sets.union(edge.vertex1(), edge.vertex2()) {
            accepted.push(*edge);
        }
    }

    SpanningTree::from_edges(accepted, vertices)
}

/// Sums the weights smallest first.
///
/// Rounded addition is monotone in each operand, and the greedy tree's
/// i-th smallest weight never exceeds any other spanning tree's i-th
/// smallest weight, so this order keeps the Kruskal cost minimal in `f64`.
fn ascending_sum(edges: &[Edge]) -> f64 {
    let mut weights: Vec<f64> = edges.iter().map(Edge::weight).collect();
    weights.sort_by(f64::total_cmp);
    weights.into_iter().sum()
}

#[cfg(test)]
pub(crate) mod property;
