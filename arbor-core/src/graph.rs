//! Adjacency-list accumulator for callers that collect edges one direction
//! at a time.
//!
//! Producers often record an undirected connection twice, once from each
//! endpoint. [`Graph::unique_edges`] folds those back into a single
//! undirected edge before the list reaches Kruskal.

use std::collections::{BTreeMap, HashSet};

use crate::{Edge, EdgeError, SpanningTree, compute_mst, enumerate_spanning_trees};

/// Directed adjacency lists keyed by source vertex.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 1.0)?;
/// graph.add_edge(2, 1, 1.0)?;
/// graph.add_edge(2, 3, 4.0)?;
///
/// let edges = graph.unique_edges();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(graph.minimum_spanning_tree().total_cost(), 5.0);
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: BTreeMap<usize, Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph holding each edge once, directed from `vertex1` to
    /// `vertex2`.
    #[must_use]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert(*edge);
        }
        graph
    }

    /// Records a directed connection from `from` to `to`.
    ///
    /// Both endpoints become known vertices even if `to` has no outgoing
    /// connections.
    ///
    /// # Errors
    /// Returns [`EdgeError`] under the same rules as [`Edge::try_new`].
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<(), EdgeError> {
        self.insert(Edge::try_new(from, to, weight)?);
        Ok(())
    }

    fn insert(&mut self, edge: Edge) {
        self.adjacency.entry(edge.vertex2()).or_default();
        self.adjacency.entry(edge.vertex1()).or_default().push(edge);
    }

    /// Returns every known vertex in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the outgoing connections recorded for `vertex` as
    /// `(neighbour, weight)` pairs in insertion order.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flatten()
            .map(|edge| (edge.vertex2(), edge.weight()))
    }

    /// Returns the working vertex count: the largest known identifier.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.keys().next_back().copied().unwrap_or(0)
    }

    /// Returns the undirected edge set with endpoints ordered `(min, max)`.
    ///
    /// Connections recorded in both directions, or repeated with the same
    /// weight, appear once. Parallel connections with different weights are
    /// kept. Order follows ascending source vertex, then insertion order.
    #[must_use]
    pub fn unique_edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        self.adjacency
            .values()
            .flatten()
            .filter(|edge| seen.insert(edge.key()))
            .map(Edge::normalized)
            .collect()
    }

    /// Computes the minimum spanning tree of [`Graph::unique_edges`].
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> SpanningTree {
        compute_mst(&self.unique_edges())
    }

    /// Ranks the spanning trees reachable from the MST of
    /// [`Graph::unique_edges`] by single-edge exchanges.
    #[must_use]
    pub fn ranked_spanning_trees(&self) -> Vec<SpanningTree> {
        enumerate_spanning_trees(&self.unique_edges())
    }
}
