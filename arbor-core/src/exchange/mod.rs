//! Single-edge exchange enumeration of ranked spanning trees.
//!
//! Starting from the Kruskal seed, each explored tree is expanded by removing
//! one of its edges and inserting one input edge it does not already hold.
//! Candidates that stay acyclic and carry an unseen [`TreeKey`] join a FIFO
//! queue. Exploration is breadth-first; ranking by cost happens once, after
//! the queue drains.
//!
//! The search ranks every tree reachable through swaps, not only those tied
//! with the minimum, so it can surface arbitrarily expensive trees. The
//! number of distinct keys is finite, which bounds the run, but dense graphs
//! grow combinatorially; [`crate::EnumeratorBuilder::with_max_trees`] caps it.

mod key;

use std::{
    collections::{HashSet, VecDeque},
    num::NonZeroUsize,
};

use tracing::{debug, info, instrument};

use crate::{Edge, EdgeKey, ExecutionStrategy, SpanningTree, UnionFind, compute_mst};

pub use self::key::TreeKey;

/// The trees discovered by one enumeration run, sorted by ascending cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Enumeration {
    trees: Vec<SpanningTree>,
    truncated: bool,
}

impl Enumeration {
    /// Returns the discovered trees in ascending cost order.
    ///
    /// Equal costs keep discovery order, so the seed tree comes first.
    #[must_use]
    #[rustfmt::skip]
    pub fn trees(&self) -> &[SpanningTree] { &self.trees }

    /// Returns `true` when a tree cap stopped the run with trees still queued.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_truncated(&self) -> bool { self.truncated }

    /// Returns the number of discovered trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Returns `true` when no trees were recorded. A completed run always
    /// records at least the seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Returns the cheapest tree, which is the Kruskal seed.
    #[must_use]
    pub fn seed(&self) -> Option<&SpanningTree> {
        self.trees.first()
    }

    /// Consumes the enumeration, returning the sorted trees.
    #[must_use]
    pub fn into_trees(self) -> Vec<SpanningTree> {
        self.trees
    }
}

/// Enumerates spanning trees reachable from the MST by single-edge swaps.
///
/// The result always starts with the Kruskal seed and is sorted by
/// non-decreasing total cost. No two entries share a [`TreeKey`]. An empty
/// edge list yields a single empty tree of cost 0.
///
/// The run is unbounded; use [`crate::EnumeratorBuilder`] to cap it.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, enumerate_spanning_trees};
///
/// let triangle = [
///     Edge::try_new(1, 2, 1.0)?,
///     Edge::try_new(2, 3, 2.0)?,
///     Edge::try_new(1, 3, 3.0)?,
/// ];
/// let costs: Vec<f64> = enumerate_spanning_trees(&triangle)
///     .iter()
///     .map(|tree| tree.total_cost())
///     .collect();
/// assert_eq!(costs, vec![3.0, 4.0, 5.0]);
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[must_use]
pub fn enumerate_spanning_trees(edges: &[Edge]) -> Vec<SpanningTree> {
    explore(edges, None, ExecutionStrategy::Sequential).into_trees()
}

/// A tree produced by one exchange, before it is admitted to the queue.
struct Candidate {
    edges: Vec<Edge>,
    key: TreeKey,
}

#[instrument(
    name = "exchange.enumerate",
    skip(edges),
    fields(edges = edges.len(), max_trees = ?max_trees, strategy = ?strategy),
)]
pub(crate) fn explore(
    edges: &[Edge],
    max_trees: Option<NonZeroUsize>,
    strategy: ExecutionStrategy,
) -> Enumeration {
    let seed = compute_mst(edges);
    let vertices = seed.vertex_count();

    let mut visited = HashSet::from([seed.key()]);
    let mut queue = VecDeque::from([seed]);
    let mut trees = Vec::new();
    let mut truncated = false;

    while let Some(tree) = queue.pop_front() {
        if max_trees.is_some_and(|cap| trees.len() >= cap.get()) {
            truncated = true;
            break;
        }

        for candidate in exchange_candidates(&tree, edges, vertices, strategy) {
            if visited.insert(candidate.key) {
                queue.push_back(SpanningTree::from_edges(candidate.edges, vertices));
            }
        }
        trees.push(tree);
    }

    if truncated {
        debug!(
            explored = trees.len(),
            pending = queue.len().saturating_add(1),
            "tree cap reached, stopping exploration"
        );
    }

    trees.sort_by(|left, right| left.total_cost().total_cmp(&right.total_cost()));
    info!(
        trees = trees.len(),
        distinct_keys = visited.len(),
        truncated,
        "enumeration completed"
    );
    Enumeration { trees, truncated }
}

/// Generates every acyclic single-edge exchange of `tree`, in removal order
/// then input order.
fn exchange_candidates(
    tree: &SpanningTree,
    edges: &[Edge],
    vertices: usize,
    strategy: ExecutionStrategy,
) -> Vec<Candidate> {
    let held: HashSet<EdgeKey> = tree.edges().iter().map(Edge::key).collect();
    let outside: Vec<&Edge> = edges
        .iter()
        .filter(|edge| !held.contains(&edge.key()))
        .collect();

    match strategy {
        ExecutionStrategy::Sequential => sequential_candidates(tree.edges(), &outside, vertices),
        #[cfg(feature = "parallel")]
        ExecutionStrategy::Parallel => parallel_candidates(tree.edges(), &outside, vertices),
        // The builder refuses `Parallel` without the feature.
        #[cfg(not(feature = "parallel"))]
        ExecutionStrategy::Parallel => sequential_candidates(tree.edges(), &outside, vertices),
    }
}

fn sequential_candidates(held: &[Edge], outside: &[&Edge], vertices: usize) -> Vec<Candidate> {
    (0..held.len())
        .flat_map(move |removed| {
            outside
                .iter()
                .filter_map(move |incoming| exchange(held, removed, incoming, vertices))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn parallel_candidates(held: &[Edge], outside: &[&Edge], vertices: usize) -> Vec<Candidate> {
    use rayon::prelude::*;

    // `collect` keeps sequential order, so the visited-set merge that follows
    // admits exactly the trees the sequential path would.
    (0..held.len())
        .into_par_iter()
        .flat_map_iter(move |removed| {
            outside
                .iter()
                .filter_map(move |incoming| exchange(held, removed, incoming, vertices))
        })
        .collect()
}

/// Replaces `held[removed]` with `incoming`, keeping the result only when it
/// is still acyclic.
fn exchange(held: &[Edge], removed: usize, incoming: &Edge, vertices: usize) -> Option<Candidate> {
    let mut edges = Vec::with_capacity(held.len());
    edges.extend(
        held.iter()
            .enumerate()
            .filter(|(index, _)| *index != removed)
            .map(|(_, edge)| *edge),
    );
    edges.push(*incoming);

    if !is_acyclic(&edges, vertices) {
        return None;
    }
    let key = TreeKey::from_edges(&edges);
    Some(Candidate { edges, key })
}

/// Walks `edges` through a fresh union-find; any edge whose endpoints are
/// already joined closes a cycle.
fn is_acyclic(edges: &[Edge], vertices: usize) -> bool {
    let mut sets = UnionFind::new(vertices);
    edges
        .iter()
        .all(|edge| sets.union(edge.vertex1(), edge.vertex2()))
}

#[cfg(test)]
mod property;
