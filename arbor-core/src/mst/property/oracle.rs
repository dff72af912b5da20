//! Exhaustive oracle for small graphs.
//!
//! Every subset of the input edges with the right size is checked for
//! acyclicity. The acyclic ones are exactly the spanning forests of maximal
//! size, which gives both the minimum cost and the full set of trees an
//! exchange enumeration must reach. Cost is exponential in the edge count,
//! so fixtures stay small.

use std::collections::HashSet;

use crate::{Edge, TreeKey};

/// Largest edge count the oracle accepts.
const MAX_ORACLE_EDGES: usize = 20;

/// Everything the oracle learned about a graph.
#[derive(Clone, Debug)]
pub(crate) struct BruteForce {
    /// Edge count of every maximal spanning forest: `n - c`.
    pub rank: usize,
    /// Connected components over `1..=n`, counting isolated vertices.
    pub components: usize,
    /// Cheapest maximal spanning forest cost.
    pub min_cost: f64,
    /// Keys of every distinct maximal spanning forest.
    pub trees: HashSet<TreeKey>,
}

/// Path-halving find over a plain parent array.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts components of `1..=vertex_count` under `edges`.
pub(crate) fn count_components<'a>(
    vertex_count: usize,
    edges: impl IntoIterator<Item = &'a Edge>,
) -> usize {
    let mut parent: Vec<usize> = (0..=vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.vertex1());
        let right = find_root(&mut parent, edge.vertex2());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Adds the weights of `edges` smallest first, so two forests with the same
/// weights always compare equal.
pub(crate) fn sorted_weight_sum(edges: &[Edge]) -> f64 {
    let mut weights: Vec<f64> = edges.iter().map(Edge::weight).collect();
    weights.sort_by(f64::total_cmp);
    weights.iter().sum()
}

/// Enumerates every maximal spanning forest of `edges` over
/// `1..=vertex_count`.
///
/// # Panics
/// Panics when `edges` holds more than [`MAX_ORACLE_EDGES`] entries.
pub(crate) fn brute_force(vertex_count: usize, edges: &[Edge]) -> BruteForce {
    assert!(
        edges.len() <= MAX_ORACLE_EDGES,
        "oracle limited to {MAX_ORACLE_EDGES} edges, got {}",
        edges.len()
    );
    let components = count_components(vertex_count, edges);
    let rank = vertex_count - components;

    let mut trees = HashSet::new();
    let mut min_cost = f64::INFINITY;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != rank {
            continue;
        }
        let chosen: Vec<Edge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        // `rank` edges leave `n - rank` components only when none closes a
        // cycle.
        if count_components(vertex_count, &chosen) != components {
            continue;
        }
        let cost = sorted_weight_sum(&chosen);
        min_cost = min_cost.min(cost);
        trees.insert(TreeKey::from_edges(&chosen));
    }

    BruteForce {
        rank,
        components,
        min_cost,
        trees,
    }
}
