//! Structural invariants of the Kruskal output.
//!
//! - every tree edge comes from the input and is not a self-loop
//! - the tree is acyclic with `n - c` edges for `c` input components
//! - the recorded cost is the smallest-first sum of the tree weights
//! - connected input yields a spanning tree
//! - repeated runs return the same tree

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, EdgeKey, compute_mst};

use super::oracle::{count_components, find_root, sorted_weight_sum};
use super::types::TreeFixture;

/// Runs the structural invariant property for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &TreeFixture) -> TestCaseResult {
    let tree = compute_mst(&fixture.edges);
    let n = fixture.vertex_count();

    if tree.vertex_count() != n {
        return Err(TestCaseError::fail(format!(
            "vertex count {}, expected {n} ({})",
            tree.vertex_count(),
            fixture.describe(),
        )));
    }

    let input: HashSet<EdgeKey> = fixture.edges.iter().map(Edge::key).collect();
    let mut parent: Vec<usize> = (0..=n).collect();
    for (index, edge) in tree.edges().iter().enumerate() {
        if edge.is_self_loop() {
            return Err(TestCaseError::fail(format!(
                "edge {index}: self-loop on {} ({})",
                edge.vertex1(),
                fixture.describe(),
            )));
        }
        if !input.contains(&edge.key()) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: {:?} is not an input edge ({})",
                edge.endpoints(),
                fixture.describe(),
            )));
        }
        let left = find_root(&mut parent, edge.vertex1());
        let right = find_root(&mut parent, edge.vertex2());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {index}: {:?} closes a cycle ({})",
                edge.endpoints(),
                fixture.describe(),
            )));
        }
        parent[right] = left;
    }

    let components = count_components(n, &fixture.edges);
    if tree.len() != n - components {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {} ({})",
            tree.len(),
            n - components,
            fixture.describe(),
        )));
    }
    if (components == 1) != tree.is_spanning() {
        return Err(TestCaseError::fail(format!(
            "input has {components} components but is_spanning={} ({})",
            tree.is_spanning(),
            fixture.describe(),
        )));
    }

    let summed = sorted_weight_sum(tree.edges());
    if summed.to_bits() != tree.total_cost().to_bits() {
        return Err(TestCaseError::fail(format!(
            "recorded cost {} differs from edge sum {summed} ({})",
            tree.total_cost(),
            fixture.describe(),
        )));
    }

    if compute_mst(&fixture.edges) != tree {
        return Err(TestCaseError::fail(format!(
            "repeated run returned a different tree ({})",
            fixture.describe(),
        )));
    }

    Ok(())
}
