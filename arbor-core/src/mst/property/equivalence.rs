//! Equivalence with the exhaustive oracle.
//!
//! The Kruskal tree must be one of the oracle's maximal forests and must
//! match its minimum cost exactly. Both sides add weights smallest first,
//! so even tenths weights, whose sums round, compare without tolerance.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::compute_mst;

use super::oracle::brute_force;
use super::types::TreeFixture;

/// Runs the oracle equivalence property for `fixture`.
pub(super) fn run_oracle_equivalence_property(fixture: &TreeFixture) -> TestCaseResult {
    let tree = compute_mst(&fixture.edges);
    let oracle = brute_force(fixture.vertex_count(), &fixture.edges);

    if tree.total_cost().to_bits() != oracle.min_cost.to_bits() {
        return Err(TestCaseError::fail(format!(
            "cost mismatch: kruskal={}, oracle={} ({})",
            tree.total_cost(),
            oracle.min_cost,
            fixture.describe(),
        )));
    }
    if tree.len() != oracle.rank {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({})",
            tree.len(),
            oracle.rank,
            fixture.describe(),
        )));
    }
    if !oracle.trees.contains(&tree.key()) {
        return Err(TestCaseError::fail(format!(
            "kruskal tree is not a maximal spanning forest ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
