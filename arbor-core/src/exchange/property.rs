//! Property-based tests for exchange enumeration.
//!
//! On small graphs the exhaustive oracle lists every maximal spanning
//! forest. Single-edge exchanges connect all of them, so an uncapped run
//! must return exactly that set, cheapest first, with no repeats. The first
//! tree is the Kruskal seed and carries the oracle's minimum cost.

use std::collections::HashSet;

use arbor_test_support::graphs::{GraphConfig, GraphShape, WeightScale};
use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use rstest::rstest;

use crate::mst::property::{
    oracle::{brute_force, count_components},
    strategies::{generate_fixture, tree_fixture_strategy},
    types::TreeFixture,
};
use crate::test_utils::suite_proptest_config;
use crate::{EnumeratorBuilder, TreeKey, compute_mst, enumerate_spanning_trees};

/// K5 has 125 spanning trees; larger complete graphs make each case slow.
const MAX_VERTICES: usize = 5;

/// Runs the completeness and ordering property for `fixture`.
fn run_enumeration_property(fixture: &TreeFixture) -> TestCaseResult {
    let ranked = enumerate_spanning_trees(&fixture.edges);
    let oracle = brute_force(fixture.vertex_count(), &fixture.edges);

    let seed = compute_mst(&fixture.edges);
    if ranked.first() != Some(&seed) {
        return Err(TestCaseError::fail(format!(
            "first tree is not the Kruskal seed ({})",
            fixture.describe()
        )));
    }
    if seed.total_cost().to_bits() != oracle.min_cost.to_bits() {
        return Err(TestCaseError::fail(format!(
            "seed cost {} is not the minimum {} ({})",
            seed.total_cost(),
            oracle.min_cost,
            fixture.describe()
        )));
    }
    if ranked
        .iter()
        .any(|tree| tree.total_cost() < seed.total_cost())
    {
        return Err(TestCaseError::fail(format!(
            "a tree costs less than the seed ({})",
            fixture.describe()
        )));
    }
    if ranked
        .windows(2)
        .any(|pair| pair[0].total_cost() > pair[1].total_cost())
    {
        return Err(TestCaseError::fail(format!(
            "trees are not sorted by cost ({})",
            fixture.describe()
        )));
    }

    let mut keys = HashSet::with_capacity(ranked.len());
    for tree in &ranked {
        if tree.len() != oracle.rank
            || count_components(tree.vertex_count(), tree.edges()) != oracle.components
        {
            return Err(TestCaseError::fail(format!(
                "tree {:?} is not a maximal spanning forest ({})",
                tree.key(),
                fixture.describe()
            )));
        }
        if !keys.insert(tree.key()) {
            return Err(TestCaseError::fail(format!(
                "tree {:?} listed twice ({})",
                tree.key(),
                fixture.describe()
            )));
        }
    }

    if keys != oracle.trees {
        let missing: Vec<&TreeKey> = oracle.trees.difference(&keys).collect();
        return Err(TestCaseError::fail(format!(
            "enumerated {} trees, oracle found {}; {} missing ({})",
            keys.len(),
            oracle.trees.len(),
            missing.len(),
            fixture.describe()
        )));
    }
    Ok(())
}

/// Runs the cap property: a capped run is a prefix of the BFS discovery
/// order, so it holds `min(cap, total)` trees and reports truncation only
/// when trees were left unexplored.
fn run_cap_property(fixture: &TreeFixture, cap: usize) -> TestCaseResult {
    let total = enumerate_spanning_trees(&fixture.edges).len();
    let enumeration = EnumeratorBuilder::new()
        .with_max_trees(cap)
        .build()
        .map_err(|err| TestCaseError::fail(format!("builder rejected cap {cap}: {err}")))?
        .run(&fixture.edges);

    if enumeration.len() != cap.min(total) || enumeration.is_truncated() != (cap < total) {
        return Err(TestCaseError::fail(format!(
            "cap {cap} of {total}: got {} trees, truncated={} ({})",
            enumeration.len(),
            enumeration.is_truncated(),
            fixture.describe()
        )));
    }
    if enumeration.seed() != Some(&compute_mst(&fixture.edges)) {
        return Err(TestCaseError::fail(format!(
            "capped run lost the seed ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn enumeration_matches_oracle(fixture in tree_fixture_strategy(MAX_VERTICES)) {
        run_enumeration_property(&fixture)?;
    }

    #[test]
    fn capped_enumeration_is_bounded(
        fixture in tree_fixture_strategy(MAX_VERTICES),
        cap in 1_usize..=32,
    ) {
        run_cap_property(&fixture, cap)?;
    }
}

#[rstest]
fn enumeration_holds_for_pinned_seeds(
    #[values(
        GraphShape::Path,
        GraphShape::Cycle,
        GraphShape::Complete,
        GraphShape::Sparse,
        GraphShape::Disconnected
    )]
    shape: GraphShape,
    #[values(WeightScale::Whole, WeightScale::Tenths)] scale: WeightScale,
    #[values(42, 999)] seed: u64,
) {
    let fixture = generate_fixture(GraphConfig {
        shape,
        vertex_count: MAX_VERTICES,
        max_weight: 2,
        scale,
        seed,
    });
    run_enumeration_property(&fixture).expect("enumeration must match the oracle");
    run_cap_property(&fixture, 3).expect("cap must bound the run");
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(suite_proptest_config(32))]

    #[test]
    fn parallel_enumeration_matches_sequential(fixture in tree_fixture_strategy(MAX_VERTICES)) {
        use crate::ExecutionStrategy;

        let run = |strategy| {
            EnumeratorBuilder::new()
                .with_execution_strategy(strategy)
                .build()
                .map(|enumerator| enumerator.run(&fixture.edges))
        };
        let sequential = run(ExecutionStrategy::Sequential)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let parallel = run(ExecutionStrategy::Parallel)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(parallel, sequential, "{}", fixture.describe());
    }
}
