//! Shared test utilities for `arbor-core`.

use arbor_test_support::{graphs::WeightedPair, profile::ProptestRunProfile};
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a standard proptest configuration from the shared run profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Converts `(vertex1, vertex2, weight)` triples into validated edges.
///
/// # Panics
/// Panics when a triple is not a valid edge; fixtures are expected to be
/// well formed.
#[must_use]
pub(crate) fn edges(pairs: &[WeightedPair]) -> Vec<Edge> {
    pairs
        .iter()
        .map(|&(vertex1, vertex2, weight)| {
            Edge::try_new(vertex1, vertex2, weight).expect("fixture edge must be valid")
        })
        .collect()
}
