//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark id.

use std::fmt;

use arbor_test_support::graphs::GraphShape;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Topology of the generated graph.
    pub shape: GraphShape,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},shape={:?}", self.vertex_count, self.shape)
    }
}

/// Parameters for an exchange enumeration benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ExchangeBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Tree cap handed to the enumerator.
    pub max_trees: usize,
}

impl fmt::Display for ExchangeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},cap={}", self.vertex_count, self.max_trees)
    }
}
