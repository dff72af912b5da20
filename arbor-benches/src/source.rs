//! Seeded edge lists for benchmarks.

use arbor_core::Edge;
use arbor_test_support::graphs::{GraphConfig, GraphShape, WeightScale, generate};

use crate::error::BenchSetupError;

/// Largest weight drawn for benchmark graphs. A wide range keeps ties rare
/// so Kruskal timings reflect sorting rather than tie handling.
const MAX_WEIGHT: u32 = 1_000;

/// Generates a validated edge list for a benchmark graph.
///
/// # Errors
/// Returns [`BenchSetupError::Edge`] if a generated triple fails
/// validation.
///
/// # Examples
/// ```
/// use arbor_benches::source::bench_edges;
/// use arbor_test_support::graphs::GraphShape;
///
/// let edges = bench_edges(GraphShape::Path, 10, 42)?;
/// assert_eq!(edges.len(), 9);
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn bench_edges(
    shape: GraphShape,
    vertex_count: usize,
    seed: u64,
) -> Result<Vec<Edge>, BenchSetupError> {
    let graph = generate(&GraphConfig {
        shape,
        vertex_count,
        max_weight: MAX_WEIGHT,
        scale: WeightScale::Whole,
        seed,
    });
    graph
        .pairs
        .into_iter()
        .map(|(vertex1, vertex2, weight)| {
            Edge::try_new(vertex1, vertex2, weight).map_err(BenchSetupError::from)
        })
        .collect()
}
