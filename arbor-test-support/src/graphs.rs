//! Seeded synthetic graphs for property tests and benchmarks.
//!
//! Graphs are returned as raw `(vertex1, vertex2, weight)` triples so this
//! crate does not depend on `arbor-core`; callers convert them into edges.
//! Vertices are numbered `1..=vertex_count` and every generated graph
//! mentions vertex `vertex_count`, so the derived vertex count matches the
//! requested one. Weights are small multiples of a [`WeightScale`] step,
//! which keeps ties common. Whole-number weights sum exactly; tenths do not,
//! which exposes costs that depend on summation order.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// A raw `(vertex1, vertex2, weight)` triple.
pub type WeightedPair = (usize, usize, f64);

/// Topology of a generated graph.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphShape {
    /// A simple path `1 - 2 - ... - n`.
    Path,
    /// A path closed back to vertex 1.
    Cycle,
    /// Every pair of distinct vertices.
    Complete,
    /// A random spanning tree plus roughly `n / 2` extra edges, which may
    /// repeat a pair.
    Sparse,
    /// Two random trees over disjoint halves of the vertex range.
    Disconnected,
}

impl GraphShape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Path,
        Self::Cycle,
        Self::Complete,
        Self::Sparse,
        Self::Disconnected,
    ];

    /// Returns `true` when graphs of this shape connect every vertex.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

/// Step between generated weights.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WeightScale {
    /// Weights `1.0, 2.0, ..`; every sum is exact.
    Whole,
    /// Weights `0.1, 0.2, ..`; sums round, so equal multisets added in
    /// different orders can disagree in the last bit.
    Tenths,
}

impl WeightScale {
    /// Every scale, in declaration order.
    pub const ALL: [Self; 2] = [Self::Whole, Self::Tenths];

    /// Returns the weight for step number `step`.
    #[must_use]
    pub fn weight(self, step: u32) -> f64 {
        match self {
            Self::Whole => f64::from(step),
            Self::Tenths => f64::from(step) / 10.0,
        }
    }
}

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphConfig {
    /// Topology to build.
    pub shape: GraphShape,
    /// Requested vertex count. Raised to 2 (4 for
    /// [`GraphShape::Disconnected`]) when smaller.
    pub vertex_count: usize,
    /// Largest weight step drawn; steps are uniform over `1..=max_weight`.
    pub max_weight: u32,
    /// Step size the drawn steps are scaled by.
    pub scale: WeightScale,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated graph and the parameters that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticGraph {
    /// Parameters used, after any clamping.
    pub config: GraphConfig,
    /// Generated edges in shuffled order with random endpoint orientation.
    pub pairs: Vec<WeightedPair>,
}

/// Generates a graph for `config`.
///
/// # Examples
/// ```
/// use arbor_test_support::graphs::{GraphConfig, GraphShape, WeightScale, generate};
///
/// let graph = generate(&GraphConfig {
///     shape: GraphShape::Complete,
///     vertex_count: 4,
///     max_weight: 3,
///     scale: WeightScale::Whole,
///     seed: 7,
/// });
/// assert_eq!(graph.pairs.len(), 6);
/// ```
#[must_use]
pub fn generate(config: &GraphConfig) -> SyntheticGraph {
    let minimum = if config.shape == GraphShape::Disconnected {
        4
    } else {
        2
    };
    let config = GraphConfig {
        vertex_count: config.vertex_count.max(minimum),
        max_weight: config.max_weight.max(1),
        ..*config
    };
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let n = config.vertex_count;

    let mut links: Vec<(usize, usize)> = match config.shape {
        GraphShape::Path => (1..n).map(|vertex| (vertex, vertex + 1)).collect(),
        GraphShape::Cycle => {
            let mut links: Vec<_> = (1..n).map(|vertex| (vertex, vertex + 1)).collect();
            if n > 2 {
                links.push((n, 1));
            }
            links
        }
        GraphShape::Complete => (1..=n)
            .flat_map(|low| (low + 1..=n).map(move |high| (low, high)))
            .collect(),
        GraphShape::Sparse => {
            let mut links = random_tree(1..=n, &mut rng);
            for _ in 0..n / 2 {
                let left = rng.gen_range(1..=n);
                let right = rng.gen_range(1..=n);
                if left != right {
                    links.push((left, right));
                }
            }
            links
        }
        GraphShape::Disconnected => {
            let split = n / 2;
            let mut links = random_tree(1..=split, &mut rng);
            links.extend(random_tree(split + 1..=n, &mut rng));
            links
        }
    };

    links.shuffle(&mut rng);
    let pairs = links
        .into_iter()
        .map(|(left, right)| {
            let weight = config.scale.weight(rng.gen_range(1..=config.max_weight));
            if rng.gen_bool(0.5) {
                (left, right, weight)
            } else {
                (right, left, weight)
            }
        })
        .collect();

    SyntheticGraph { config, pairs }
}

/// Attaches each vertex after the first to a random earlier one.
fn random_tree(
    vertices: std::ops::RangeInclusive<usize>,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = vertices.collect();
    order.shuffle(rng);
    (1..order.len())
        .map(|index| {
            let parent = order[rng.gen_range(0..index)];
            (parent, order[index])
        })
        .collect()
}
