//! Configured entry point for exchange enumeration.

use std::num::NonZeroUsize;

use tracing::{Span, field, instrument};

use crate::{
    Edge,
    builder::ExecutionStrategy,
    exchange::{self, Enumeration},
};

/// Runs exchange enumeration with a validated configuration.
///
/// Built by [`crate::EnumeratorBuilder`]. With no cap and sequential
/// execution, [`Enumerator::run`] yields exactly the trees returned by
/// [`crate::enumerate_spanning_trees`].
///
/// # Examples
/// ```
/// use arbor_core::{Edge, EnumeratorBuilder};
///
/// let square = [
///     Edge::try_new(1, 2, 1.0)?,
///     Edge::try_new(2, 3, 1.0)?,
///     Edge::try_new(3, 4, 1.0)?,
///     Edge::try_new(4, 1, 1.0)?,
/// ];
/// let enumerator = EnumeratorBuilder::new()
///     .with_max_trees(2)
///     .build()
///     .expect("configuration is valid");
/// let enumeration = enumerator.run(&square);
/// assert_eq!(enumeration.len(), 2);
/// assert!(enumeration.is_truncated());
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator {
    max_trees: Option<NonZeroUsize>,
    execution_strategy: ExecutionStrategy,
}

impl Enumerator {
    pub(crate) fn new(
        max_trees: Option<NonZeroUsize>,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            max_trees,
            execution_strategy,
        }
    }

    /// Returns the tree cap, if one was configured.
    #[must_use]
    pub fn max_trees(&self) -> Option<NonZeroUsize> {
        self.max_trees
    }

    /// Returns the candidate generation strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Enumerates spanning trees reachable from the MST of `edges`.
    ///
    /// The returned trees are sorted by ascending cost with the Kruskal seed
    /// first. When a cap stopped the run early,
    /// [`Enumeration::is_truncated`] reports it.
    #[instrument(
        name = "enumerator.run",
        skip(self, edges),
        fields(edges = edges.len(), trees = field::Empty, truncated = field::Empty),
    )]
    #[must_use]
    pub fn run(&self, edges: &[Edge]) -> Enumeration {
        let enumeration = exchange::explore(edges, self.max_trees, self.execution_strategy);
        let span = Span::current();
        span.record("trees", enumeration.len());
        span.record("truncated", enumeration.is_truncated());
        enumeration
    }
}
