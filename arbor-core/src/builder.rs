//! Builder utilities for configuring exchange enumeration.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before an [`Enumerator`] is constructed.

use std::num::NonZeroUsize;

use crate::{Result, enumerator::Enumerator, error::ArborError};

/// Selects how candidate exchanges are generated for each explored tree.
///
/// Both strategies admit trees to the queue in the same order, so the
/// enumeration they produce is identical.
///
/// # Examples
/// ```
/// use arbor_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Generate candidates on the calling thread.
    #[default]
    Sequential,
    /// Generate one tree's candidates on the Rayon pool. Requires the
    /// `parallel` feature.
    Parallel,
}

/// Configures and constructs [`Enumerator`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{EnumeratorBuilder, ExecutionStrategy};
///
/// let enumerator = EnumeratorBuilder::new()
///     .with_max_trees(16)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(enumerator.max_trees().map(|cap| cap.get()), Some(16));
/// assert_eq!(enumerator.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnumeratorBuilder {
    max_trees: Option<usize>,
    execution_strategy: ExecutionStrategy,
}

impl EnumeratorBuilder {
    /// Creates a builder with no tree cap and sequential execution.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{EnumeratorBuilder, ExecutionStrategy};
    ///
    /// let builder = EnumeratorBuilder::new();
    /// assert_eq!(builder.max_trees(), None);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of trees explored.
    ///
    /// Once `max_trees` trees have been recorded the run stops, even if the
    /// queue still holds undiscovered neighbours.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::EnumeratorBuilder;
    ///
    /// let builder = EnumeratorBuilder::new().with_max_trees(4);
    /// assert_eq!(builder.max_trees(), Some(4));
    /// ```
    #[must_use]
    pub fn with_max_trees(mut self, max_trees: usize) -> Self {
        self.max_trees = Some(max_trees);
        self
    }

    /// Returns the configured tree cap, if any.
    #[must_use]
    pub fn max_trees(&self) -> Option<usize> {
        self.max_trees
    }

    /// Sets the candidate generation strategy.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{EnumeratorBuilder, ExecutionStrategy};
    ///
    /// let builder = EnumeratorBuilder::new().with_execution_strategy(ExecutionStrategy::Parallel);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Parallel);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs an [`Enumerator`].
    ///
    /// # Errors
    /// Returns [`ArborError::InvalidMaxTrees`] for a cap of 0 and
    /// [`ArborError::BackendUnavailable`] when [`ExecutionStrategy::Parallel`]
    /// is requested without the `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{ArborError, EnumeratorBuilder};
    ///
    /// let err = EnumeratorBuilder::new().with_max_trees(0).build().unwrap_err();
    /// assert_eq!(err, ArborError::InvalidMaxTrees { got: 0 });
    /// ```
    pub fn build(self) -> Result<Enumerator> {
        let max_trees = self
            .max_trees
            .map(|got| NonZeroUsize::new(got).ok_or(ArborError::InvalidMaxTrees { got }))
            .transpose()?;

        if self.execution_strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(ArborError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }

        Ok(Enumerator::new(max_trees, self.execution_strategy))
    }
}
