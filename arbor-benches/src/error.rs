//! Benchmark setup error type.
//!
//! Setup code propagates failures with `?`; the bench entry points turn
//! them into a single panic with context.

use arbor_core::{ArborError, EdgeError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated edge failed validation.
    #[error("generated edge rejected: {0}")]
    Edge(#[from] EdgeError),
    /// The enumerator configuration was rejected.
    #[error("enumerator configuration rejected: {0}")]
    Enumerator(#[from] ArborError),
}
