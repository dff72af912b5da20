//! Error types for the arbor core library.
//!
//! The spanning-tree algorithms themselves never fail: degenerate input
//! degrades to empty or partial results. Errors only arise at the boundary
//! (malformed edges) and while validating enumerator configuration.

use std::fmt;

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An edge rejected while crossing into the core.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EdgeError {
    /// Vertex identifiers start at 1; 0 is never a legitimate vertex.
    #[error("edge ({vertex1}, {vertex2}) references vertex 0; identifiers must be positive")]
    ZeroVertex {
        /// First endpoint as supplied.
        vertex1: usize,
        /// Second endpoint as supplied.
        vertex2: usize,
    },
    /// The weight was NaN or infinite.
    #[error("edge ({vertex1}, {vertex2}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// First endpoint as supplied.
        vertex1: usize,
        /// Second endpoint as supplied.
        vertex2: usize,
        /// The offending weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeError`] variants.
    enum EdgeErrorCode for EdgeError {
        /// An endpoint was vertex 0.
        ZeroVertex => ZeroVertex { .. } => "EDGE_ZERO_VERTEX",
        /// The weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "EDGE_NON_FINITE_WEIGHT",
    }
}

/// Error type produced when configuring an [`crate::Enumerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ArborError {
    /// A tree cap, when supplied, must admit at least the seed tree.
    #[error("max_trees must be at least 1 (got {got})")]
    InvalidMaxTrees {
        /// The invalid cap supplied by the caller.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ArborError`] variants.
    enum ArborErrorCode for ArborError {
        /// A zero tree cap was supplied.
        InvalidMaxTrees => InvalidMaxTrees { .. } => "ARBOR_INVALID_MAX_TREES",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "ARBOR_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the configuration API.
pub type Result<T> = core::result::Result<T, ArborError>;
