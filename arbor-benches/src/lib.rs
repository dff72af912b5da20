//! Benchmark support crate for arbor.
//!
//! Provides the seeded edge lists and parameter types used by the Criterion
//! benchmarks for Kruskal construction and exchange enumeration.

pub mod error;
pub mod params;
pub mod source;
