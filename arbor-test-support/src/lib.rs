//! Shared test utilities used across arbor crates.
//!
//! - [`tracing`](self::tracing) captures spans and events so tests can assert on
//!   instrumentation.
//! - [`profile`] reads the environment overrides that tune property-test
//!   runs.
//! - [`graphs`] generates seeded synthetic graphs for property tests and
//!   benchmarks.

pub mod graphs;
pub mod profile;
pub mod tracing;
