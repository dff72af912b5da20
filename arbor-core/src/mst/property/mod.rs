//! Property-based tests for Kruskal MST construction.
//!
//! Checks `compute_mst` against an exhaustive oracle on small graphs and
//! validates the structural invariants of every tree it returns. The
//! fixtures and oracle are shared with the exchange enumeration suite.

mod equivalence;
pub(crate) mod oracle;
mod structural;
