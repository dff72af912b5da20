//! Arbor core library.
//!
//! Computes a minimum spanning tree with Kruskal's algorithm and ranks the
//! further spanning trees reachable from it by single-edge exchanges.
//!
//! Callers hand over validated [`Edge`] values; the algorithms never fail.
//! Disconnected input yields spanning forests, and an empty edge list yields
//! an empty tree of cost 0.
//!
//! ```
//! use arbor_core::{Edge, compute_mst, enumerate_spanning_trees};
//!
//! let edges = [
//!     Edge::try_new(1, 2, 1.0)?,
//!     Edge::try_new(2, 3, 2.0)?,
//!     Edge::try_new(3, 4, 4.0)?,
//!     Edge::try_new(4, 1, 3.0)?,
//!     Edge::try_new(1, 3, 2.0)?,
//!     Edge::try_new(2, 4, 3.0)?,
//! ];
//! let mst = compute_mst(&edges);
//! assert_eq!(mst.total_cost(), 6.0);
//!
//! let ranked = enumerate_spanning_trees(&edges);
//! assert_eq!(ranked[0], mst);
//! # Ok::<(), arbor_core::EdgeError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod enumerator;
mod error;
mod exchange;
mod graph;
mod mst;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{EnumeratorBuilder, ExecutionStrategy},
    edge::{Edge, EdgeKey},
    enumerator::Enumerator,
    error::{ArborError, ArborErrorCode, EdgeError, EdgeErrorCode, Result},
    exchange::{Enumeration, TreeKey, enumerate_spanning_trees},
    graph::Graph,
    mst::{SpanningTree, compute_mst, vertex_count},
    union_find::UnionFind,
};
