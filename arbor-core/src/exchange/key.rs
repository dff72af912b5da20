//! Canonical identity for spanning trees.

use crate::{Edge, EdgeKey};

/// The sorted multiset of a tree's normalised edges.
///
/// Two trees reached along different exchange paths, or listing the same
/// edges in a different order, produce equal keys.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, TreeKey};
///
/// let a = [Edge::try_new(1, 2, 1.0)?, Edge::try_new(3, 2, 2.0)?];
/// let b = [Edge::try_new(2, 3, 2.0)?, Edge::try_new(2, 1, 1.0)?];
/// assert_eq!(TreeKey::from_edges(&a), TreeKey::from_edges(&b));
/// # Ok::<(), arbor_core::EdgeError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TreeKey(Vec<EdgeKey>);

impl TreeKey {
    /// Derives the key of an edge sequence.
    #[must_use]
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut keys: Vec<EdgeKey> = edges.iter().map(Edge::key).collect();
        keys.sort_unstable();
        Self(keys)
    }

    /// Returns the normalised edges in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[EdgeKey] { &self.0 }
}
