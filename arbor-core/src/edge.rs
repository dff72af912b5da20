//! The boundary edge type and its normalised identity.
//!
//! Edges are validated once, when they are constructed, so Kruskal and the
//! exchange enumerator can trust every endpoint to be a
//! positive identifier and every weight to be finite.

use crate::error::EdgeError;

/// A weighted undirected edge between two positive vertex identifiers.
///
/// Endpoints are kept in the order the caller supplied them; identity for
/// deduplication is provided by [`Edge::key`], which ignores that order.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::try_new(3, 1, 2.5).expect("edge is valid");
/// assert_eq!(edge.endpoints(), (3, 1));
/// assert_eq!(edge.key(), Edge::try_new(1, 3, 2.5).expect("edge is valid").key());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawEdge")
)]
pub struct Edge {
    vertex1: usize,
    vertex2: usize,
    weight: f64,
}

impl Edge {
    /// Validates and constructs an edge.
    ///
    /// Negative zero weights are stored as positive zero so that keys of
    /// numerically equal edges coincide.
    ///
    /// # Errors
    /// Returns [`EdgeError::ZeroVertex`] when either endpoint is 0 and
    /// [`EdgeError::NonFiniteWeight`] when `weight` is NaN or infinite.
    pub fn try_new(vertex1: usize, vertex2: usize, weight: f64) -> Result<Self, EdgeError> {
        if vertex1 == 0 || vertex2 == 0 {
            return Err(EdgeError::ZeroVertex { vertex1, vertex2 });
        }
        if !weight.is_finite() {
            return Err(EdgeError::NonFiniteWeight {
                vertex1,
                vertex2,
                weight,
            });
        }
        Ok(Self {
            vertex1,
            vertex2,
            weight: weight + 0.0,
        })
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex1(&self) -> usize { self.vertex1 }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex2(&self) -> usize { self.vertex2 }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns both endpoints in supplied order.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.vertex1, self.vertex2)
    }

    /// Returns `true` when both endpoints name the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }

    /// Returns the larger endpoint, which bounds the vertex count this edge
    /// requires.
    #[must_use]
    pub fn max_vertex(&self) -> usize {
        self.vertex1.max(self.vertex2)
    }

    /// Returns the same edge with its smaller endpoint first.
    #[must_use]
    pub const fn normalized(&self) -> Self {
        if self.vertex1 <= self.vertex2 {
            *self
        } else {
            Self {
                vertex1: self.vertex2,
                vertex2: self.vertex1,
                weight: self.weight,
            }
        }
    }

    /// Returns the order-independent identity of this edge.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        let (low, high) = if self.vertex1 <= self.vertex2 {
            (self.vertex1, self.vertex2)
        } else {
            (self.vertex2, self.vertex1)
        };
        EdgeKey {
            low,
            high,
            weight_bits: self.weight.to_bits(),
        }
    }
}

/// Normalised edge identity: `(min endpoint, max endpoint, weight bits)`.
///
/// Two edges share a key exactly when they join the same unordered vertex
/// pair with the same weight.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey {
    low: usize,
    high: usize,
    weight_bits: u64,
}

impl EdgeKey {
    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn low(&self) -> usize { self.low }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn high(&self) -> usize { self.high }

    /// Returns the weight the key was derived from.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        f64::from_bits(self.weight_bits)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEdge {
    vertex1: usize,
    vertex2: usize,
    weight: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEdge> for Edge {
    type Error = EdgeError;

    fn try_from(raw: RawEdge) -> Result<Self, Self::Error> {
        Self::try_new(raw.vertex1, raw.vertex2, raw.weight)
    }
}
