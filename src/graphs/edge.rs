use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use rustc_hash::FxBuildHasher;

use crate::errors::EdgeError;
use crate::graphs::vertex::Vertex;

/// Largest length an edge may carry.
///
/// Any simple path or edge total then stays far below `i64::MAX`, so
/// distance sums never overflow.
pub const MAX_LENGTH: i64 = i32::MAX as i64;

/// An undirected, weighted edge between two distinct vertices.
///
/// Equality and hashing only look at the unordered endpoint pair:
/// `Edge(a, b, 5)` equals `Edge(b, a, 9)`. Graphs therefore hold at most one
/// edge per pair of vertices, and inserting a second edge with the same
/// endpoints but a different length is rejected as a duplicate rather than
/// treated as a weight update.
#[derive(Debug, Clone)]
pub struct Edge<V = Vertex> {
    v1: V,
    v2: V,
    length: i64,
}

impl<V: PartialEq> Edge<V> {
    /// Creates an edge of the given length.
    ///
    /// Fails when both endpoints are equal or when `length` lies outside
    /// `0..=MAX_LENGTH`.
    pub fn new(v1: V, v2: V, length: i64) -> Result<Self, EdgeError> {
        if v1 == v2 {
            return Err(EdgeError::SelfLoop);
        }
        if length < 0 {
            return Err(EdgeError::NegativeLength(length));
        }
        if length > MAX_LENGTH {
            return Err(EdgeError::LengthTooLarge(length));
        }
        Ok(Self { v1, v2, length })
    }

    /// Creates an edge of length one.
    pub fn unit(v1: V, v2: V) -> Result<Self, EdgeError> {
        Self::new(v1, v2, 1)
    }

    /// Returns true when `vertex` is one of the endpoints.
    pub fn is_incident(&self, vertex: &V) -> bool {
        self.v1 == *vertex || self.v2 == *vertex
    }

    /// Returns true when the endpoints are `a` and `b` in some order.
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.v1 == *a && self.v2 == *b) || (self.v1 == *b && self.v2 == *a)
    }

    /// Returns true when both edges share at least one endpoint.
    pub fn intersects(&self, other: &Edge<V>) -> bool {
        self.is_incident(&other.v1) || self.is_incident(&other.v2)
    }

    /// Returns the endpoint shared with `other`.
    ///
    /// When the edges are equal both endpoints are shared, `v1` is returned.
    pub fn intersection(&self, other: &Edge<V>) -> Option<&V> {
        if other.is_incident(&self.v1) {
            Some(&self.v1)
        } else if other.is_incident(&self.v2) {
            Some(&self.v2)
        } else {
            None
        }
    }

    /// Returns the endpoint that is not `vertex`, or `None` when `vertex` is
    /// not an endpoint of this edge.
    pub fn opposite(&self, vertex: &V) -> Option<&V> {
        if self.v1 == *vertex {
            Some(&self.v2)
        } else if self.v2 == *vertex {
            Some(&self.v1)
        } else {
            None
        }
    }

    /// Returns the endpoint of this edge that is not shared with `other`.
    ///
    /// Equal edges have no distinct endpoint and yield `None`. Edges that
    /// share nothing yield `v1`.
    pub fn distinct_from(&self, other: &Edge<V>) -> Option<&V> {
        if self == other {
            return None;
        }
        match self.intersection(other) {
            Some(shared) if *shared == self.v1 => Some(&self.v2),
            Some(_) => Some(&self.v1),
            None => Some(&self.v1),
        }
    }
}

impl<V> Edge<V> {
    /// Lookup key for hashed edge sets.
    ///
    /// Only endpoints take part in equality and hashing, so a probe finds the
    /// stored edge whatever its length. Never stored in a graph.
    pub(crate) fn probe(v1: V, v2: V) -> Self {
        Self { v1, v2, length: 0 }
    }

    /// First endpoint, as given at construction.
    pub fn v1(&self) -> &V {
        &self.v1
    }

    /// Second endpoint, as given at construction.
    pub fn v2(&self) -> &V {
        &self.v2
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.v1, &self.v2)
    }

    /// Non-negative edge length.
    pub fn length(&self) -> i64 {
        self.length
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.v1, &other.v2)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Endpoint hashes are combined with a commutative operation so that
        // (a, b) and (b, a) land in the same bucket.
        let a = FxBuildHasher.hash_one(&self.v1);
        let b = FxBuildHasher.hash_one(&self.v2);
        state.write_u64(a.wrapping_add(b));
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {}, {})", self.v1, self.v2, self.length)
    }
}
