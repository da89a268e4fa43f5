//! Identity types for graph vertices.
//!
//! Vertices are dense indexes `0..V`, so an id doubles as an offset into
//! per-vertex arrays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a vertex in a weighted graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new VertexId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Offset of this vertex in a per-vertex array.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns true if this vertex exists in a graph of `vertex_count` vertices.
    pub fn is_within(&self, vertex_count: usize) -> bool {
        self.index() < vertex_count
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
