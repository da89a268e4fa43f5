//! Input error types shared by the algorithm crates.

use crate::VertexId;
use thiserror::Error;

/// Errors raised for input that violates an operation's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Vertex id outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range: graph has {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Edge weight below zero.
    #[error("Negative weight: {weight}")]
    NegativeWeight { weight: i64 },

    /// Vertex id below zero.
    #[error("Negative vertex id: {vertex}")]
    NegativeVertex { vertex: i64 },

    /// Vertex count below zero.
    #[error("Negative vertex count: {count}")]
    NegativeVertexCount { count: i64 },

    /// Textual edge that is not a `source,destination,weight` triple.
    #[error("Malformed edge '{input}': expected source,destination,weight")]
    MalformedEdge { input: String },
}

impl InputError {
    pub fn vertex_out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    pub fn malformed_edge(input: impl Into<String>) -> Self {
        Self::MalformedEdge {
            input: input.into(),
        }
    }
}

/// Result type for operations that validate their input.
pub type InputResult<T> = Result<T, InputError>;

/// Convert a signed vertex count into a `usize`, rejecting negatives.
pub fn vertex_count_from_signed(count: i64) -> InputResult<usize> {
    usize::try_from(count).map_err(|_| InputError::NegativeVertexCount { count })
}
