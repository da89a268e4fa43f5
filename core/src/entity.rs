//! Entity structures for weighted graphs.

use crate::{InputError, InputResult, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u64;

/// Sum of edge weights. Wide enough that no `usize`-length edge list of
/// `Weight`s can overflow it.
pub type TotalWeight = u128;

/// Sum weights without overflow.
pub fn total_weight<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> TotalWeight {
    edges
        .into_iter()
        .map(|edge| TotalWeight::from(edge.weight))
        .sum()
}

/// An undirected weighted edge.
///
/// The endpoints are stored in the order they were given; the edge itself
/// has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub source: VertexId,
    /// Second endpoint.
    pub destination: VertexId,
    /// Non-negative weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: u32, destination: u32, weight: Weight) -> Self {
        Self::between(VertexId::new(source), VertexId::new(destination), weight)
    }

    /// Create a new edge between two existing vertex ids.
    pub fn between(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Create an edge from signed components, rejecting negative values.
    pub fn from_signed(source: i64, destination: i64, weight: i64) -> InputResult<Self> {
        let weight = Weight::try_from(weight).map_err(|_| InputError::NegativeWeight { weight })?;
        Ok(Self {
            source: vertex_from_signed(source)?,
            destination: vertex_from_signed(destination)?,
            weight,
        })
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Both endpoints, in stored order.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.destination)
    }

    /// Returns true if this edge touches the given vertex.
    pub fn involves(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.destination == vertex
    }

    /// Check that both endpoints exist in a graph of `vertex_count` vertices.
    pub fn validate(&self, vertex_count: usize) -> InputResult<()> {
        for vertex in [self.source, self.destination] {
            if !vertex.is_within(vertex_count) {
                return Err(InputError::vertex_out_of_range(vertex, vertex_count));
            }
        }
        Ok(())
    }
}

fn vertex_from_signed(vertex: i64) -> InputResult<VertexId> {
    if vertex < 0 {
        return Err(InputError::NegativeVertex { vertex });
    }
    u32::try_from(vertex)
        .map(VertexId::new)
        .map_err(|_| InputError::malformed_edge(vertex.to_string()))
}

impl FromStr for Edge {
    type Err = InputError;

    /// Parse `source,destination,weight`, e.g. `0,1,10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[source, destination, weight] = parts.as_slice() else {
            return Err(InputError::malformed_edge(s));
        };

        let parse = |part: &str| part.parse::<i64>().map_err(|_| InputError::malformed_edge(s));
        Edge::from_signed(parse(source)?, parse(destination)?, parse(weight)?)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.source, self.destination, self.weight)
    }
}
