//! Weighted undirected graph storage.

use crate::spanning::{kruskal, SpanningForest};
use primer_core::{total_weight, Edge, InputResult, TotalWeight, VertexId, Weight};

/// A weighted undirected graph over the vertices `0..vertex_count`.
///
/// Edges are validated on insertion, so every stored edge has both
/// endpoints in range. Self-loops and parallel edges are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Create a graph from an edge list, validating every edge.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> InputResult<Self> {
        let mut graph = Self::new(vertex_count);
        for edge in edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }

    /// Add an edge between two vertices.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: Weight,
    ) -> InputResult<()> {
        self.insert_edge(Edge::between(source, destination, weight))
    }

    /// Add an already-built edge.
    pub fn insert_edge(&mut self, edge: Edge) -> InputResult<()> {
        edge.validate(self.vertex_count)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> TotalWeight {
        total_weight(&self.edges)
    }

    /// Edges touching a vertex, in insertion order.
    pub fn edges_involving(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.involves(vertex))
    }

    /// Select a minimum-weight spanning forest.
    pub fn minimum_spanning_forest(&self) -> SpanningForest {
        kruskal(self.vertex_count, &self.edges)
    }
}
