//! Minimum spanning forests by Kruskal's algorithm.

use crate::DisjointSet;
use primer_core::{total_weight, Edge, InputResult, TotalWeight};
use serde::Serialize;
use tracing::{debug, trace};

/// Edges selected by Kruskal's algorithm, in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Selected edges in the order they were accepted (ascending weight).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of selected edge weights.
    pub fn total_weight(&self) -> TotalWeight {
        total_weight(&self.edges)
    }

    /// Number of vertices in the input graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of trees in the forest, counting isolated vertices.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns true if the forest is a single tree over every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }
}

/// Select a minimum-weight spanning forest of the graph with vertices
/// `0..vertex_count` and the given edges.
///
/// Edges are considered in ascending weight; equal weights keep their input
/// order. An edge is accepted when its endpoints are in different trees.
/// Disconnected graphs yield one tree per component.
///
/// Fails with `VertexOutOfRange` if any edge endpoint is not below
/// `vertex_count`. Validation happens before any edge is considered.
pub fn build_minimum_spanning_forest(
    vertex_count: usize,
    edges: &[Edge],
) -> InputResult<SpanningForest> {
    for edge in edges {
        edge.validate(vertex_count)?;
    }
    Ok(kruskal(vertex_count, edges))
}

/// Kruskal over edges already known to be in range.
pub(crate) fn kruskal(vertex_count: usize, edges: &[Edge]) -> SpanningForest {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight);

    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut selected = Vec::with_capacity(target);

    for edge in sorted {
        if selected.len() == target {
            break;
        }

        let root_source = sets.root_of(edge.source.index());
        let root_destination = sets.root_of(edge.destination.index());

        if sets.link(root_source, root_destination) {
            trace!(%edge, "accepted edge");
            selected.push(*edge);
        } else {
            trace!(%edge, self_loop = edge.is_self_loop(), "rejected edge: would form a cycle");
        }
    }

    let forest = SpanningForest {
        edges: selected,
        vertex_count,
        component_count: sets.set_count(),
    };
    debug!(
        vertex_count,
        input_edges = edges.len(),
        selected = forest.len(),
        components = forest.component_count,
        total_weight = forest.total_weight(),
        "built minimum spanning forest"
    );
    forest
}
