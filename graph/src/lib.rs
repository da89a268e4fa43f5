//! Primer Graph
//!
//! Minimum spanning forests over weighted undirected graphs:
//! - Disjoint set: union by rank with path compression
//! - Weighted graph: vertex count plus validated edge list
//! - Kruskal: greedy edge selection in ascending weight order

mod disjoint_set;
mod graph;
mod spanning;

pub use disjoint_set::DisjointSet;
pub use graph::WeightedGraph;
pub use spanning::{build_minimum_spanning_forest, SpanningForest};
