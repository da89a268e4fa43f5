//! Output formatting utilities.

use primer_graph::SpanningForest;
use std::fmt::Display;

/// Format a spanning forest as one `src -- dest == weight` line per edge,
/// followed by the total.
pub fn format_forest(forest: &SpanningForest) -> String {
    let mut out = String::from("Edges in Minimum Spanning Tree (Kruskal):\n");
    for edge in forest.edges() {
        out.push_str(&format!("{}\n", edge));
    }
    out.push_str(&format!("Total weight: {}", forest.total_weight()));
    if !forest.is_spanning_tree() {
        out.push_str(&format!(
            " ({} components, graph is disconnected)",
            forest.component_count()
        ));
    }
    out
}

/// Format items as `[a, b, c]`.
pub fn format_items<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
