//! Built-in demonstration inputs.

use crate::format::{format_forest, format_items};
use primer_core::{Edge, InputResult};
use primer_graph::build_minimum_spanning_forest;
use primer_parser::{to_postfix, ParseResult};
use primer_pattern::matches;
use primer_sequence::{rotate_left, search_unbounded};
use std::fmt::Write;

const WILDCARD_SAMPLES: [(&str, &str); 5] = [
    ("aa", "a"),
    ("aa", "*"),
    ("cb", "?a"),
    ("adceb", "*a*b"),
    ("acdcb", "a*c?b"),
];

const POSTFIX_SAMPLES: [&str; 3] = ["A+B*C", "(A+B)*C", "A+(B*C-(D/E^F)*G)*H"];

/// The four-vertex graph used by the spanning forest sample.
pub fn sample_graph() -> (usize, Vec<Edge>) {
    let edges = vec![
        Edge::new(0, 1, 10),
        Edge::new(0, 2, 6),
        Edge::new(0, 3, 5),
        Edge::new(1, 3, 15),
        Edge::new(2, 3, 4),
    ];
    (4, edges)
}

/// Render every sample as console text.
pub fn render_samples() -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "== Wildcard matching ==")?;
    for (text, pattern) in WILDCARD_SAMPLES {
        writeln!(out, "{:?} ~ {:?}: {}", text, pattern, matches(text, pattern))?;
    }

    writeln!(out, "\n== Minimum spanning tree ==")?;
    writeln!(out, "{}", render_forest_sample()?)?;

    writeln!(out, "\n== Left rotation ==")?;
    let mut items = [1, 2, 3, 4, 5];
    writeln!(out, "Original array: {}", format_items(&items))?;
    rotate_left(&mut items, 2);
    writeln!(out, "Array after left rotation: {}", format_items(&items))?;

    writeln!(out, "\n== Search in unbounded array ==")?;
    let sorted = [3, 4, 5, 6, 7, 89, 99, 100];
    let found = search_unbounded(&sorted, &89);
    writeln!(out, "89 in {}: {}", format_items(&sorted), format_index(found))?;

    writeln!(out, "\n== Infix to postfix ==")?;
    for (infix, postfix) in render_postfix_samples()? {
        writeln!(out, "Infix  : {}", infix)?;
        writeln!(out, "Postfix: {}", postfix)?;
    }

    Ok(out)
}

fn render_forest_sample() -> InputResult<String> {
    let (vertex_count, edges) = sample_graph();
    let forest = build_minimum_spanning_forest(vertex_count, &edges)?;
    Ok(format_forest(&forest))
}

fn render_postfix_samples() -> ParseResult<Vec<(&'static str, String)>> {
    POSTFIX_SAMPLES
        .iter()
        .map(|infix| Ok((*infix, to_postfix(infix)?)))
        .collect()
}

pub(crate) fn format_index(found: Option<usize>) -> String {
    match found {
        Some(index) => format!("found at index {}", index),
        None => "not found".to_string(),
    }
}
