//! Command execution.

use crate::cli::Command;
use crate::format::{format_forest, format_items};
use crate::samples::{format_index, render_samples};
use anyhow::{bail, Context, Result};
use primer_core::{vertex_count_from_signed, Edge, TotalWeight};
use primer_graph::{build_minimum_spanning_forest, SpanningForest};
use primer_parser::to_postfix;
use primer_pattern::matches;
use primer_sequence::{rotate_left, search_unbounded};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct ForestReport<'a> {
    #[serde(flatten)]
    forest: &'a SpanningForest,
    total_weight: TotalWeight,
}

#[derive(Serialize)]
struct MatchReport<'a> {
    text: &'a str,
    pattern: &'a str,
    matches: bool,
}

/// Run a command and return the text to print on stdout.
pub fn execute(command: &Command, json: bool) -> Result<String> {
    debug!(?command, json, "executing command");

    match command {
        Command::Samples => render_samples(),

        Command::Wildcard { text, pattern } => {
            let result = matches(text, pattern);
            if json {
                let report = MatchReport {
                    text,
                    pattern,
                    matches: result,
                };
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(result.to_string())
            }
        }

        Command::Mst { vertices, edges } => {
            let vertex_count = vertex_count_from_signed(*vertices)?;
            let edges = edges
                .iter()
                .map(|raw| {
                    raw.parse::<Edge>()
                        .with_context(|| format!("invalid --edge '{}'", raw))
                })
                .collect::<Result<Vec<_>>>()?;

            let forest = build_minimum_spanning_forest(vertex_count, &edges)?;
            if json {
                let report = ForestReport {
                    forest: &forest,
                    total_weight: forest.total_weight(),
                };
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(format_forest(&forest))
            }
        }

        Command::Rotate { by, items } => {
            let mut items = items.clone();
            rotate_left(&mut items, *by);
            Ok(format_items(&items))
        }

        Command::Search { target, items } => {
            if items.windows(2).any(|pair| pair[0] > pair[1]) {
                bail!("items must be sorted in ascending order");
            }
            Ok(format_index(search_unbounded(items, target)))
        }

        Command::Postfix { expression } => {
            to_postfix(expression).with_context(|| format!("cannot convert '{}'", expression))
        }
    }
}
