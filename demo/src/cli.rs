//! Command-line arguments.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "primer", about = "Textbook algorithm demonstrations", version)]
pub struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON where supported.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every built-in sample.
    Samples,
    /// Check whether TEXT matches a wildcard PATTERN (`?` one char, `*` any run).
    Wildcard { text: String, pattern: String },
    /// Build a minimum spanning forest.
    Mst {
        #[arg(long, allow_negative_numbers = true)]
        vertices: i64,
        /// Edge as `source,destination,weight`; repeat for more edges.
        #[arg(long = "edge", value_name = "S,D,W")]
        edges: Vec<String>,
    },
    /// Rotate ITEMS left.
    Rotate {
        #[arg(long, default_value_t = 1)]
        by: usize,
        items: Vec<String>,
    },
    /// Find TARGET in ascending ITEMS.
    Search {
        #[arg(allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        items: Vec<i64>,
    },
    /// Convert an infix expression to postfix.
    Postfix { expression: String },
}
