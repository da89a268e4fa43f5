//! Primer integration test support.
//!
//! Reference oracles that compute the same answers as the Primer crates by
//! slower, independent means, plus seeded input generators.
//!
//! - `oracle`: Brute-force and regex-based reference answers
//! - `generate`: Random inputs from a seeded `StdRng`

pub mod generate;
pub mod oracle;

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::generate::{seeded, Generator};
    pub use crate::oracle;
    pub use primer_core::{Edge, InputError, VertexId};
    pub use primer_graph::{build_minimum_spanning_forest, DisjointSet, SpanningForest, WeightedGraph};
    pub use primer_parser::{to_postfix, ParseError};
    pub use primer_pattern::{matches, CompiledPattern, Matcher};
    pub use primer_sequence::{rotate_left, search_unbounded, search_unbounded_by};
}
