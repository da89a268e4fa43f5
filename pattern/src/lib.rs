//! Primer Pattern
//!
//! Wildcard matching by dynamic programming.
//!
//! Responsibilities:
//! - Compile a wildcard pattern (`?` = one character, `*` = any run)
//! - Tabulate the match table for a text against a compiled pattern
//! - Decide whether the whole text matches the whole pattern

mod matcher;
mod pattern;
mod table;

pub use matcher::{matches, Matcher};
pub use pattern::{CompiledPattern, PatternOp, ANY_CHAR, ANY_RUN};
pub use table::MatchTable;
