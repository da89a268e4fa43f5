//! Wildcard matching against a text.

use crate::{CompiledPattern, MatchTable, PatternOp};
use tracing::trace;

/// Decide whether `text` is fully matched by the wildcard `pattern`.
///
/// `?` matches exactly one character and `*` matches any run of characters,
/// including none. Every other character matches only itself.
pub fn matches(text: &str, pattern: &str) -> bool {
    let pattern = CompiledPattern::compile(pattern);
    Matcher::new(&pattern).is_match(text)
}

/// Matcher for one compiled pattern, reusable across texts.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'p> {
    pattern: &'p CompiledPattern,
}

impl<'p> Matcher<'p> {
    /// Create a new matcher.
    pub fn new(pattern: &'p CompiledPattern) -> Self {
        Self { pattern }
    }

    /// The pattern this matcher runs.
    pub fn pattern(&self) -> &'p CompiledPattern {
        self.pattern
    }

    /// Check whether the whole text matches the whole pattern.
    pub fn is_match(&self, text: &str) -> bool {
        // Every non-`*` op consumes exactly one character.
        if text.chars().count() < self.pattern.min_text_len() {
            return false;
        }
        self.table(text).result()
    }

    /// Tabulate the full match table for `text`.
    pub fn table(&self, text: &str) -> MatchTable {
        let text: Vec<char> = text.chars().collect();
        let ops = self.pattern.ops();
        let mut table = MatchTable::new(text.len(), ops.len());
        trace!(rows = table.rows(), cols = table.cols(), "building match table");

        table.set(0, 0, true);

        // Empty text: only a run of `*` keeps matching.
        for (j, op) in ops.iter().enumerate() {
            let j = j + 1;
            if *op == PatternOp::AnyRun {
                table.set(0, j, table.get(0, j - 1));
            }
        }

        for (i, &ch) in text.iter().enumerate() {
            let i = i + 1;
            for (j, op) in ops.iter().enumerate() {
                let j = j + 1;
                let cell = match op {
                    PatternOp::AnyRun => table.get(i, j - 1) || table.get(i - 1, j),
                    single if single.accepts(ch) => table.get(i - 1, j - 1),
                    _ => false,
                };
                table.set(i, j, cell);
            }
        }

        table
    }
}
