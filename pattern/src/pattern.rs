//! Compiled wildcard patterns.

use std::fmt;

/// Wildcard matching exactly one character.
pub const ANY_CHAR: char = '?';

/// Wildcard matching zero or more characters.
pub const ANY_RUN: char = '*';

/// A single step of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOp {
    /// Match this exact character.
    Literal(char),
    /// Match any one character (`?`).
    AnyChar,
    /// Match any run of characters, including the empty run (`*`).
    AnyRun,
}

impl PatternOp {
    /// Returns true if this op consumes exactly one text character.
    pub fn is_single(&self) -> bool {
        !matches!(self, PatternOp::AnyRun)
    }

    /// Returns true if this op accepts the given text character.
    ///
    /// `AnyRun` accepts every character; whether it consumes one is decided
    /// by the match table, not here.
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            PatternOp::Literal(expected) => *expected == ch,
            PatternOp::AnyChar | PatternOp::AnyRun => true,
        }
    }
}

impl fmt::Display for PatternOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternOp::Literal(ch) => write!(f, "{}", ch),
            PatternOp::AnyChar => write!(f, "{}", ANY_CHAR),
            PatternOp::AnyRun => write!(f, "{}", ANY_RUN),
        }
    }
}

/// A wildcard pattern compiled into ops.
///
/// Adjacent `*` wildcards are collapsed into a single `AnyRun`, which never
/// changes what the pattern matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPattern {
    /// Ops in pattern order.
    pub ops: Vec<PatternOp>,
}

impl CompiledPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Self {
        let mut ops = Vec::with_capacity(pattern.len());

        for ch in pattern.chars() {
            let op = match ch {
                ANY_CHAR => PatternOp::AnyChar,
                ANY_RUN => PatternOp::AnyRun,
                other => PatternOp::Literal(other),
            };

            if op == PatternOp::AnyRun && ops.last() == Some(&PatternOp::AnyRun) {
                continue;
            }
            ops.push(op);
        }

        Self { ops }
    }

    /// The compiled ops.
    pub fn ops(&self) -> &[PatternOp] {
        &self.ops
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true for the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Minimum number of text characters any match must contain.
    pub fn min_text_len(&self) -> usize {
        self.ops.iter().filter(|op| op.is_single()).count()
    }

    /// Returns true if the pattern contains no wildcards.
    pub fn is_literal(&self) -> bool {
        self.ops
            .iter()
            .all(|op| matches!(op, PatternOp::Literal(_)))
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
