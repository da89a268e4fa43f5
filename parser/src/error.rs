//! Parser error types.

use thiserror::Error;

/// Errors raised while converting an expression.
///
/// Positions are character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Character that is neither operand, operator, parenthesis nor space.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// `)` without a matching `(`.
    #[error("Unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },

    /// `(` never closed.
    #[error("Unclosed '(' at position {position}")]
    UnclosedOpen { position: usize },

    /// Valid character in the wrong place, such as two operands in a row
    /// or an operator with no left operand.
    #[error("Unexpected '{token}' at position {position}")]
    UnexpectedToken { token: char, position: usize },

    /// Input ended where an operand was required.
    #[error("Missing operand at position {position}")]
    UnexpectedEnd { position: usize },
}

impl ParseError {
    /// Character offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnmatchedClose { position }
            | ParseError::UnclosedOpen { position }
            | ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position } => *position,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
