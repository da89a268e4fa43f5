//! Primer Parser
//!
//! Conversion of infix arithmetic expressions to postfix notation:
//! - Tokenizing single-character operands, operators and parentheses
//! - Operator-precedence conversion with an explicit operator stack
//! - Error handling with character positions

mod error;
mod lexer;
mod postfix;

pub use error::*;
pub use lexer::{tokenize, Operator, Token, TokenKind};
pub use postfix::to_postfix;
