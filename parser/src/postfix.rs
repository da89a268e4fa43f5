//! Infix to postfix conversion.

use crate::lexer::{tokenize, Operator, Token, TokenKind};
use crate::{ParseError, ParseResult};
use tracing::debug;

/// Entry on the pending-operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// Open parenthesis and its position, kept for error reporting.
    Open(usize),
}

/// Convert an infix expression to postfix notation.
///
/// Operands are single letters or digits and are emitted in input order.
/// Whitespace is ignored and does not appear in the output. Operands and
/// binary operators must alternate: `a b`, `a+`, `+a` and `()` are rejected.
/// An empty expression converts to an empty string.
pub fn to_postfix(expression: &str) -> ParseResult<String> {
    let tokens = tokenize(expression)?;
    let mut output = String::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    // Operand or `(` comes next, as opposed to an operator or `)`.
    let mut expect_operand = true;
    let seen_tokens = !tokens.is_empty();

    for token in tokens {
        match token.kind {
            TokenKind::Operand(ch) => {
                if !expect_operand {
                    return Err(unexpected(token));
                }
                output.push(ch);
                expect_operand = false;
            }
            TokenKind::LParen => {
                if !expect_operand {
                    return Err(unexpected(token));
                }
                stack.push(Pending::Open(token.position));
            }
            TokenKind::RParen => {
                if expect_operand {
                    return Err(unexpected(token));
                }
                loop {
                    match stack.pop() {
                        Some(Pending::Operator(op)) => output.push(op.symbol()),
                        Some(Pending::Open(_)) => break,
                        None => {
                            return Err(ParseError::UnmatchedClose {
                                position: token.position,
                            })
                        }
                    }
                }
            }
            TokenKind::Operator(op) => {
                if expect_operand {
                    return Err(unexpected(token));
                }
                expect_operand = true;
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if !yields_to(op, top) {
                        break;
                    }
                    output.push(top.symbol());
                    stack.pop();
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    if seen_tokens && expect_operand {
        return Err(ParseError::UnexpectedEnd {
            position: expression.chars().count(),
        });
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(op.symbol()),
            Pending::Open(position) => return Err(ParseError::UnclosedOpen { position }),
        }
    }

    debug!(%expression, postfix = %output, "converted expression");
    Ok(output)
}

fn unexpected(token: Token) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.kind.symbol(),
        position: token.position,
    }
}

/// Whether `top` must be emitted before `incoming` is pushed.
fn yields_to(incoming: Operator, top: Operator) -> bool {
    if incoming.is_right_associative() {
        incoming.precedence() < top.precedence()
    } else {
        incoming.precedence() <= top.precedence()
    }
}
