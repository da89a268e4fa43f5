//! Lexer (tokenizer) for infix expressions.

use crate::{ParseError, ParseResult};
use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow => 3,
        }
    }

    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`; every other operator groups left.
    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Pow)
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single letter or digit.
    Operand(char),
    Operator(Operator),
    LParen, // (
    RParen, // )
}

impl TokenKind {
    /// The character the token was read from.
    pub fn symbol(&self) -> char {
        match self {
            TokenKind::Operand(ch) => *ch,
            TokenKind::Operator(op) => op.symbol(),
            TokenKind::LParen => '(',
            TokenKind::RParen => ')',
        }
    }
}

/// A token with its character offset in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Split an infix expression into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for (position, ch) in input.chars().enumerate() {
        let kind = match ch {
            c if c.is_whitespace() => continue,
            c if c.is_alphanumeric() => TokenKind::Operand(c),
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            c => match Operator::from_char(c) {
                Some(op) => TokenKind::Operator(op),
                None => return Err(ParseError::UnexpectedCharacter { ch: c, position }),
            },
        };
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}
