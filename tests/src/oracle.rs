//! Reference answers computed independently of the Primer crates.

use primer_core::{Edge, TotalWeight};
use regex_lite::Regex;

// ==================== Wildcards ====================

/// Translate a wildcard pattern into an anchored regular expression.
pub fn wildcard_regex(pattern: &str) -> Regex {
    let mut source = String::from("(?s)^");
    for ch in pattern.chars() {
        match ch {
            '?' => source.push('.'),
            '*' => source.push_str(".*"),
            other => source.push_str(&regex_lite::escape(&other.to_string())),
        }
    }
    source.push('$');
    Regex::new(&source).expect("translated wildcard is a valid regex")
}

/// Whether `text` matches `pattern`, decided by a regex engine.
pub fn regex_matches(text: &str, pattern: &str) -> bool {
    wildcard_regex(pattern).is_match(text)
}

// ==================== Graphs ====================

/// Component label per vertex, merged by relabelling.
fn labels(vertex_count: usize, edges: &[&Edge]) -> (Vec<usize>, bool) {
    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut acyclic = true;

    for edge in edges {
        let from = label[edge.source.index()];
        let to = label[edge.destination.index()];
        if from == to {
            acyclic = false;
            continue;
        }
        for l in label.iter_mut() {
            if *l == from {
                *l = to;
            }
        }
    }

    (label, acyclic)
}

/// Number of connected components, counting isolated vertices.
pub fn component_count(vertex_count: usize, edges: &[Edge]) -> usize {
    let refs: Vec<&Edge> = edges.iter().collect();
    let (mut label, _) = labels(vertex_count, &refs);
    label.sort_unstable();
    label.dedup();
    label.len()
}

/// Whether the edges form a forest.
pub fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let refs: Vec<&Edge> = edges.iter().collect();
    labels(vertex_count, &refs).1
}

/// Minimum total weight of a spanning forest, by trying every edge subset.
///
/// Only usable for small edge lists.
pub fn minimum_forest_weight(vertex_count: usize, edges: &[Edge]) -> TotalWeight {
    assert!(edges.len() <= 16, "exhaustive search over {} edges", edges.len());
    let wanted = vertex_count - component_count(vertex_count, edges);
    let mut best = TotalWeight::MAX;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let subset: Vec<&Edge> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if !labels(vertex_count, &subset).1 {
            continue;
        }
        let weight = primer_core::total_weight(subset.iter().copied());
        best = best.min(weight);
    }

    if wanted == 0 {
        0
    } else {
        best
    }
}

// ==================== Expressions ====================

/// Evaluate an infix expression of single digits by recursive descent.
pub fn eval_infix(expression: &str) -> f64 {
    let chars: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parser = InfixEval { chars, pos: 0 };
    let value = parser.sum();
    assert_eq!(parser.pos, parser.chars.len(), "trailing input in {}", expression);
    value
}

struct InfixEval {
    chars: Vec<char>,
    pos: usize,
}

impl InfixEval {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn sum(&mut self) -> f64 {
        let mut value = self.product();
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.product();
            value = apply(op, value, rhs);
        }
        value
    }

    fn product(&mut self) -> f64 {
        let mut value = self.power();
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.power();
            value = apply(op, value, rhs);
        }
        value
    }

    fn power(&mut self) -> f64 {
        let base = self.atom();
        if self.peek() == Some('^') {
            self.pos += 1;
            let exponent = self.power();
            return apply('^', base, exponent);
        }
        base
    }

    fn atom(&mut self) -> f64 {
        let ch = self.peek().expect("operand expected");
        self.pos += 1;
        if ch == '(' {
            let value = self.sum();
            assert_eq!(self.peek(), Some(')'));
            self.pos += 1;
            return value;
        }
        ch.to_digit(10).expect("digit operand") as f64
    }
}

/// Evaluate a postfix expression of single digits with a value stack.
pub fn eval_postfix(postfix: &str) -> f64 {
    let mut stack: Vec<f64> = Vec::new();
    for ch in postfix.chars() {
        match ch.to_digit(10) {
            Some(digit) => stack.push(digit as f64),
            None => {
                let rhs = stack.pop().expect("right operand");
                let lhs = stack.pop().expect("left operand");
                stack.push(apply(ch, lhs, rhs));
            }
        }
    }
    assert_eq!(stack.len(), 1, "unbalanced postfix {}", postfix);
    stack[0]
}

fn apply(op: char, lhs: f64, rhs: f64) -> f64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => lhs / rhs,
        '^' => lhs.powf(rhs),
        other => panic!("unknown operator {}", other),
    }
}

/// Equality that treats two NaNs as equal.
pub fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_oracle() {
        assert!(regex_matches("adceb", "*a*b"));
        assert!(!regex_matches("acdcb", "a*c?b"));
        assert!(regex_matches("a.b", "a.b"));
        assert!(!regex_matches("axb", "a.b"));
    }

    #[test]
    fn test_forest_oracle_on_sample() {
        let edges = vec![
            Edge::new(0, 1, 10),
            Edge::new(0, 2, 6),
            Edge::new(0, 3, 5),
            Edge::new(1, 3, 15),
            Edge::new(2, 3, 4),
        ];
        assert_eq!(component_count(4, &edges), 1);
        assert!(!is_acyclic(4, &edges));
        assert_eq!(minimum_forest_weight(4, &edges), 19);
    }

    #[test]
    fn test_expression_oracles() {
        assert_eq!(eval_infix("1+2*3"), 7.0);
        assert_eq!(eval_infix("2^3^2"), 512.0);
        assert_eq!(eval_infix("(1+2)*3"), 9.0);
        assert_eq!(eval_postfix("123*+"), 7.0);
        assert_eq!(eval_postfix("232^^"), 512.0);
    }
}
