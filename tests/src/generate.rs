//! Seeded random input generators.

use primer_core::Edge;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a deterministic generator.
pub fn seeded(seed: u64) -> Generator {
    Generator {
        rng: StdRng::seed_from_u64(seed),
    }
}

/// Random input source for property tests.
pub struct Generator {
    pub rng: StdRng,
}

impl Generator {
    /// Text over a small alphabet so that random patterns match often.
    /// Wildcard characters appear too; in text they are plain characters.
    pub fn text(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(0..=max_len);
        (0..len).map(|_| self.pick(&['a', 'b', 'c', '*', '?'])).collect()
    }

    /// Pattern over the text alphabet plus both wildcards.
    pub fn pattern(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(0..=max_len);
        (0..len).map(|_| self.pick(&['a', 'b', '?', '*', '*'])).collect()
    }

    /// Edge list over `vertex_count` vertices, including self-loops and
    /// parallel edges. `vertex_count` must be at least 1.
    pub fn edges(&mut self, vertex_count: usize, max_edges: usize, max_weight: u64) -> Vec<Edge> {
        let count = self.rng.gen_range(0..=max_edges);
        let upper = vertex_count as u32;
        (0..count)
            .map(|_| {
                Edge::new(
                    self.rng.gen_range(0..upper),
                    self.rng.gen_range(0..upper),
                    self.rng.gen_range(0..=max_weight),
                )
            })
            .collect()
    }

    /// Strictly increasing sequence.
    pub fn sorted_unique(&mut self, max_len: usize) -> Vec<i64> {
        let len = self.rng.gen_range(0..=max_len);
        let mut value = self.rng.gen_range(-20..20);
        (0..len)
            .map(|_| {
                value += self.rng.gen_range(1..5);
                value
            })
            .collect()
    }

    /// Infix expression over the digits 1 to 3 with `+ - * / ^` and
    /// parentheses.
    pub fn infix(&mut self, depth: usize) -> String {
        if depth == 0 || self.rng.gen_bool(0.3) {
            return self.pick(&['1', '2', '3']).to_string();
        }
        if self.rng.gen_bool(0.2) {
            return format!("({})", self.infix(depth - 1));
        }
        let op = self.pick(&['+', '-', '*', '/', '^']);
        format!("{}{}{}", self.infix(depth - 1), op, self.infix(depth - 1))
    }

    fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.rng.gen_range(0..choices.len())]
    }
}
