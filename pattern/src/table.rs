//! The dynamic-programming match table.

use std::fmt;

/// Boolean table where cell `(i, j)` is true when the first `i` text
/// characters are fully matched by the first `j` pattern ops.
///
/// Stored row-major in one contiguous vector of `rows * cols` cells.
#[derive(Clone, PartialEq, Eq)]
pub struct MatchTable {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl MatchTable {
    /// Create an all-false table for a text of `text_len` characters and a
    /// pattern of `pattern_len` ops.
    pub(crate) fn new(text_len: usize, pattern_len: usize) -> Self {
        let rows = text_len + 1;
        let cols = pattern_len + 1;
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows (text length + 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (pattern length + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value. Out-of-range coordinates read as false.
    pub fn get(&self, i: usize, j: usize) -> bool {
        if i >= self.rows || j >= self.cols {
            return false;
        }
        self.cells[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: bool) {
        self.cells[i * self.cols + j] = value;
    }

    /// Whether the whole text matches the whole pattern.
    pub fn result(&self) -> bool {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl fmt::Debug for MatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MatchTable {}x{}", self.rows, self.cols)?;
        for i in 0..self.rows {
            let row: String = (0..self.cols)
                .map(|j| if self.get(i, j) { '1' } else { '.' })
                .collect();
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}
