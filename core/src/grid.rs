use serde::{Deserialize, Serialize};

/// A single cell of a decoded puzzle grid.
///
/// `Unknown` marks a cell hidden by the removal mask. It is a distinct
/// variant rather than a reserved number, so it can never collide with a
/// legitimate decoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Unknown,
    /// A known value in `[1, N]`.
    Value(u8),
}

impl Cell {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Cell::Unknown)
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Cell::Unknown => None,
            Cell::Value(v) => Some(*v),
        }
    }

    /// Single-character rendering for the flattened form.
    ///
    /// Unknown cells render as '0'; legitimate values are 1..=N, so '0' is
    /// unambiguous. Only meaningful for N <= 9.
    pub fn digit_char(&self) -> char {
        match self {
            Cell::Unknown => '0',
            Cell::Value(v) => (b'0' + v) as char,
        }
    }

    /// Single-character rendering for the dotted symbols form.
    pub fn symbol_char(&self) -> char {
        match self {
            Cell::Unknown => '.',
            Cell::Value(v) => (b'0' + v) as char,
        }
    }

    /// Candidate bitmask used by the sudokuwiki wire format: value `v` maps
    /// to `1 << (v - 1)`, unknown maps to all N candidates set (511 for
    /// N = 9).
    pub fn candidate_mask(&self, dimension: usize) -> u32 {
        match self {
            Cell::Unknown => (1u32 << dimension) - 1,
            Cell::Value(v) => 1u32 << (v - 1),
        }
    }
}

/// An N x N grid of decoded cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub dimension: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every cell unknown.
    pub fn empty(dimension: usize) -> Self {
        let cells = vec![vec![Cell::Unknown; dimension]; dimension];
        Self { dimension, cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Rotate the grid 90 degrees counter-clockwise in place.
    pub fn rotate90(&mut self) {
        let n = self.dimension;
        let mut rotated = vec![vec![Cell::Unknown; n]; n];
        for (i, row) in rotated.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[j][n - 1 - i];
            }
        }
        self.cells = rotated;
    }

    /// Row-major concatenation of single-digit cell values.
    pub fn flattened(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(Cell::digit_char)
            .collect()
    }

    /// Row-major symbols string with unknown cells as '.'.
    pub fn symbols(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(Cell::symbol_char)
            .collect()
    }

    /// Comma-separated candidate bitmasks, row-major.
    pub fn candidate_line(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.candidate_mask(self.dimension).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
