use crate::{BitFlagReader, DecodeError, Grid, NibbleReader};
use crate::grid::Cell;
use serde::{Deserialize, Serialize};

/// Sentinel written into the 0-based scratch grid for masked cells. Kept
/// negative so it stays distinguishable from every legitimate 0-based value.
const MASKED: i16 = -1;

/// A single Sudoku puzzle decoded from an .adkb record.
///
/// Constructed empty and bound to its two raw byte slices, then loaded
/// exactly once by [`Puzzle::load`]. The derived views all return `None`
/// (or [`DecodeError::NotLoaded`]) until that happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Grid side length N (9 for standard archives).
    pub dimension: usize,
    pub grid: Grid,
    /// Nibble-packed values of the top-left (N-1) x (N-1) block.
    pub raw_values: Vec<u8>,
    /// Bit-packed keep/remove flags, one per cell, row-major.
    pub raw_mask: Vec<u8>,
    pub loaded: bool,
    pub solved: bool,
}

impl Puzzle {
    pub fn new(dimension: usize, raw_values: Vec<u8>, raw_mask: Vec<u8>) -> Self {
        Self {
            dimension,
            grid: Grid::empty(dimension),
            raw_values,
            raw_mask,
            loaded: false,
            solved: false,
        }
    }

    /// Decode the raw streams into the grid.
    ///
    /// The archive only stores the top-left (N-1) x (N-1) block; the final
    /// column and row are reconstructed from the fixed row/column-sum
    /// identity: every line of a complete grid is a permutation of `0..N`,
    /// so it sums to `N(N-1)/2` and the missing entry follows by
    /// subtraction. The row pass fully precedes the column pass, so the
    /// bottom-right cell keeps the column-derived value (on a well-formed
    /// archive both derivations agree).
    ///
    /// With `as_solved` set the removal mask is skipped and the grid comes
    /// out fully known.
    pub fn load(&mut self, as_solved: bool) -> Result<(), DecodeError> {
        let n = self.dimension;
        let mut values = vec![vec![0i16; n]; n];

        // Top-left block from the nibble stream, row-major, 0-based.
        let mut nibbles = NibbleReader::new(&self.raw_values);
        for row in values.iter_mut().take(n - 1) {
            for cell in row.iter_mut().take(n - 1) {
                *cell = i16::from(nibbles.next()?);
            }
        }

        let line_sum = (n * (n - 1) / 2) as i16;

        // Final column of the first N-1 rows.
        for row in values.iter_mut().take(n - 1) {
            let sum: i16 = row[..n - 1].iter().sum();
            row[n - 1] = line_sum - sum;
        }

        // Final row, across all N columns.
        for col in 0..n {
            let sum: i16 = (0..n - 1).map(|row| values[row][col]).sum();
            values[n - 1][col] = line_sum - sum;
        }

        // Hide cells whose mask flag is unset, before the 1-based shift.
        if !as_solved {
            let mut mask = BitFlagReader::new(&self.raw_mask);
            for row in values.iter_mut() {
                for cell in row.iter_mut() {
                    if !mask.next()? {
                        *cell = MASKED;
                    }
                }
            }
        }

        // Shift 0-based values into the 1-based domain.
        self.grid.cells = values
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| {
                        if v == MASKED {
                            Cell::Unknown
                        } else {
                            Cell::Value((v + 1) as u8)
                        }
                    })
                    .collect()
            })
            .collect();

        self.loaded = true;
        self.solved = as_solved;
        Ok(())
    }

    /// Row-major concatenation of single-digit cell values, unknown cells
    /// as '0'. `None` before the puzzle is loaded.
    pub fn flattened(&self) -> Option<String> {
        self.loaded.then(|| self.grid.flattened())
    }

    /// Dotted symbols form with unknown cells as '.'. `None` before load.
    pub fn symbols(&self) -> Option<String> {
        self.loaded.then(|| self.grid.symbols())
    }

    /// Comma-separated candidate bitmasks, the wire format expected by the
    /// external grading service. `None` before load.
    pub fn candidate_line(&self) -> Option<String> {
        self.loaded.then(|| self.grid.candidate_line())
    }

    /// Rotate the grid 90 degrees counter-clockwise in place.
    pub fn rotate90(&mut self) -> Result<(), DecodeError> {
        if !self.loaded {
            return Err(DecodeError::NotLoaded);
        }
        self.grid.rotate90();
        Ok(())
    }
}
