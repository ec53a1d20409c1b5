//! Syndrome measurement.
//!
//! Each stabilizer records the **raw values** of its four member cells, in
//! member order (top-left, top-right, bottom-left, bottom-right). This is not
//! the parity a real surface code reports: a plaquette with two flipped
//! cells reads `[1, 1, 0, 0]` here, while its true syndrome would be 0.
//! [`SyndromeTable::parity`] exposes the XOR for comparison, but the decoder
//! works on the raw values.

use std::fmt;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::grid::Grid;
use crate::stabilizer::Stabilizer;

/// One row per stabilizer, four raw cell values per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndromeTable {
    rows: Vec<[u8; 4]>,
}

impl SyndromeTable {
    /// Build a table from explicit rows.
    pub fn from_rows(rows: Vec<[u8; 4]>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[u8; 4]] {
        &self.rows
    }

    /// Row `i`, i.e. the reading of stabilizer `i`.
    pub fn row(&self, i: usize) -> [u8; 4] {
        self.rows[i]
    }

    /// Number of rows (equals the number of stabilizers measured).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of entries equal to 1 across the whole table.
    pub fn flagged_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v == 1)
            .count()
    }

    /// True when no entry is 1.
    pub fn is_all_zero(&self) -> bool {
        self.flagged_count() == 0
    }

    /// XOR parity of row `i`: the syndrome a real plaquette check would report.
    pub fn parity(&self, i: usize) -> u8 {
        self.rows[i].iter().fold(0, |acc, v| acc ^ v)
    }
}

impl fmt::Display for SyndromeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

fn read_stabilizer(grid: &Grid, stabilizer: &Stabilizer) -> [u8; 4] {
    let m = &stabilizer.members;
    [grid.get(m[0]), grid.get(m[1]), grid.get(m[2]), grid.get(m[3])]
}

/// Read every stabilizer's member values from the grid.
///
/// Pure read: the grid is not modified and repeated calls agree.
///
/// # Panics
///
/// Panics if a stabilizer references a cell outside the grid.
pub fn measure_syndromes(grid: &Grid, stabilizers: &[Stabilizer]) -> SyndromeTable {
    #[cfg(feature = "parallel")]
    let rows: Vec<[u8; 4]> = stabilizers
        .par_iter()
        .map(|s| read_stabilizer(grid, s))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<[u8; 4]> = stabilizers
        .iter()
        .map(|s| read_stabilizer(grid, s))
        .collect();

    let table = SyndromeTable { rows };
    debug!(
        "measured {} stabilizers, {} flagged entries",
        table.len(),
        table.flagged_count()
    );
    table
}
