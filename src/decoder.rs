//! Correction from syndrome evidence.
//!
//! The correction step is split in two: a [`Decoder`] turns a syndrome table
//! into the set of cells to flip, then [`correct_with`] applies those flips.
//! Decoding finishes before the first flip, so no flip can influence the
//! evidence for another cell.
//!
//! [`TallyDecoder`] is the default: every cell that any stabilizer read as 1
//! is flipped exactly once. The tally only serves as a presence test. It
//! cannot tell one error from several overlapping ones, so it may both
//! under- and over-correct.

use std::collections::BTreeMap;

use log::debug;

use crate::grid::{Coord, Grid};
use crate::stabilizer::Stabilizer;
use crate::syndrome::SyndromeTable;

/// Per-cell count of stabilizers that read the cell as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTally {
    counts: BTreeMap<Coord, usize>,
}

impl ErrorTally {
    /// Scan the table and count, for each entry equal to 1, the coordinate
    /// it refers to (`stabilizers[i].members[j]`).
    ///
    /// # Panics
    ///
    /// Panics if the table and stabilizer list differ in length.
    pub fn from_syndromes(table: &SyndromeTable, stabilizers: &[Stabilizer]) -> Self {
        assert_eq!(
            table.len(),
            stabilizers.len(),
            "Syndrome table must have one row per stabilizer"
        );
        let mut counts = BTreeMap::new();
        for (row, stab) in table.rows().iter().zip(stabilizers) {
            for (&value, &coord) in row.iter().zip(stab.members.iter()) {
                if value == 1 {
                    *counts.entry(coord).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Tally for `coord` (0 when never flagged).
    pub fn count(&self, coord: Coord) -> usize {
        self.counts.get(&coord).copied().unwrap_or(0)
    }

    /// Number of distinct flagged coordinates.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Coordinates with a positive tally, row-major.
    pub fn candidates(&self) -> Vec<Coord> {
        self.counts
            .iter()
            .filter(|(_, &n)| n > 0)
            .map(|(&c, _)| c)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// Strategy that maps syndrome evidence to the cells to flip.
pub trait Decoder {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Coordinates to flip. Each listed coordinate is flipped once.
    fn decode(&self, table: &SyndromeTable, stabilizers: &[Stabilizer]) -> Vec<Coord>;
}

/// Flip every cell with a positive tally, regardless of its magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallyDecoder;

impl Decoder for TallyDecoder {
    fn name(&self) -> &'static str {
        "tally"
    }

    fn decode(&self, table: &SyndromeTable, stabilizers: &[Stabilizer]) -> Vec<Coord> {
        ErrorTally::from_syndromes(table, stabilizers).candidates()
    }
}

/// Decode with `decoder`, then flip the returned cells in place.
pub fn correct_with<'a, D: Decoder + ?Sized>(
    decoder: &D,
    grid: &'a mut Grid,
    table: &SyndromeTable,
    stabilizers: &[Stabilizer],
) -> &'a mut Grid {
    let flips = decoder.decode(table, stabilizers);
    debug!("{} decoder flips {} cells", decoder.name(), flips.len());
    for coord in flips {
        grid.flip(coord);
    }
    grid
}

/// Correct the grid with the default [`TallyDecoder`].
pub fn correct<'a>(
    grid: &'a mut Grid,
    table: &SyndromeTable,
    stabilizers: &[Stabilizer],
) -> &'a mut Grid {
    correct_with(&TallyDecoder, grid, table, stabilizers)
}
