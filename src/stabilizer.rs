//! Plaquette checks over 2×2 neighbourhoods.
//!
//! Plaquette (r, c) covers the cells (r, c), (r, c+1), (r+1, c), (r+1, c+1).
//! Unlike the toric lattice there is no wraparound: only plaquettes fully
//! inside the grid exist, so a distance-d grid has (d-1)² of them.

use crate::grid::Coord;

/// A check region: the four corners of a unit plaquette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stabilizer {
    /// Top-left corner of the plaquette.
    pub origin: Coord,
    /// Members in fixed order: top-left, top-right, bottom-left, bottom-right.
    pub members: [Coord; 4],
}

impl Stabilizer {
    /// Plaquette whose top-left corner is `(row, col)`.
    pub fn at(row: usize, col: usize) -> Self {
        Self {
            origin: (row, col),
            members: [
                (row, col),         // top-left
                (row, col + 1),     // top-right
                (row + 1, col),     // bottom-left
                (row + 1, col + 1), // bottom-right
            ],
        }
    }

    pub fn members(&self) -> &[Coord; 4] {
        &self.members
    }

    /// Whether `coord` is one of the four members.
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }
}

/// Generate every plaquette of a distance×distance grid in row-major order.
///
/// Depends only on `distance`. Returns an empty list for distance ≤ 1.
pub fn generate_stabilizers(distance: usize) -> Vec<Stabilizer> {
    let span = distance.saturating_sub(1);
    let mut stabilizers = Vec::with_capacity(span * span);
    for row in 0..span {
        for col in 0..span {
            stabilizers.push(Stabilizer::at(row, col));
        }
    }
    stabilizers
}
