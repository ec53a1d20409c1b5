//! Square grid of binary cells.
//!
//! The grid is a distance×distance matrix of bits stored as `u8` (0 or 1).
//! Cells are addressed by `(row, col)` with both indices in `[0, distance)`.
//! Noise and correction mutate it in place; measurement only reads it.

use std::fmt;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// A distance×distance grid of binary cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    distance: usize,
    cells: Vec<Vec<u8>>,
}

impl Grid {
    /// Create a zero-filled distance×distance grid.
    ///
    /// Every call allocates a fresh grid; nothing is shared between grids.
    pub fn new(distance: usize) -> Self {
        assert!(distance >= 1, "Grid distance must be at least 1");
        Self {
            distance,
            cells: vec![vec![0; distance]; distance],
        }
    }

    /// Side length of the grid.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Total number of cells (distance²).
    pub fn num_cells(&self) -> usize {
        self.distance * self.distance
    }

    /// Whether `coord` lies inside a distance×distance grid.
    pub fn in_bounds(distance: usize, coord: Coord) -> bool {
        coord.0 < distance && coord.1 < distance
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        Self::in_bounds(self.distance, coord)
    }

    /// Value stored at `coord`.
    pub fn get(&self, coord: Coord) -> u8 {
        self.cells[coord.0][coord.1]
    }

    /// Overwrite the cell at `coord`. Any nonzero value is stored as 1.
    pub fn set(&mut self, coord: Coord, value: u8) {
        self.cells[coord.0][coord.1] = u8::from(value != 0);
    }

    /// Toggle the cell at `coord` between 0 and 1.
    pub fn flip(&mut self, coord: Coord) {
        self.cells[coord.0][coord.1] ^= 1;
    }

    /// Rows of the grid (read-only).
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let n = self.distance;
        (0..n).flat_map(move |r| (0..n).map(move |c| (r, c)))
    }

    /// Number of cells holding 1.
    pub fn count_ones(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v == 1)
            .count()
    }

    /// Coordinates of cells holding 1, row-major.
    pub fn ones(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.get(c) == 1).collect()
    }

    /// True when every cell is 0 (the only logical state of this model).
    pub fn is_all_zero(&self) -> bool {
        self.count_ones() == 0
    }

    /// Reset all cells to 0.
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|row| row.iter_mut().for_each(|v| *v = 0));
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zero() {
        let grid = Grid::new(4);
        assert_eq!(grid.distance(), 4);
        assert_eq!(grid.num_cells(), 16);
        assert_eq!(grid.rows().len(), 4);
        assert!(grid.rows().iter().all(|row| row.len() == 4));
        assert!(grid.is_all_zero());
    }

    #[test]
    fn test_grids_are_independent() {
        let mut a = Grid::new(3);
        let b = Grid::new(3);
        a.flip((1, 1));
        assert_eq!(a.get((1, 1)), 1);
        assert_eq!(b.get((1, 1)), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_flip_toggles() {
        let mut grid = Grid::new(3);
        grid.flip((2, 0));
        assert_eq!(grid.get((2, 0)), 1);
        grid.flip((2, 0));
        assert_eq!(grid.get((2, 0)), 0);
    }

    #[test]
    fn test_set_normalises_to_bit() {
        let mut grid = Grid::new(2);
        grid.set((0, 1), 7);
        assert_eq!(grid.get((0, 1)), 1);
        grid.set((0, 1), 0);
        assert_eq!(grid.get((0, 1)), 0);
    }

    #[test]
    fn test_ones_row_major() {
        let mut grid = Grid::new(3);
        grid.flip((2, 1));
        grid.flip((0, 2));
        grid.flip((1, 1));
        assert_eq!(grid.ones(), vec![(0, 2), (1, 1), (2, 1)]);
        assert_eq!(grid.count_ones(), 3);
        grid.clear();
        assert!(grid.is_all_zero());
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(3);
        assert!(grid.contains((2, 2)));
        assert!(!grid.contains((3, 0)));
        assert!(!grid.contains((0, 3)));
    }

    #[test]
    fn test_in_bounds_matches_contains() {
        let grid = Grid::new(4);
        for r in 0..6 {
            for c in 0..6 {
                assert_eq!(Grid::in_bounds(4, (r, c)), grid.contains((r, c)));
            }
        }
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2);
        grid.flip((1, 0));
        assert_eq!(grid.to_string(), "0 0\n1 0\n");
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn test_zero_distance_panics() {
        let _ = Grid::new(0);
    }
}
