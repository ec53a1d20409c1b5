//! Independent bit-flip noise.
//!
//! Each cell is visited once in row-major order and flipped with probability
//! p. Randomness is always supplied by the caller, so a seeded `StdRng`
//! reproduces the same error pattern.

use log::{debug, trace};
use rand::Rng;

use crate::error::{Result, SurfaceCodeError};
use crate::grid::{Coord, Grid};

/// Check that `p` is a probability (finite, within [0, 1]).
pub fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SurfaceCodeError::invalid(format!(
            "error probability must lie in [0, 1], got {}",
            p
        )))
    }
}

/// Flip every cell independently with probability `p`.
///
/// One uniform draw per cell; the cell flips when the draw is below `p`, so
/// p = 0 never flips and p = 1 always flips.
pub fn inject_noise<'a, R: Rng>(grid: &'a mut Grid, p: f64, rng: &mut R) -> &'a mut Grid {
    let n = grid.distance();
    let mut flips = 0;
    for row in 0..n {
        for col in 0..n {
            if rng.gen::<f64>() < p {
                grid.flip((row, col));
                trace!("noise flipped ({}, {})", row, col);
                flips += 1;
            }
        }
    }
    debug!("injected {} bit flips at p = {}", flips, p);
    grid
}

/// Flip each listed coordinate once.
///
/// Listing a coordinate twice flips it back.
pub fn apply_errors<'a>(grid: &'a mut Grid, errors: &[Coord]) -> &'a mut Grid {
    for &coord in errors {
        grid.flip(coord);
    }
    debug!("applied {} manual errors", errors.len());
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_no_op() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6);
        inject_noise(&mut grid, 0.0, &mut rng);
        assert!(grid.is_all_zero());
    }

    #[test]
    fn test_full_probability_inverts() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(5);
        grid.flip((2, 3));
        inject_noise(&mut grid, 1.0, &mut rng);
        assert_eq!(grid.count_ones(), 24);
        assert_eq!(grid.get((2, 3)), 0);
    }

    #[test]
    fn test_row_major_visit_order() {
        let d = 4;
        let mut grid = Grid::new(d);
        inject_noise(&mut grid, 0.5, &mut StdRng::seed_from_u64(9));

        let mut draws = StdRng::seed_from_u64(9);
        let mut expected = Grid::new(d);
        for r in 0..d {
            for c in 0..d {
                if draws.gen::<f64>() < 0.5 {
                    expected.flip((r, c));
                }
            }
        }
        assert_eq!(grid, expected);

        // The draws must not be symmetric, or the order would be invisible.
        let mut transposed = Grid::new(d);
        for (r, c) in expected.ones() {
            transposed.flip((c, r));
        }
        assert_ne!(expected, transposed);
    }

    #[test]
    fn test_seeded_reproducible() {
        let mut a = Grid::new(8);
        let mut b = Grid::new(8);
        inject_noise(&mut a, 0.3, &mut StdRng::seed_from_u64(42));
        inject_noise(&mut b, 0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_density_near_half() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut ones = 0;
        let mut total = 0;
        for _ in 0..50 {
            let mut grid = Grid::new(10);
            inject_noise(&mut grid, 0.5, &mut rng);
            ones += grid.count_ones();
            total += grid.num_cells();
        }
        assert!(
            ones > total / 4 && ones < 3 * total / 4,
            "flip density at p=0.5 should be near 50%, got {}/{}",
            ones,
            total
        );
    }

    #[test]
    fn test_returns_same_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(3);
        let ones = inject_noise(&mut grid, 1.0, &mut rng).count_ones();
        assert_eq!(ones, 9);
    }

    #[test]
    fn test_apply_errors() {
        let mut grid = Grid::new(3);
        apply_errors(&mut grid, &[(1, 1), (2, 0), (2, 1)]);
        assert_eq!(grid.ones(), vec![(1, 1), (2, 0), (2, 1)]);
        apply_errors(&mut grid, &[(1, 1), (1, 1)]);
        assert_eq!(grid.get((1, 1)), 1);
    }

    #[test]
    fn test_validate_probability() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        assert!(validate_probability(0.2).is_ok());
        assert!(validate_probability(-0.1).is_err());
        assert!(validate_probability(1.5).is_err());
        assert!(validate_probability(f64::NAN).is_err());
    }
}
