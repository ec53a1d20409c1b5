//! Pipeline orchestration and Monte Carlo experiments.
//!
//! A single run goes: zero grid → stabilizers → noise → measurement →
//! correction → comparison with a fresh zero grid. Parameters are checked
//! before any stage runs.
//!
//! Experiments repeat the run many times on one RNG and report how often the
//! tally decoder restores the all-zero grid.

use std::fmt;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::decoder::{correct_with, Decoder, TallyDecoder};
use crate::error::{Result, SurfaceCodeError};
use crate::grid::{Coord, Grid};
use crate::noise::{apply_errors, inject_noise, validate_probability};
use crate::stabilizer::{generate_stabilizers, Stabilizer};
use crate::syndrome::{measure_syndromes, SyndromeTable};

/// Largest accepted grid distance (inclusive).
pub const MAX_DISTANCE: usize = 10;

/// Flip probability used when the caller has no preference.
pub const DEFAULT_ERROR_PROBABILITY: f64 = 0.2;

/// Check that `distance` lies in `1..=MAX_DISTANCE`.
pub fn validate_distance(distance: usize) -> Result<()> {
    if distance > MAX_DISTANCE {
        return Err(SurfaceCodeError::invalid(
            "distance exceeds maximum allowed value",
        ));
    }
    if distance < 1 {
        return Err(SurfaceCodeError::invalid("distance must be at least 1"));
    }
    Ok(())
}

/// Every intermediate state of one pipeline run.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub distance: usize,
    pub stabilizers: Vec<Stabilizer>,
    /// Grid before noise (all zero).
    pub initial: Grid,
    /// Grid after noise or manual errors.
    pub noisy: Grid,
    pub syndromes: SyndromeTable,
    pub corrected: Grid,
    /// Whether `corrected` equals a fresh zero grid.
    pub success: bool,
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial grid:")?;
        write!(f, "{}", self.initial)?;
        writeln!(f, "Grid after noise:")?;
        write!(f, "{}", self.noisy)?;
        writeln!(f, "Syndrome table:")?;
        write!(f, "{}", self.syndromes)?;
        writeln!(f, "Corrected grid:")?;
        write!(f, "{}", self.corrected)?;
        writeln!(f, "Error correction successful: {}", self.success)
    }
}

fn run_pipeline<D, F>(distance: usize, decoder: &D, disturb: F) -> SimulationOutcome
where
    D: Decoder + ?Sized,
    F: FnOnce(&mut Grid),
{
    let initial = Grid::new(distance);
    trace!("initial grid:\n{}", initial);

    let stabilizers = generate_stabilizers(distance);
    debug!("generated {} stabilizers for distance {}", stabilizers.len(), distance);

    let mut grid = initial.clone();
    disturb(&mut grid);
    let noisy = grid.clone();
    trace!("grid after noise:\n{}", noisy);

    let syndromes = measure_syndromes(&grid, &stabilizers);
    trace!("syndrome table:\n{}", syndromes);

    correct_with(decoder, &mut grid, &syndromes, &stabilizers);
    trace!("corrected grid:\n{}", grid);

    let success = grid == Grid::new(distance);
    info!(
        "distance {}: {} errors, {} left after {} decoding, success = {}",
        distance,
        noisy.count_ones(),
        grid.count_ones(),
        decoder.name(),
        success
    );

    SimulationOutcome {
        distance,
        stabilizers,
        initial,
        noisy,
        syndromes,
        corrected: grid,
        success,
    }
}

/// Run the full pipeline with random noise and the tally decoder.
pub fn simulate<R: Rng>(
    distance: usize,
    error_probability: f64,
    rng: &mut R,
) -> Result<SimulationOutcome> {
    simulate_with_decoder(distance, error_probability, &TallyDecoder, rng)
}

/// [`simulate`] at [`DEFAULT_ERROR_PROBABILITY`].
pub fn simulate_default<R: Rng>(distance: usize, rng: &mut R) -> Result<SimulationOutcome> {
    simulate(distance, DEFAULT_ERROR_PROBABILITY, rng)
}

/// Run the full pipeline with random noise and a caller-chosen decoder.
pub fn simulate_with_decoder<D: Decoder + ?Sized, R: Rng>(
    distance: usize,
    error_probability: f64,
    decoder: &D,
    rng: &mut R,
) -> Result<SimulationOutcome> {
    validate_distance(distance)?;
    validate_probability(error_probability)?;
    Ok(run_pipeline(distance, decoder, |grid| {
        inject_noise(grid, error_probability, rng);
    }))
}

/// Run the pipeline with explicit errors in place of random noise.
pub fn simulate_with_errors(distance: usize, errors: &[Coord]) -> Result<SimulationOutcome> {
    validate_distance(distance)?;
    if let Some(&(r, c)) = errors.iter().find(|&&coord| !Grid::in_bounds(distance, coord)) {
        return Err(SurfaceCodeError::invalid(format!(
            "error coordinate ({}, {}) lies outside a distance-{} grid",
            r, c, distance
        )));
    }
    Ok(run_pipeline(distance, &TallyDecoder, |grid| {
        apply_errors(grid, errors);
    }))
}

/// Configuration for a Monte Carlo experiment.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Grid distance (1..=10).
    pub distance: usize,
    /// Per-cell flip probability.
    pub error_probability: f64,
    /// Number of independent runs.
    pub trials: usize,
    /// Seed for a reproducible `StdRng`; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            distance: 3,
            error_probability: DEFAULT_ERROR_PROBABILITY,
            trials: 100,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        validate_distance(self.distance)?;
        validate_probability(self.error_probability)?;
        if self.trials == 0 {
            return Err(SurfaceCodeError::invalid("trials must be at least 1"));
        }
        Ok(())
    }
}

/// Result of a Monte Carlo experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    pub distance: usize,
    pub error_probability: f64,
    pub trials: usize,
    /// Runs that ended on the all-zero grid.
    pub successes: usize,
    /// successes / trials.
    pub success_rate: f64,
}

fn run_trials<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<SimResult> {
    let mut successes = 0;
    for _ in 0..config.trials {
        if simulate(config.distance, config.error_probability, rng)?.success {
            successes += 1;
        }
    }
    Ok(SimResult {
        distance: config.distance,
        error_probability: config.error_probability,
        trials: config.trials,
        successes,
        success_rate: successes as f64 / config.trials as f64,
    })
}

/// Repeat [`simulate`] `config.trials` times and count successes.
pub fn run_experiment(config: &SimConfig) -> Result<SimResult> {
    config.validate()?;
    let result = match config.seed {
        Some(seed) => run_trials(config, &mut StdRng::seed_from_u64(seed))?,
        None => run_trials(config, &mut rand::thread_rng())?,
    };
    info!(
        "d={} p={:.3}: {}/{} runs recovered the zero grid",
        result.distance, result.error_probability, result.successes, result.trials
    );
    Ok(result)
}

/// Run one experiment per error rate at a fixed distance.
pub fn error_rate_sweep(
    distance: usize,
    error_rates: &[f64],
    trials: usize,
    seed: Option<u64>,
) -> Result<Vec<SimResult>> {
    error_rates
        .iter()
        .map(|&p| {
            run_experiment(&SimConfig {
                distance,
                error_probability: p,
                trials,
                seed,
            })
        })
        .collect()
}
