//! Walk through the surface code pipeline stage by stage.
//!
//! First the fixed distance-3 example with errors at (1,1), (2,0), (2,1),
//! then a random run at the default flip probability.
//!
//! Run with `RUST_LOG=debug` to see per-stage logging.

use surface_code_sim::prelude::*;
use surface_code_sim::Result;

fn main() -> Result<()> {
    env_logger::init();

    println!("═══ Worked example (distance 3) ═══");
    println!();
    let outcome = simulate_with_errors(3, &[(1, 1), (2, 0), (2, 1)])?;
    print!("{}", outcome);

    let tally = ErrorTally::from_syndromes(&outcome.syndromes, &outcome.stabilizers);
    println!("Error-candidate tally:");
    for (coord, count) in tally.iter() {
        println!("  {:?} → {}", coord, count);
    }
    for i in 0..outcome.syndromes.len() {
        println!(
            "  stabilizer {} at {:?}: raw {:?}, true parity {}",
            i,
            outcome.stabilizers[i].origin,
            outcome.syndromes.row(i),
            outcome.syndromes.parity(i)
        );
    }

    println!();
    println!("═══ Random noise (distance 5, p = {}) ═══", DEFAULT_ERROR_PROBABILITY);
    println!();
    let mut rng = rand::thread_rng();
    let outcome = simulate_default(5, &mut rng)?;
    print!("{}", outcome);

    println!();
    match simulate(MAX_DISTANCE + 1, DEFAULT_ERROR_PROBABILITY, &mut rng) {
        Ok(_) => println!("distance {} unexpectedly accepted", MAX_DISTANCE + 1),
        Err(e) => println!("distance {}: {}", MAX_DISTANCE + 1, e),
    }

    Ok(())
}
