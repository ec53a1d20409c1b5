//! Success rate of the tally decoder across distances and flip probabilities.

use surface_code_sim::prelude::*;
use surface_code_sim::Result;

fn main() -> Result<()> {
    env_logger::init();

    let distances = [2, 3, 5, 7, 10];
    let rates: Vec<f64> = (0..=10).map(|i| i as f64 * 0.05).collect();
    let trials = 1000;

    print!("  p_err  ");
    for &d in &distances {
        print!(" d={:<4}", d);
    }
    println!();

    let mut table = Vec::new();
    for &d in &distances {
        table.push(error_rate_sweep(d, &rates, trials, Some(2024))?);
    }

    for (i, &p) in rates.iter().enumerate() {
        print!("  {:.3}  ", p);
        for results in &table {
            print!(" {:.3} ", results[i].success_rate);
        }
        println!();
    }

    Ok(())
}
