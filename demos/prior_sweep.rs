//! Prior predictive check for the slope and group-level priors of a sum-coded logistic model.
//!
//! This demo:
//! 1. Sweeps the reference slope SDs `{1, 1.5, 2}` under the shared `Normal(0, 1.5)` intercept
//! 2. Repeats the sweep with a by-group slope term for a few group-level scales
//! 3. Prints a summary of each cell's effect distribution and the prior mass on large effects
//!
//! Set `RUST_LOG=debug` to see each cell as it is simulated.

use logit_prior_check::sweep::{CellResult, Sweep, SweepConfig};
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Effects beyond this many probability points are treated as implausibly large.
const LARGE_EFFECT: f64 = 0.5;

fn print_table(title: &str, results: &[CellResult]) {
    println!("\n{title}");
    println!(
        "{:<28} {:<8} {:<10} {:<10} {:<26} {:<10}",
        "Cell", "Draws", "Mean", "Std. Dev.", "[2.5%, 50%, 97.5%]", "P(|e|>0.5)"
    );
    println!("{}", "-".repeat(96));
    for r in results {
        println!(
            "{:<28} {} {:.4}",
            r.cell.to_string(),
            r.summary(),
            r.distribution.tail_mass(LARGE_EFFECT)
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let slope_only = Sweep::new(SweepConfig::default());
    let results = slope_only.run()?;
    print_table("Slope priors", &results);

    let grouped = Sweep::new(SweepConfig::default().with_group_sds(vec![0.5, 1.0, 1.5]));
    #[cfg(feature = "rayon")]
    let results = grouped.run_par()?;
    #[cfg(not(feature = "rayon"))]
    let results = grouped.run()?;
    print_table("Slope and group-level priors (new group)", &results);

    Ok(())
}
