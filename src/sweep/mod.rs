//! Prior grid sweeps.
//!
//! A sweep expands a [`SweepConfig`] into a [`PriorGrid`] and runs one effect simulation per
//! cell, returning each distribution labelled by the [`GridCell`] that generated it.
//!
//! Every cell runs on its own `ChaCha8Rng` seeded with `seed + cell_index`, so a cell's output
//! does not depend on which other cells are in the grid or on the order they run in.
//!
//! # Example
//! ```rust
//! use logit_prior_check::sweep::{Sweep, SweepConfig};
//! let sweep = Sweep::new(SweepConfig::default().with_draws(1_000));
//! let results = sweep.run().unwrap();
//! assert_eq!(results.len(), 3);
//! for r in &results {
//!     println!("{}: {}", r.cell, r.distribution.summary());
//! }
//! ```

pub use config::{DEFAULT_DRAWS, DEFAULT_SEED, DEFAULT_SLOPE_SDS, FailurePolicy, SweepConfig};
pub use grid::{GridCell, PriorGrid};

use crate::{
    EffectDistribution, EffectDraw, EffectSimulator, EffectSummary, Error, GroupEffectSimulator,
    GroupPriorConfig, PriorConfig, Result, prior::check_intercept,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

mod config;
mod grid;

/// The effect distribution simulated for one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellResult {
    pub cell: GridCell,
    pub distribution: EffectDistribution,
}

impl CellResult {
    pub fn summary(&self) -> EffectSummary {
        self.distribution.summary()
    }
}

/// Runs one simulation per cell of a prior grid.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
    grid: PriorGrid,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> Self {
        let grid = PriorGrid::from_config(&config);
        Self { config, grid }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn grid(&self) -> &PriorGrid {
        &self.grid
    }

    /// Simulate every cell on the current thread.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the draw count is zero, there are no slope SDs or the shared
    /// intercept prior is invalid, whatever the policy. Under [`FailurePolicy::Abort`], the first
    /// failing cell's error.
    pub fn run(&self) -> Result<Vec<CellResult>> {
        self.check()?;
        let outcomes = self
            .grid
            .cells()
            .iter()
            .enumerate()
            .map(|(i, cell)| (*cell, self.run_cell(i, cell)));
        self.collect(outcomes)
    }

    /// Simulate the cells in parallel. The output is identical to [`Sweep::run`].
    ///
    /// # Errors
    /// As [`Sweep::run`].
    #[cfg(feature = "rayon")]
    pub fn run_par(&self) -> Result<Vec<CellResult>> {
        self.check()?;
        let outcomes: Vec<(GridCell, Result<EffectDistribution>)> = self
            .grid
            .cells()
            .par_iter()
            .enumerate()
            .map(|(i, cell)| (*cell, self.run_cell(i, cell)))
            .collect();
        self.collect(outcomes)
    }

    fn check(&self) -> Result<()> {
        if self.config.draws == 0 {
            return Err(Error::invalid("number of draws must be positive"));
        }
        if self.grid.is_empty() {
            return Err(Error::invalid("sweep needs at least one slope SD"));
        }
        // Shared by every cell, so a bad intercept fails the sweep regardless of policy.
        check_intercept(self.config.intercept_mean, self.config.intercept_sd)
    }

    fn run_cell(&self, index: usize, cell: &GridCell) -> Result<EffectDistribution> {
        let c = &self.config;
        let prior = PriorConfig::new(c.intercept_mean, c.intercept_sd, cell.slope_sd)?;
        let mut rng = ChaCha8Rng::seed_from_u64(c.seed.wrapping_add(index as u64));
        debug!(%cell, draws = c.draws, "simulating grid cell");
        match cell.group_sd {
            None => EffectSimulator::new(prior)?.draw_vec(&mut rng, c.draws),
            Some(group_sd) => {
                let prior = GroupPriorConfig::new(prior, group_sd)?;
                GroupEffectSimulator::new(prior)?.draw_vec(&mut rng, c.draws)
            }
        }
    }

    fn collect<I>(&self, outcomes: I) -> Result<Vec<CellResult>>
    where
        I: IntoIterator<Item = (GridCell, Result<EffectDistribution>)>,
    {
        let mut results = Vec::with_capacity(self.grid.len());
        for (cell, outcome) in outcomes {
            match outcome {
                Ok(distribution) => results.push(CellResult { cell, distribution }),
                Err(err) => match self.config.policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Skip => warn!(%cell, error = %err, "skipping grid cell"),
                },
            }
        }
        info!(
            cells = results.len(),
            skipped = self.grid.len() - results.len(),
            "prior sweep finished"
        );
        Ok(results)
    }
}
