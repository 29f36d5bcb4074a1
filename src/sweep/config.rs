use crate::prior::{REFERENCE_INTERCEPT_MEAN, REFERENCE_INTERCEPT_SD};

/// Draws per grid cell in the reference workflow.
pub const DEFAULT_DRAWS: usize = 10_000;

/// Slope SDs compared in the reference workflow.
pub const DEFAULT_SLOPE_SDS: [f64; 3] = [1.0, 1.5, 2.0];

pub const DEFAULT_SEED: u64 = 42;

/// What a sweep does when a grid cell cannot be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Return the first cell error and discard every result.
    #[default]
    Abort,
    /// Log the cell error and leave the cell out of the results.
    Skip,
}

/// Settings of a prior grid sweep.
///
/// The intercept prior is shared by every cell; only the slope SD and the group-level SD vary.
/// [`SweepConfig::default`] reproduces the reference workflow: 10,000 draws per cell, intercept
/// `Normal(0, 1.5)`, slope SDs `{1, 1.5, 2}` and no group-level term.
///
/// # Example
/// ```rust
/// use logit_prior_check::sweep::{FailurePolicy, SweepConfig};
/// let config = SweepConfig::default()
///     .with_slope_sds(vec![0.5, 1.0])
///     .with_group_sds(vec![0.25, 0.5, 1.0])
///     .with_draws(2_000)
///     .with_policy(FailurePolicy::Skip);
/// assert_eq!(config.draws, 2_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Monte Carlo draws per cell.
    pub draws: usize,
    pub intercept_mean: f64,
    pub intercept_sd: f64,
    /// Candidate SDs of the slope prior.
    pub slope_sds: Vec<f64>,
    /// Candidate scales of the half-normal prior on the by-group slope SD. Empty for a model
    /// without group-level slopes.
    pub group_sds: Vec<f64>,
    /// Base seed; cell `i` runs on a generator seeded with `seed + i`.
    pub seed: u64,
    pub policy: FailurePolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            draws: DEFAULT_DRAWS,
            intercept_mean: REFERENCE_INTERCEPT_MEAN,
            intercept_sd: REFERENCE_INTERCEPT_SD,
            slope_sds: DEFAULT_SLOPE_SDS.to_vec(),
            group_sds: Vec::new(),
            seed: DEFAULT_SEED,
            policy: FailurePolicy::default(),
        }
    }
}

impl SweepConfig {
    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    pub fn with_intercept(mut self, mean: f64, sd: f64) -> Self {
        self.intercept_mean = mean;
        self.intercept_sd = sd;
        self
    }

    pub fn with_slope_sds(mut self, slope_sds: Vec<f64>) -> Self {
        self.slope_sds = slope_sds;
        self
    }

    pub fn with_group_sds(mut self, group_sds: Vec<f64>) -> Self {
        self.group_sds = group_sds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}
