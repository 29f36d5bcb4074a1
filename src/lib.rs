//! # Prior Predictive Checks for Sum-Coded Logistic Effects
//!
//! This crate simulates the effect sizes implied by Normal priors on the intercept and slope of a
//! Bernoulli-logistic model with a sum-coded (`+0.5` / `-0.5`) binary predictor, before any data
//! is observed.
//!
//! ## Features
//!
//! - **Effect simulation:**
//!   - [`EffectSimulator`] draws `alpha ~ N(mu, sd_a)` and `beta ~ N(0, sd_b)` and returns
//!     `sigmoid(alpha + beta/2) - sigmoid(alpha - beta/2)` for each draw.
//!   - [`GroupEffectSimulator`] adds a by-group slope deviation under a half-normal prior on its
//!     scale, mirroring the random-slope terms of a hierarchical model.
//!
//! - **Grid sweeps:**
//!   - [`sweep::Sweep`] runs one simulation per cell of the cross product of candidate slope and
//!     group-level SDs and labels each distribution by the cell that generated it.
//!   - Cells can be run in parallel under the `rayon` feature flag (on by default).
//!
//! ## Reproducibility
//!
//! Every simulator takes the random source explicitly. Seeding the generator pins the output;
//! the parallel deterministic variants derive one generator per chunk from a single draw of the
//! caller's generator.
//!
//! ## Usage Example
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! use logit_prior_check::{PriorConfig, simulate_effects};
//! let prior = PriorConfig::reference(1.5).unwrap();
//! let effects = simulate_effects(&mut StdRng::seed_from_u64(0), 10_000, &prior).unwrap();
//! assert_eq!(effects.len(), 10_000);
//! ```
//!
//! For grid sweeps over candidate priors, see the [`sweep`] module.
//! The `demos` directory in the repository also contains a runnable sweep.
//! ## License
//! This crate is dual-licensed under the MIT OR Apache-2.0 licenses.
//! See [LICENSE-MIT](LICENSE-MIT) and [LICENSE-APACHE](LICENSE-APACHE) for details.

use link::sum_coded_effect;
use rand::Rng;
use rng::RngDraw;
use statrs::distribution::Normal;

#[cfg(feature = "rayon")]
use rand::{SeedableRng, thread_rng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub use distribution::{EffectDistribution, EffectSummary};
pub use error::{Error, Result};
pub use group::GroupEffectSimulator;
pub use prior::{
    GroupPriorConfig, PriorConfig, REFERENCE_INTERCEPT_MEAN, REFERENCE_INTERCEPT_SD,
};

/// Draws per independently seeded chunk in the deterministic parallel path.
const PAR_CHUNK: usize = 256;

/// Common interface of the effect simulators.
///
/// Implementors only fill a buffer; allocation, validation of the draw count and the
/// chunk-seeded parallel scheme are shared.
pub trait EffectDraw: Sync {
    /// Draw a single simulated effect.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Fill `out` with simulated effects.
    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.draw(rng);
        }
    }

    /// Draw `n` simulated effects.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is zero.
    fn draw_vec<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<EffectDistribution> {
        check_draws(n)?;
        let mut effects = vec![0.0; n];
        self.fill(rng, &mut effects);
        Ok(EffectDistribution::from_vec(effects))
    }

    /// Draw `n` simulated effects in parallel.
    ///
    /// One seed is drawn from `rng`; chunk `i` then runs on its own generator seeded with
    /// `seed + i`. The output is a pure function of the state of `rng`, independent of the
    /// number of threads, but it is a different stream from [`EffectDraw::draw_vec`].
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is zero.
    #[cfg(feature = "rayon")]
    fn draw_vec_par_deterministic<R: SeedableRng + Rng>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<EffectDistribution> {
        check_draws(n)?;
        let seed = rng.next_u64();
        let mut effects = vec![0.0; n];
        effects
            .par_chunks_mut(PAR_CHUNK)
            .enumerate()
            .for_each(|(i, chunk)| {
                let mut rng = R::seed_from_u64(seed.wrapping_add(i as u64));
                self.fill(&mut rng, chunk);
            });
        Ok(EffectDistribution::from_vec(effects))
    }

    /// Draw `n` simulated effects in parallel from thread-local generators. Not reproducible.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `n` is zero.
    #[cfg(feature = "rayon")]
    fn draw_vec_par(&self, n: usize) -> Result<EffectDistribution> {
        check_draws(n)?;
        let mut effects = vec![0.0; n];
        effects
            .par_iter_mut()
            .for_each_init(thread_rng, |rng, slot| *slot = self.draw(rng));
        Ok(EffectDistribution::from_vec(effects))
    }
}

/// Simulator for the effect of a sum-coded predictor under Normal intercept and slope priors.
///
/// # Example
/// ```rust
/// # use rand::SeedableRng;
/// # use rand_chacha::ChaCha8Rng;
/// use logit_prior_check::{EffectDraw, EffectSimulator, PriorConfig};
/// let sim = EffectSimulator::new(PriorConfig::reference(2.0).unwrap()).unwrap();
/// let effects = sim.draw_vec(&mut ChaCha8Rng::seed_from_u64(7), 1_000).unwrap();
/// assert!(effects.iter().all(|e| e.abs() < 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct EffectSimulator {
    prior: PriorConfig,
    /// `None` when the intercept SD is zero.
    intercept: Option<Normal>,
    slope: Normal,
    std_norm: Normal,
}

impl EffectSimulator {
    /// Create a simulator for the given prior.
    ///
    /// # Errors
    /// Propagates statrs failures building the Normal distributions; a validated
    /// [`PriorConfig`] never triggers them.
    pub fn new(prior: PriorConfig) -> Result<Self> {
        let intercept = if prior.intercept_sd() > 0.0 {
            Some(Normal::new(prior.intercept_mean(), prior.intercept_sd())?)
        } else {
            None
        };
        Ok(Self {
            prior,
            intercept,
            slope: Normal::new(0.0, prior.slope_sd())?,
            std_norm: Normal::standard(),
        })
    }

    pub fn prior(&self) -> &PriorConfig {
        &self.prior
    }
}

impl EffectDraw for EffectSimulator {
    /// Draw one intercept and one slope and return the induced effect.
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let alpha = self.sample_intercept(rng);
        let beta = self.sample_slope(rng);
        sum_coded_effect(alpha, beta)
    }

    /// Draws all intercepts first, then all slopes, pairing them by index.
    ///
    /// The buffer holds the intercepts until each is replaced by its effect, so nothing beyond
    /// `out` is allocated.
    fn fill<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.sample_intercept(rng);
        }
        for slot in out.iter_mut() {
            let beta = self.sample_slope(rng);
            *slot = sum_coded_effect(*slot, beta);
        }
    }
}

/// Simulate `n` effects of a sum-coded predictor under `prior`.
///
/// Shorthand for building an [`EffectSimulator`] and calling [`EffectDraw::draw_vec`].
///
/// # Errors
/// [`Error::InvalidArgument`] if `n` is zero.
pub fn simulate_effects<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    prior: &PriorConfig,
) -> Result<EffectDistribution> {
    EffectSimulator::new(*prior)?.draw_vec(rng, n)
}

/// Simulate `n` effects for a new group under a prior with a group-level slope deviation.
///
/// # Errors
/// [`Error::InvalidArgument`] if `n` is zero.
pub fn simulate_group_effects<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    prior: &GroupPriorConfig,
) -> Result<EffectDistribution> {
    GroupEffectSimulator::new(*prior)?.draw_vec(rng, n)
}

fn check_draws(n: usize) -> Result<()> {
    if n == 0 {
        Err(Error::invalid("number of draws must be positive"))
    } else {
        Ok(())
    }
}

mod distribution;
mod error;
mod group;
pub mod link;
mod prior;
pub(crate) mod rng;
pub mod sweep;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_chacha::ChaCha8Rng;

    fn prior(sd_a: f64, sd_b: f64) -> PriorConfig {
        PriorConfig::new(0.0, sd_a, sd_b).unwrap()
    }

    /// Sample variance of one run
    fn variance(effects: &EffectDistribution) -> f64 {
        let n = effects.len() as f64;
        let mean = effects.iter().sum::<f64>() / n;
        effects.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / (n - 1.0)
    }

    #[test]
    fn returns_n_effects_inside_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        for &sd_b in &[0.1, 1.0, 1.5, 2.0, 5.0] {
            let effects = simulate_effects(&mut rng, 10_000, &prior(1.5, sd_b)).unwrap();
            assert_eq!(effects.len(), 10_000);
            assert!(effects.iter().all(|e| *e > -1.0 && *e < 1.0));
        }
    }

    #[test]
    fn wide_slope_prior_stays_strictly_inside_unit_interval() {
        for &sd_b in &[20.0, 100.0, 1_000.0] {
            let p = prior(1.5, sd_b);
            let effects = simulate_effects(&mut ChaCha8Rng::seed_from_u64(1), 10_000, &p).unwrap();
            let outside = effects.iter().filter(|e| e.abs() >= 1.0).count();
            assert_eq!(outside, 0, "slope_sd={sd_b}: {outside} effects with |e| >= 1");
        }
    }

    #[test]
    fn zero_draws_is_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = simulate_effects(&mut rng, 0, &prior(1.5, 1.0)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn identical_seeds_reproduce_output() {
        let p = prior(1.5, 1.0);
        let a = simulate_effects(&mut ChaCha8Rng::seed_from_u64(11), 500, &p).unwrap();
        let b = simulate_effects(&mut ChaCha8Rng::seed_from_u64(11), 500, &p).unwrap();
        let c = simulate_effects(&mut ChaCha8Rng::seed_from_u64(12), 500, &p).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn fixed_intercept_tiny_slope_is_near_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let effects = simulate_effects(&mut rng, 5, &prior(0.0, 1e-4)).unwrap();
        assert_eq!(effects.len(), 5);
        for e in &effects {
            assert!(e.abs() < 1e-3, "effect {e} not near zero");
        }
    }

    #[test]
    fn effects_shrink_with_slope_sd() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let wide = simulate_effects(&mut rng, 2_000, &prior(1.5, 1.0)).unwrap();
        let narrow = simulate_effects(&mut rng, 2_000, &prior(1.5, 1e-6)).unwrap();
        let max_narrow = narrow.iter().fold(0.0f64, |m, e| m.max(e.abs()));
        assert!(max_narrow < 1e-5, "max |effect| = {max_narrow}");
        assert!(variance(&wide) > 1e3 * variance(&narrow));
    }

    #[test]
    fn variance_increases_with_slope_sd_across_seeds() {
        let sds = [0.5, 1.0, 1.5, 2.0];
        let seeds = 0..8u64;
        let mean_var: Vec<f64> = sds
            .iter()
            .map(|&sd_b| {
                let p = prior(1.5, sd_b);
                seeds
                    .clone()
                    .map(|s| {
                        let effects =
                            simulate_effects(&mut StdRng::seed_from_u64(s), 4_000, &p).unwrap();
                        variance(&effects)
                    })
                    .sum::<f64>()
                    / 8.0
            })
            .collect();
        for w in mean_var.windows(2) {
            assert!(w[0] < w[1], "variances not increasing: {mean_var:?}");
        }
    }

    #[test]
    fn draw_vec_draws_intercepts_before_slopes() {
        use rand::distributions::Distribution;
        use statrs::distribution::Normal;

        let p = prior(1.5, 2.0);
        let effects = simulate_effects(&mut ChaCha8Rng::seed_from_u64(21), 4, &p).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let a = Normal::new(0.0, 1.5).unwrap();
        let b = Normal::new(0.0, 2.0).unwrap();
        let alphas: Vec<f64> = (0..4).map(|_| a.sample(&mut rng)).collect();
        let betas: Vec<f64> = (0..4).map(|_| b.sample(&mut rng)).collect();
        for i in 0..4 {
            assert_eq!(effects.as_slice()[i], sum_coded_effect(alphas[i], betas[i]));
        }
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn par_deterministic_is_reproducible() {
        let sim = EffectSimulator::new(prior(1.5, 1.5)).unwrap();
        let a = sim
            .draw_vec_par_deterministic(&mut ChaCha8Rng::seed_from_u64(1), 5_000)
            .unwrap();
        let b = sim
            .draw_vec_par_deterministic(&mut ChaCha8Rng::seed_from_u64(1), 5_000)
            .unwrap();
        assert_eq!(a.len(), 5_000);
        assert_eq!(a, b);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn par_draws_stay_in_range() {
        let sim = EffectSimulator::new(prior(1.5, 2.0)).unwrap();
        let effects = sim.draw_vec_par(10_000).unwrap();
        assert_eq!(effects.len(), 10_000);
        assert!(effects.iter().all(|e| e.abs() < 1.0));
        assert!(sim.draw_vec_par(0).unwrap_err().is_invalid_argument());
    }
}
