use super::EffectSimulator;
use rand::{Rng, prelude::Distribution};

/// Unified interface for drawing the latent log-odds parameters
pub(crate) trait RngDraw<R: Rng + ?Sized> {
    fn sample_intercept(&self, rng: &mut R) -> f64;
    fn sample_slope(&self, rng: &mut R) -> f64;
    fn sample_std_norm(&self, rng: &mut R) -> f64;
}

impl<R: Rng + ?Sized> RngDraw<R> for EffectSimulator {
    /// Sample the intercept. A zero intercept SD is a point mass and consumes no randomness.
    #[inline(always)]
    fn sample_intercept(&self, rng: &mut R) -> f64 {
        match &self.intercept {
            Some(normal) => normal.sample(rng),
            None => self.prior.intercept_mean(),
        }
    }

    /// Sample the slope from N(0, slope_sd)
    #[inline(always)]
    fn sample_slope(&self, rng: &mut R) -> f64 {
        self.slope.sample(rng)
    }

    /// Sample from the standard normal distribution
    #[inline(always)]
    fn sample_std_norm(&self, rng: &mut R) -> f64 {
        self.std_norm.sample(rng)
    }
}
