//! Effects for a new group under a random-slope prior.
//!
//! A hierarchical model with by-group slopes has, for group `j`, slope `beta + u_j` with
//! `u_j ~ N(0, tau)`, and the prior on the group-level SD is a half-normal
//! `tau ~ |N(0, group_sd)|`. Pushing one joint draw of `(alpha, beta, tau, u)` through the
//! logistic link gives the prior predictive effect for a group that was not in the data.

use crate::{
    EffectDraw, EffectSimulator, GroupPriorConfig, Result, link::sum_coded_effect,
    rng::RngDraw,
};
use rand::{Rng, prelude::Distribution};
use statrs::distribution::Normal;

/// Simulator for the effect of a sum-coded predictor in a new group.
///
/// # Example
/// ```rust
/// # use rand::SeedableRng;
/// # use rand_chacha::ChaCha8Rng;
/// use logit_prior_check::{EffectDraw, GroupEffectSimulator, GroupPriorConfig, PriorConfig};
/// let prior = GroupPriorConfig::new(PriorConfig::reference(1.0).unwrap(), 0.5).unwrap();
/// let sim = GroupEffectSimulator::new(prior).unwrap();
/// let effects = sim.draw_vec(&mut ChaCha8Rng::seed_from_u64(0), 100).unwrap();
/// assert_eq!(effects.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct GroupEffectSimulator {
    base: EffectSimulator,
    group_scale: Normal,
    prior: GroupPriorConfig,
}

impl GroupEffectSimulator {
    pub fn new(prior: GroupPriorConfig) -> Result<Self> {
        Ok(Self {
            base: EffectSimulator::new(*prior.prior())?,
            group_scale: Normal::new(0.0, prior.group_sd())?,
            prior,
        })
    }

    pub fn prior(&self) -> &GroupPriorConfig {
        &self.prior
    }
}

impl EffectDraw for GroupEffectSimulator {
    #[inline]
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let alpha = self.base.sample_intercept(rng);
        let beta = self.base.sample_slope(rng);
        let tau = self.group_scale.sample(rng).abs();
        let u = tau * self.base.sample_std_norm(rng);
        sum_coded_effect(alpha, beta + u)
    }
}
