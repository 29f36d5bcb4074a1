//! The empirical effect distribution produced by one simulation run, and its summary.

use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::fmt;

/// Lower and upper quantiles reported by [`EffectSummary`].
pub const LOWER_QUANTILE: f64 = 0.025;
pub const UPPER_QUANTILE: f64 = 0.975;

/// Simulated effects in probability space, one per Monte Carlo draw.
///
/// Produced wholesale by a simulator and never mutated afterwards. Every element lies strictly
/// inside `(-1, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectDistribution(Vec<f64>);

impl EffectDistribution {
    pub(crate) fn from_vec(effects: Vec<f64>) -> Self {
        Self(effects)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Fraction of draws whose absolute effect exceeds `threshold`.
    ///
    /// Useful for asking how much prior mass sits on implausibly large effects, e.g.
    /// `tail_mass(0.5)` for a swing of more than fifty percentage points.
    pub fn tail_mass(&self, threshold: f64) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let hits = self.0.iter().filter(|e| e.abs() > threshold).count();
        hits as f64 / self.0.len() as f64
    }

    /// Mean, sample SD and central 95% interval of the effects.
    ///
    /// The SD is the unbiased estimator, so it is `NaN` for a single draw.
    pub fn summary(&self) -> EffectSummary {
        let mut data = Data::new(self.0.clone());
        EffectSummary {
            draws: self.0.len(),
            mean: self.0.iter().mean(),
            sd: self.0.iter().std_dev(),
            lower: data.quantile(LOWER_QUANTILE),
            median: data.quantile(0.5),
            upper: data.quantile(UPPER_QUANTILE),
        }
    }
}

impl<'a> IntoIterator for &'a EffectDistribution {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[f64]> for EffectDistribution {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Point summary of an [`EffectDistribution`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSummary {
    pub draws: usize,
    pub mean: f64,
    pub sd: f64,
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
}

impl fmt::Display for EffectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<10.4} {:<10.4} [{:.4}, {:.4}, {:.4}]",
            self.draws, self.mean, self.sd, self.lower, self.median, self.upper
        )
    }
}
