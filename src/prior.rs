//! Validated prior configurations for the intercept, slope and group-level scale.

use crate::error::{Error, Result};

/// Mean of the intercept prior shared by every grid cell of the reference workflow.
pub const REFERENCE_INTERCEPT_MEAN: f64 = 0.0;
/// SD of the reference intercept prior, giving `Normal(0, 1.5)`.
pub const REFERENCE_INTERCEPT_SD: f64 = 1.5;

/// Normal priors on the intercept and on the slope of a sum-coded predictor.
///
/// The slope prior is always centred on zero. An `intercept_sd` of exactly zero pins the
/// intercept at `intercept_mean`; the slope SD must be strictly positive.
///
/// # Example
/// ```rust
/// use logit_prior_check::PriorConfig;
/// let prior = PriorConfig::new(0.0, 1.5, 2.0).unwrap();
/// assert_eq!(prior.slope_sd(), 2.0);
/// assert!(PriorConfig::new(0.0, 1.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorConfig {
    intercept_mean: f64,
    intercept_sd: f64,
    slope_sd: f64,
}

impl PriorConfig {
    /// Build a prior configuration.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `intercept_mean` is not finite, `intercept_sd` is negative or
    /// not finite, or `slope_sd` is not strictly positive and finite.
    pub fn new(intercept_mean: f64, intercept_sd: f64, slope_sd: f64) -> Result<Self> {
        check_intercept(intercept_mean, intercept_sd)?;
        check_scale("slope SD", slope_sd)?;
        Ok(Self {
            intercept_mean,
            intercept_sd,
            slope_sd,
        })
    }

    /// The reference intercept prior `Normal(0, 1.5)` with the given slope SD.
    pub fn reference(slope_sd: f64) -> Result<Self> {
        Self::new(REFERENCE_INTERCEPT_MEAN, REFERENCE_INTERCEPT_SD, slope_sd)
    }

    pub fn intercept_mean(&self) -> f64 {
        self.intercept_mean
    }

    pub fn intercept_sd(&self) -> f64 {
        self.intercept_sd
    }

    pub fn slope_sd(&self) -> f64 {
        self.slope_sd
    }
}

/// A [`PriorConfig`] extended with a half-normal prior on the by-group slope SD.
///
/// `group_sd` is the scale of that half-normal, i.e. the value a model formula would carry as
/// `sd ~ normal(0, group_sd)` truncated at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPriorConfig {
    prior: PriorConfig,
    group_sd: f64,
}

impl GroupPriorConfig {
    /// # Errors
    /// [`Error::InvalidArgument`] if `group_sd` is not strictly positive and finite.
    pub fn new(prior: PriorConfig, group_sd: f64) -> Result<Self> {
        check_scale("group-level SD", group_sd)?;
        Ok(Self { prior, group_sd })
    }

    pub fn prior(&self) -> &PriorConfig {
        &self.prior
    }

    pub fn group_sd(&self) -> f64 {
        self.group_sd
    }
}

/// Validate an intercept prior: finite mean, finite non-negative SD.
pub(crate) fn check_intercept(mean: f64, sd: f64) -> Result<()> {
    if !mean.is_finite() {
        return Err(Error::invalid(format!(
            "intercept mean must be finite, got {mean}"
        )));
    }
    if !(sd.is_finite() && sd >= 0.0) {
        return Err(Error::invalid(format!(
            "intercept SD must be finite and non-negative, got {sd}"
        )));
    }
    Ok(())
}

pub(crate) fn check_scale(name: &str, sd: f64) -> Result<()> {
    if sd.is_finite() && sd > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{name} must be finite and strictly positive, got {sd}"
        )))
    }
}
