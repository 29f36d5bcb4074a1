//! Logistic link and the sum-coded effect transform.

/// Half the distance between the two levels of a sum-coded predictor.
pub const SUM_CODE: f64 = 0.5;

/// Largest `f64` below one. Effects are kept within `[-ONE_BELOW, ONE_BELOW]`.
pub const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// Inverse logit, `1 / (1 + exp(-x))`.
///
/// The exponential is only ever evaluated at a non-positive argument, so the result is finite
/// for every finite `x` and saturates to 0 or 1 instead of overflowing.
///
/// # Example
/// ```rust
/// use logit_prior_check::link::sigmoid;
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(-800.0) >= 0.0);
/// ```
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Difference in success probability between the `+0.5` and `-0.5` levels of a sum-coded
/// predictor, for intercept `alpha` and slope `beta` on the log-odds scale.
///
/// Antisymmetric in `beta`: `sum_coded_effect(a, -b) == -sum_coded_effect(a, b)`.
///
/// Once both link evaluations saturate the f64 difference rounds to exactly `±1`; the result
/// is clamped to the nearest value strictly inside `(-1, 1)`.
#[inline]
pub fn sum_coded_effect(alpha: f64, beta: f64) -> f64 {
    let half = beta * SUM_CODE;
    (sigmoid(alpha + half) - sigmoid(alpha - half)).clamp(-ONE_BELOW, ONE_BELOW)
}
