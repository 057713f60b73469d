//! Prediction interval helpers.

/// Z-score for a central interval width (approximate).
pub(crate) fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}

/// Interval around a point estimate. The standard error is the observation
/// sigma within the training range and grows with the square root of the
/// horizon past it.
pub(crate) fn interval(estimate: f64, sigma: f64, steps_ahead: i64, z: f64) -> (f64, f64) {
    let se = if steps_ahead <= 0 {
        sigma
    } else {
        sigma * ((steps_ahead + 1) as f64).sqrt()
    };
    (estimate - z * se, estimate + z * se)
}
