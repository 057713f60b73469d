//! Piecewise-linear trend evaluation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{ForecastError, Result};

/// Fitted trend parameters: a base growth rate and offset, adjusted by a rate
/// delta at each changepoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Trend {
    /// Base growth rate per day
    pub k: f64,
    /// Base offset
    pub m: f64,
    /// Dates at which the growth rate changes
    #[serde(default)]
    pub changepoints: Vec<NaiveDate>,
    /// Rate adjustment applied from each changepoint onwards
    #[serde(default)]
    pub deltas: Vec<f64>,
}

impl Trend {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.changepoints.len() != self.deltas.len() {
            return Err(ForecastError::Model(format!(
                "trend has {} changepoints but {} rate deltas",
                self.changepoints.len(),
                self.deltas.len()
            )));
        }
        Ok(())
    }

    /// Evaluates the trend at `t` days from `origin`. The offset adjustment
    /// keeps the line continuous across each changepoint.
    pub(crate) fn value_at(&self, t: f64, origin: NaiveDate) -> f64 {
        let mut rate = self.k;
        let mut offset = self.m;
        for (changepoint, delta) in self.changepoints.iter().zip(&self.deltas) {
            let s = (*changepoint - origin).num_days() as f64;
            if t >= s {
                rate += delta;
                offset -= s * delta;
            }
        }
        rate * t + offset
    }
}
