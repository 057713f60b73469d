//! Seasonal component evaluation.

use serde::Deserialize;

use crate::error::{ForecastError, Result};

/// One fitted Fourier coefficient pair.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FourierTerm {
    pub a: f64,
    pub b: f64,
}

/// A fitted periodic component (e.g. yearly or weekly).
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonalComponent {
    pub name: String,
    /// Period in days (365.25 for yearly, 7 for weekly)
    pub period_days: f64,
    /// Coefficient pairs, one per Fourier order
    pub terms: Vec<FourierTerm>,
}

impl SeasonalComponent {
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.period_days > 0.0) {
            return Err(ForecastError::Model(format!(
                "seasonal component '{}' has a non-positive period",
                self.name
            )));
        }
        if self.terms.is_empty() {
            return Err(ForecastError::Model(format!(
                "seasonal component '{}' has no Fourier terms",
                self.name
            )));
        }
        Ok(())
    }

    /// Evaluates the component at `t` days from the series origin.
    pub(crate) fn value_at(&self, t: f64) -> f64 {
        self.terms
            .iter()
            .enumerate()
            .map(|(i, term)| {
                let angle = 2.0 * std::f64::consts::PI * (i as f64 + 1.0) * t / self.period_days;
                term.a * angle.cos() + term.b * angle.sin()
            })
            .sum()
    }
}
