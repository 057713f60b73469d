//! Deterministic model doubles.
//!
//! The service only ever talks to [`ForecastModel`], so tests can drive the
//! whole request flow without a fitted artifact.

use chrono::NaiveDate;
use polars::prelude::*;

use common::ModelInfo;

use crate::error::{ForecastError, Result};
use crate::model::ForecastModel;

/// A fake model producing a fixed linear sequence of estimates. The first
/// `history_days` index positions count as training history and carry an
/// observed value.
#[derive(Debug, Clone)]
pub struct DeterministicModel {
    origin: NaiveDate,
    history_days: u32,
    base: f64,
    step: f64,
}

impl DeterministicModel {
    /// Every estimate equals `value`.
    pub fn flat(value: f64) -> Self {
        Self {
            origin: default_origin(),
            history_days: 100,
            base: value,
            step: 0.0,
        }
    }

    /// Estimates climb from `base` by `step` per day.
    pub fn ramp(base: f64, step: f64) -> Self {
        Self {
            origin: default_origin(),
            history_days: 100,
            base,
            step,
        }
    }

    pub fn with_history_days(mut self, days: u32) -> Self {
        self.history_days = days.max(1);
        self
    }

    pub fn history_days(&self) -> u32 {
        self.history_days
    }

    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// The estimate the fake will produce at index position `position`.
    pub fn estimate_at_position(&self, position: u32) -> f64 {
        self.base + self.step * f64::from(position)
    }

    fn last_history_date(&self) -> NaiveDate {
        self.origin + chrono::Duration::days(i64::from(self.history_days) - 1)
    }
}

fn default_origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
}

impl ForecastModel for DeterministicModel {
    fn make_future_index(&self, periods: u32) -> Result<Vec<NaiveDate>> {
        let total = self.history_days + periods;
        let mut index = Vec::with_capacity(total as usize);
        let mut date = self.origin;
        for _ in 0..total {
            index.push(date);
            date = date.succ_opt().ok_or_else(|| {
                ForecastError::Date(format!("date overflow extending past {date}"))
            })?;
        }
        Ok(index)
    }

    fn predict(&self, index: &[NaiveDate]) -> Result<DataFrame> {
        let last_observed = self.last_history_date();

        let mut ds = Vec::with_capacity(index.len());
        let mut yhat = Vec::with_capacity(index.len());
        let mut yhat_lower = Vec::with_capacity(index.len());
        let mut yhat_upper = Vec::with_capacity(index.len());
        let mut y: Vec<Option<f64>> = Vec::with_capacity(index.len());

        for date in index {
            let position = (*date - self.origin).num_days() as f64;
            let estimate = self.base + self.step * position;
            ds.push(date.format("%Y-%m-%d").to_string());
            yhat.push(estimate);
            yhat_lower.push(estimate - 1.0);
            yhat_upper.push(estimate + 1.0);
            y.push((*date <= last_observed).then_some(estimate));
        }

        let frame = DataFrame::new(vec![
            Series::new("ds".into(), ds).into(),
            Series::new("yhat".into(), yhat).into(),
            Series::new("yhat_lower".into(), yhat_lower).into(),
            Series::new("yhat_upper".into(), yhat_upper).into(),
            Series::new("y".into(), y).into(),
        ])?;
        Ok(frame)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            name: "deterministic".to_string(),
            trained_until: self.last_history_date(),
            rmse: None,
            interval_width: 0.8,
            history_points: self.history_days as usize,
        }
    }
}
