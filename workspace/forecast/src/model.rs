//! The serialized forecasting model and the narrow interface the service
//! consumes it through.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use polars::prelude::*;

use common::ModelInfo;

use crate::confidence;
use crate::error::{ForecastError, Result};
use crate::seasonality::SeasonalComponent;
use crate::trend::Trend;

/// Narrow interface over the opaque forecasting model.
///
/// Two capabilities plus a description: extend the historical date index by a
/// number of daily periods, and predict over a given index. Implementations
/// must be read-only under prediction so one instance can be shared across
/// sessions.
pub trait ForecastModel: fmt::Debug + Send + Sync {
    /// Appends `periods` strictly consecutive daily dates after the last
    /// historical date and returns the full extended index (historical +
    /// future).
    fn make_future_index(&self, periods: u32) -> Result<Vec<NaiveDate>>;

    /// Predicts over every date of `index`, returning a DataFrame with the
    /// columns `ds`, `yhat`, `yhat_lower`, `yhat_upper` and `y` (observed
    /// value, null outside the training history).
    fn predict(&self, index: &[NaiveDate]) -> Result<DataFrame>;

    /// Metadata describing the loaded artifact.
    fn info(&self) -> ModelInfo;
}

/// One observation of the training history.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Observation {
    pub ds: NaiveDate,
    pub y: f64,
}

/// A pre-trained additive temperature model reconstructed from its serialized
/// JSON definition. Immutable after load; prediction only reads.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TemperatureModel {
    pub(crate) name: String,
    /// Last date covered by the training data
    pub(crate) trained_until: NaiveDate,
    #[serde(default)]
    pub(crate) rmse: Option<f64>,
    /// Central width of the uncertainty interval
    #[serde(default = "default_interval_width")]
    pub(crate) interval_width: f64,
    /// Standard deviation of the observation noise
    pub(crate) sigma_obs: f64,
    pub(crate) history: Vec<Observation>,
    pub(crate) trend: Trend,
    #[serde(default)]
    pub(crate) seasonalities: Vec<SeasonalComponent>,
}

fn default_interval_width() -> f64 {
    0.8
}

impl TemperatureModel {
    /// Structural invariants a usable artifact must satisfy.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.history.is_empty() {
            return Err(ForecastError::Model("training history is empty".to_string()));
        }
        if !self.history.windows(2).all(|pair| pair[0].ds < pair[1].ds) {
            return Err(ForecastError::Model(
                "training history dates must be strictly increasing".to_string(),
            ));
        }
        if self.sigma_obs < 0.0 {
            return Err(ForecastError::Model(
                "observation sigma must be non-negative".to_string(),
            ));
        }
        self.trend.validate()?;
        for component in &self.seasonalities {
            component.validate()?;
        }
        Ok(())
    }

    fn origin(&self) -> Result<NaiveDate> {
        self.history
            .first()
            .map(|observation| observation.ds)
            .ok_or_else(|| ForecastError::Model("training history is empty".to_string()))
    }

    fn last_history_date(&self) -> Result<NaiveDate> {
        self.history
            .last()
            .map(|observation| observation.ds)
            .ok_or_else(|| ForecastError::Model("training history is empty".to_string()))
    }

    /// Point estimate at `date`: piecewise-linear trend plus the sum of the
    /// seasonal components.
    fn estimate_at(&self, date: NaiveDate, origin: NaiveDate) -> f64 {
        let t = (date - origin).num_days() as f64;
        let mut value = self.trend.value_at(t, origin);
        for component in &self.seasonalities {
            value += component.value_at(t);
        }
        value
    }
}

impl ForecastModel for TemperatureModel {
    fn make_future_index(&self, periods: u32) -> Result<Vec<NaiveDate>> {
        let last = self.last_history_date()?;

        let mut index: Vec<NaiveDate> = self.history.iter().map(|o| o.ds).collect();
        index.reserve(periods as usize);

        // One calendar day per step, appended after the last historical date.
        let mut date = last;
        for _ in 0..periods {
            date = date.succ_opt().ok_or_else(|| {
                ForecastError::Date(format!("date overflow extending past {date}"))
            })?;
            index.push(date);
        }
        Ok(index)
    }

    fn predict(&self, index: &[NaiveDate]) -> Result<DataFrame> {
        let origin = self.origin()?;
        let observed: HashMap<NaiveDate, f64> =
            self.history.iter().map(|o| (o.ds, o.y)).collect();
        let z = confidence::z_score(self.interval_width);

        let mut ds = Vec::with_capacity(index.len());
        let mut yhat = Vec::with_capacity(index.len());
        let mut yhat_lower = Vec::with_capacity(index.len());
        let mut yhat_upper = Vec::with_capacity(index.len());
        let mut y: Vec<Option<f64>> = Vec::with_capacity(index.len());

        for date in index {
            let estimate = self.estimate_at(*date, origin);
            let steps_ahead = (*date - self.trained_until).num_days();
            let (lower, upper) = confidence::interval(estimate, self.sigma_obs, steps_ahead, z);

            ds.push(date.format("%Y-%m-%d").to_string());
            yhat.push(estimate);
            yhat_lower.push(lower);
            yhat_upper.push(upper);
            y.push(observed.get(date).copied());
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
            name: self.name.clone(),
            trained_until: self.trained_until,
            rmse: self.rmse,
            interval_width: self.interval_width,
            history_points: self.history.len(),
        }
    }
}
