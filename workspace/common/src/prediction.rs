use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a model prediction: a date, the point estimate, and the
/// uncertainty bounds. `y` carries the observed value on historical rows and
/// is absent on future rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionPoint {
    /// Date of the row
    pub ds: NaiveDate,
    /// Point estimate
    pub yhat: f64,
    /// Lower uncertainty bound
    pub yhat_lower: f64,
    /// Upper uncertainty bound
    pub yhat_upper: f64,
    /// Observed value, present only within the training history
    pub y: Option<f64>,
}

/// A full prediction over an extended date index (historical + future rows),
/// in index order. Replaced wholesale on every new forecast run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionSeries {
    pub points: Vec<PredictionPoint>,
}

impl PredictionSeries {
    pub fn new(points: Vec<PredictionPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The trailing `n` rows by position. The future rows are always the last
    /// rows of the index because extension only ever appends.
    pub fn tail(&self, n: usize) -> &[PredictionPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Maximum point estimate across the whole series, historical and future
    /// rows alike.
    pub fn max_estimate(&self) -> Option<f64> {
        self.points.iter().map(|point| point.yhat).reduce(f64::max)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|point| point.ds)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|point| point.ds)
    }
}

/// One formatted row of the forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableRow {
    /// Date formatted day-month-year
    pub data: String,
    /// Predicted temperature rounded to two decimals
    pub temp: f64,
}

/// The trailing-horizon forecast table shown to the user and exported as CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastTable {
    /// Number of trailing days covered
    pub days: u32,
    /// Caption shown above the table
    pub description: String,
    /// Formatted rows, oldest first
    pub rows: Vec<TableRow>,
}

/// Summary of a completed forecast run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastRunSummary {
    /// Requested horizon in days
    pub horizon: u32,
    /// Total rows in the stored result (historical + future)
    pub rows: usize,
    /// First date of the extended index
    pub start_date: Option<NaiveDate>,
    /// Last date of the extended index
    pub end_date: Option<NaiveDate>,
}

/// Result of checking the stored forecast against the alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertCheck {
    /// Whether the maximum predicted value strictly exceeds the threshold
    pub triggered: bool,
    /// Maximum predicted value, rounded to two decimals
    pub max_predicted: f64,
    /// Configured threshold
    pub threshold: f64,
    /// Warning text, present only when triggered
    pub message: Option<String>,
}

/// Metadata describing the loaded model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    /// Model name from the serialized definition
    pub name: String,
    /// Last date covered by the training data
    pub trained_until: NaiveDate,
    /// Prediction error (RMSE) measured on test data, when recorded
    pub rmse: Option<f64>,
    /// Central width of the uncertainty interval (e.g. 0.8 for 80%)
    pub interval_width: f64,
    /// Number of historical observations in the artifact
    pub history_points: usize,
}
