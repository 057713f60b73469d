use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use common::{AlertCheck, ForecastRunSummary, ForecastTable, ModelInfo, TableRow};
use forecast::ForecastModel;

use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The forecasting model, loaded once at startup and never mutated
    pub model: Arc<dyn ForecastModel>,
    /// Per-user session state
    pub sessions: SessionStore,
}

/// Body of a forecast request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ForecastRequest {
    /// Forecast horizon in days (minimum 1, default 1)
    pub days: Option<i64>,
}

impl ForecastRequest {
    /// Horizon with the input-boundary clamping applied: out-of-range values
    /// are pulled up to the minimum, never rejected.
    pub fn horizon(&self) -> u32 {
        clamp_horizon(self.days)
    }
}

/// Query parameters for the table and export endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct HorizonQuery {
    /// Number of trailing days to show (minimum 1, default 1)
    pub days: Option<i64>,
}

impl HorizonQuery {
    pub fn horizon(&self) -> u32 {
        clamp_horizon(self.days)
    }
}

/// Query parameters for the chart and alert endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ThresholdQuery {
    /// Alert threshold temperature in °C (minimum 0.0, default 30.0)
    pub threshold: Option<f64>,
}

impl ThresholdQuery {
    /// Threshold with the input-boundary clamping applied.
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(30.0).max(0.0)
    }
}

fn clamp_horizon(days: Option<i64>) -> u32 {
    days.unwrap_or(1).clamp(1, i64::from(u32::MAX)) as u32
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Name of the loaded forecast model
    pub model: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::model_info::get_model_info,
        crate::handlers::forecast::run_forecast,
        crate::handlers::chart::get_forecast_chart,
        crate::handlers::chart::check_forecast_alert,
        crate::handlers::table::get_forecast_table,
        crate::handlers::table::export_forecast_csv,
    ),
    components(
        schemas(
            ApiResponse<ForecastRunSummary>,
            ApiResponse<ForecastTable>,
            ApiResponse<AlertCheck>,
            ApiResponse<ModelInfo>,
            ErrorResponse,
            HealthResponse,
            ForecastRequest,
            HorizonQuery,
            ThresholdQuery,
            ForecastRunSummary,
            ForecastTable,
            TableRow,
            AlertCheck,
            ModelInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "model", description = "Model metadata endpoints"),
        (name = "forecast", description = "Forecast invocation and rendering endpoints"),
    ),
    info(
        title = "Previsor API",
        description = "Temperature forecasting service over a pre-trained additive model",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
