//! Common transport-layer types shared between the backend and offline consumers.
//! These structs mirror the backend handlers' response payloads so the CLI and
//! tests can deserialize API responses without duplicating shapes.

mod converters;
mod prediction;

pub use converters::{format_date_br, format_value, round2};
pub use prediction::{
    AlertCheck, ForecastRunSummary, ForecastTable, ModelInfo, PredictionPoint, PredictionSeries,
    TableRow,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in previsor/src/schemas.rs with the
/// same field names. We mirror it here for offline consumers to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
