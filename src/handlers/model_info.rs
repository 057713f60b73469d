use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;

use common::ModelInfo;

use crate::schemas::{ApiResponse, AppState};

/// Metadata of the loaded model artifact
#[utoipa::path(
    get,
    path = "/api/v1/model",
    tag = "model",
    responses(
        (status = 200, description = "Model metadata retrieved successfully", body = ApiResponse<ModelInfo>),
    )
)]
#[instrument]
pub async fn get_model_info(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ModelInfo>>, StatusCode> {
    let response = ApiResponse {
        data: state.model.info(),
        message: "Model metadata retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
