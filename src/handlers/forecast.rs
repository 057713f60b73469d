use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, instrument};

use common::ForecastRunSummary;

use crate::helpers::converters::convert_dataframe_to_prediction;
use crate::schemas::{ApiResponse, AppState, ForecastRequest};
use crate::session::SessionId;

/// Run a forecast for the requested horizon
///
/// Extends the model's historical date index by `days` daily periods and
/// predicts over the full extended index (historical + future). The result
/// replaces the session's previous prediction wholesale.
#[utoipa::path(
    post,
    path = "/api/v1/forecast",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastRunSummary>),
        (status = 500, description = "Model prediction failed", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn run_forecast(
    session: SessionId,
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<ApiResponse<ForecastRunSummary>>, StatusCode> {
    let horizon = request.horizon();

    // The flag is raised before the model runs; a failed run leaves it set
    // with the previous result untouched.
    let mut session_state = state.sessions.get_or_init(&session.0).await;
    session_state.prediction_made = true;
    state.sessions.put(&session.0, session_state.clone()).await;

    let index = match state.model.make_future_index(horizon) {
        Ok(index) => index,
        Err(e) => {
            error!("Failed to extend the model date index: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let frame = match state.model.predict(&index) {
        Ok(frame) => frame,
        Err(e) => {
            error!("Model prediction failed: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let series = match convert_dataframe_to_prediction(frame) {
        Ok(series) => series,
        Err(e) => {
            error!("Failed to convert the prediction frame: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let summary = ForecastRunSummary {
        horizon,
        rows: series.len(),
        start_date: series.start_date(),
        end_date: series.end_date(),
    };

    session_state.prediction = Some(series);
    state.sessions.put(&session.0, session_state).await;

    let response = ApiResponse {
        data: summary,
        message: "Forecast computed successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
