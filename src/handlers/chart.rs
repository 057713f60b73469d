use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use tracing::instrument;

use common::AlertCheck;

use crate::helpers::chart::{check_threshold, render_chart_page};
use crate::schemas::{ApiResponse, AppState, ThresholdQuery};
use crate::session::SessionId;

/// Interactive forecast chart
///
/// Available once a forecast was requested in this session. Renders the
/// observed points, the predicted line and the uncertainty band, with the
/// threshold warning banner when the alert fires.
#[utoipa::path(
    get,
    path = "/api/v1/forecast/chart",
    tag = "forecast",
    params(
        ("threshold" = Option<f64>, Query, description = "Alert threshold temperature in °C (minimum 0.0, default 30.0)"),
    ),
    responses(
        (status = 200, description = "Chart page rendered", body = String, content_type = "text/html"),
        (status = 404, description = "No forecast requested in this session yet", body = crate::schemas::ErrorResponse),
        (status = 500, description = "A previous forecast run failed and left no result", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast_chart(
    session: SessionId,
    Query(query): Query<ThresholdQuery>,
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    let session_state = state.sessions.get_or_init(&session.0).await;
    if !session_state.prediction_made {
        return Err(StatusCode::NOT_FOUND);
    }

    // Flag raised but no stored result means the run itself failed earlier.
    let series = match session_state.prediction {
        Some(series) => series,
        None => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let alert = check_threshold(&series, query.threshold());
    Ok(Html(render_chart_page(&series, &alert)))
}

/// Threshold alert check over the stored forecast
///
/// Compares the maximum predicted value of the entire stored result
/// (historical and future rows alike) against the threshold, strictly.
#[utoipa::path(
    get,
    path = "/api/v1/forecast/alert",
    tag = "forecast",
    params(
        ("threshold" = Option<f64>, Query, description = "Alert threshold temperature in °C (minimum 0.0, default 30.0)"),
    ),
    responses(
        (status = 200, description = "Alert check evaluated", body = ApiResponse<AlertCheck>),
        (status = 404, description = "No forecast requested in this session yet", body = crate::schemas::ErrorResponse),
    )
)]
#[instrument(skip(state))]
pub async fn check_forecast_alert(
    session: SessionId,
    Query(query): Query<ThresholdQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AlertCheck>>, StatusCode> {
    let session_state = state.sessions.get_or_init(&session.0).await;
    if !session_state.prediction_made {
        return Err(StatusCode::NOT_FOUND);
    }

    let series = match session_state.prediction {
        Some(series) => series,
        None => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let check = check_threshold(&series, query.threshold());
    let message = if check.triggered {
        "Temperature alert triggered"
    } else {
        "Temperature within the configured limit"
    };

    let response = ApiResponse {
        data: check,
        message: message.to_string(),
        success: true,
    };

    Ok(Json(response))
}
