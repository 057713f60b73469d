use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use tracing::instrument;

use common::ForecastTable;

use crate::helpers::converters::{build_forecast_table, render_csv, EXPORT_FILENAME};
use crate::schemas::{ApiResponse, AppState, HorizonQuery};
use crate::session::SessionId;

/// Forecast table for the trailing horizon
///
/// Available whenever a stored prediction exists, independent of the chart
/// gating. Rows are the trailing `days` positions of the stored result; the
/// future rows are always the last rows because extension only appends.
#[utoipa::path(
    get,
    path = "/api/v1/forecast/table",
    tag = "forecast",
    params(
        ("days" = Option<i64>, Query, description = "Number of trailing days to show (minimum 1, default 1)"),
    ),
    responses(
        (status = 200, description = "Forecast table retrieved successfully", body = ApiResponse<ForecastTable>),
        (status = 404, description = "No stored prediction in this session", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast_table(
    session: SessionId,
    Query(query): Query<HorizonQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ForecastTable>>, StatusCode> {
    let session_state = state.sessions.get_or_init(&session.0).await;
    let series = match session_state.prediction {
        Some(series) => series,
        None => return Err(StatusCode::NOT_FOUND),
    };

    let table = build_forecast_table(&series, query.horizon());

    let response = ApiResponse {
        data: table,
        message: "Forecast table retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// CSV export of the forecast table
///
/// Same rows and formatting as the table, served as a downloadable
/// comma-separated attachment under a fixed filename.
#[utoipa::path(
    get,
    path = "/api/v1/forecast/export",
    tag = "forecast",
    params(
        ("days" = Option<i64>, Query, description = "Number of trailing days to export (minimum 1, default 1)"),
    ),
    responses(
        (status = 200, description = "CSV export", body = String, content_type = "text/csv"),
        (status = 404, description = "No stored prediction in this session", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn export_forecast_csv(
    session: SessionId,
    Query(query): Query<HorizonQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let session_state = state.sessions.get_or_init(&session.0).await;
    let series = match session_state.prediction {
        Some(series) => series,
        None => return Err(StatusCode::NOT_FOUND),
    };

    let table = build_forecast_table(&series, query.horizon());
    let csv = render_csv(&table);

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, csv))
}
