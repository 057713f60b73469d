use crate::handlers::{
    chart::{check_forecast_alert, get_forecast_chart},
    forecast::run_forecast,
    health::health_check,
    model_info::get_model_info,
    table::{export_forecast_csv, get_forecast_table},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Model metadata
        .route("/api/v1/model", get(get_model_info))
        // Forecast flow
        .route("/api/v1/forecast", post(run_forecast))
        .route("/api/v1/forecast/chart", get(get_forecast_chart))
        .route("/api/v1/forecast/alert", get(check_forecast_alert))
        .route("/api/v1/forecast/table", get(get_forecast_table))
        .route("/api/v1/forecast/export", get(export_forecast_csv))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
