#[cfg(test)]
mod integration_tests {
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use chrono::NaiveDate;

    use common::{AlertCheck, ForecastRunSummary, ForecastTable, ModelInfo};
    use forecast::testing::DeterministicModel;

    use crate::schemas::{ApiResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with_model};

    fn session_header(id: &'static str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static("x-session-id"),
            HeaderValue::from_static(id),
        )
    }

    async fn run_forecast(server: &TestServer, session: &'static str, days: i64) {
        let (name, value) = session_header(session);
        let response = server
            .post("/api/v1/forecast")
            .add_header(name, value)
            .json(&serde_json::json!({ "days": days }))
            .await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.model, "deterministic");
    }

    #[tokio::test]
    async fn test_model_info() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/model").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ModelInfo> = response.json();
        assert!(body.success);
        assert_eq!(body.data.name, "deterministic");
        assert_eq!(body.data.history_points, 100);
    }

    #[tokio::test]
    async fn test_forecast_returns_run_summary() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let (name, value) = session_header("summary");
        let response = server
            .post("/api/v1/forecast")
            .add_header(name, value)
            .json(&serde_json::json!({ "days": 5 }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastRunSummary> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Forecast computed successfully");
        assert_eq!(body.data.horizon, 5);
        assert_eq!(body.data.rows, 105);
    }

    #[tokio::test]
    async fn test_table_has_exactly_horizon_rows() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "table5", 5).await;

        let (name, value) = session_header("table5");
        let response = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .add_query_param("days", 5)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastTable> = response.json();
        assert_eq!(body.data.rows.len(), 5);
        assert!(body.data.description.contains("5 dias"));

        for row in &body.data.rows {
            // Dates render day-month-year and values carry at most two decimals.
            assert!(NaiveDate::parse_from_str(&row.data, "%d-%m-%Y").is_ok());
            assert_eq!(row.temp, (row.temp * 100.0).round() / 100.0);
        }
    }

    #[tokio::test]
    async fn test_table_single_day_horizon() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "table1", 1).await;

        let (name, value) = session_header("table1");
        let response = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .add_query_param("days", 1)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastTable> = response.json();
        assert_eq!(body.data.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_table_defaults_to_one_row() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "tabledefault", 4).await;

        let (name, value) = session_header("tabledefault");
        let response = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastTable> = response.json();
        assert_eq!(body.data.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_table_without_forecast_is_not_found() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let (name, value) = session_header("empty");
        let response = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chart_requires_a_forecast() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let (name, value) = session_header("chart");
        let response = server
            .get("/api/v1/forecast/chart")
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        run_forecast(&server, "chart", 3).await;

        let (name, value) = session_header("chart");
        let response = server
            .get("/api/v1/forecast/chart")
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::OK);

        let page = response.text();
        assert!(page.contains("previsao-chart"));
        assert!(page.contains("Previsão de Temperatura"));
    }

    #[tokio::test]
    async fn test_chart_and_table_rerender_identically() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "rerun", 4).await;

        let mut charts = Vec::new();
        for _ in 0..2 {
            let (name, value) = session_header("rerun");
            let page = server
                .get("/api/v1/forecast/chart")
                .add_header(name, value)
                .add_query_param("threshold", 30.0)
                .await
                .text();
            charts.push(page);
        }
        assert_eq!(charts[0], charts[1]);

        let mut tables = Vec::new();
        for _ in 0..2 {
            let (name, value) = session_header("rerun");
            let body = server
                .get("/api/v1/forecast/table")
                .add_header(name, value)
                .add_query_param("days", 4)
                .await
                .text();
            tables.push(body);
        }
        assert_eq!(tables[0], tables[1]);
    }

    #[tokio::test]
    async fn test_alert_boundary_is_strict() {
        let app = setup_test_app_with_model(DeterministicModel::flat(31.42));
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "boundary", 5).await;

        // Threshold exactly at the maximum: no warning.
        let (name, value) = session_header("boundary");
        let response = server
            .get("/api/v1/forecast/alert")
            .add_header(name, value)
            .add_query_param("threshold", 31.42)
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<AlertCheck> = response.json();
        assert!(!body.data.triggered);
        assert!(body.data.message.is_none());

        // Just below it: warning.
        let (name, value) = session_header("boundary");
        let response = server
            .get("/api/v1/forecast/alert")
            .add_header(name, value)
            .add_query_param("threshold", 31.41)
            .await;
        let body: ApiResponse<AlertCheck> = response.json();
        assert!(body.data.triggered);
    }

    #[tokio::test]
    async fn test_alert_scenario_five_days_threshold_thirty() {
        let app = setup_test_app_with_model(DeterministicModel::flat(31.42));
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "scenario", 5).await;

        let (name, value) = session_header("scenario");
        let response = server
            .get("/api/v1/forecast/alert")
            .add_header(name, value)
            .add_query_param("threshold", 30.0)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<AlertCheck> = response.json();
        assert!(body.data.triggered);
        assert_eq!(body.data.max_predicted, 31.42);
        let message = body.data.message.unwrap();
        assert!(message.contains("31.42"));
        assert!(message.contains("30.0"));

        // The chart banner reports the same numbers.
        let (name, value) = session_header("scenario");
        let page = server
            .get("/api/v1/forecast/chart")
            .add_header(name, value)
            .add_query_param("threshold", 30.0)
            .await
            .text();
        assert!(page.contains("31.42"));
        assert!(page.contains("30.0"));
    }

    #[tokio::test]
    async fn test_export_headers_and_filename() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "export", 2).await;

        let (name, value) = session_header("export");
        let response = server
            .get("/api/v1/forecast/export")
            .add_header(name, value)
            .add_query_param("days", 2)
            .await;

        response.assert_status(StatusCode::OK);

        let content_type = response.header(axum::http::header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/csv"));
        let disposition = response.header(axum::http::header::CONTENT_DISPOSITION);
        assert!(disposition.to_str().unwrap().contains("previsao_ozonio.csv"));

        let csv = response.text();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Data (Dia/Mês/Ano),TEMP"));
        assert_eq!(lines.count(), 2);
    }

    #[tokio::test]
    async fn test_export_round_trips_the_table() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "roundtrip", 4).await;

        let (name, value) = session_header("roundtrip");
        let table: ApiResponse<ForecastTable> = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .add_query_param("days", 4)
            .await
            .json();

        let (name, value) = session_header("roundtrip");
        let csv = server
            .get("/api/v1/forecast/export")
            .add_header(name, value)
            .add_query_param("days", 4)
            .await
            .text();

        let lines: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(lines.len(), table.data.rows.len());

        for (line, row) in lines.iter().zip(&table.data.rows) {
            let (date, temp) = line.split_once(',').unwrap();
            assert_eq!(date, row.data);
            assert_eq!(temp.parse::<f64>().unwrap(), row.temp);
        }
    }

    #[tokio::test]
    async fn test_trailing_rows_of_a_103_row_index() {
        let model = DeterministicModel::ramp(20.0, 0.05);
        let origin = model.origin();
        let expected: Vec<(NaiveDate, f64)> = (100..103)
            .map(|position| {
                let date = origin + chrono::Duration::days(position);
                let temp = model.estimate_at_position(position as u32);
                (date, (temp * 100.0).round() / 100.0)
            })
            .collect();

        let app = setup_test_app_with_model(model);
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "positions", 3).await;

        let (name, value) = session_header("positions");
        let body: ApiResponse<ForecastTable> = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .add_query_param("days", 3)
            .await
            .json();

        // 100 historical + 3 future rows; the table is the last 3 by position.
        assert_eq!(body.data.rows.len(), 3);
        for (row, (date, temp)) in body.data.rows.iter().zip(&expected) {
            assert_eq!(row.data, date.format("%d-%m-%Y").to_string());
            assert_eq!(row.temp, *temp);
        }
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "session-a", 3).await;

        let (name, value) = session_header("session-b");
        let response = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let (name, value) = session_header("session-b");
        let response = server
            .get("/api/v1/forecast/chart")
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_horizon_is_clamped_to_the_minimum() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let (name, value) = session_header("clamp");
        let response = server
            .post("/api/v1/forecast")
            .add_header(name, value)
            .json(&serde_json::json!({ "days": -5 }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastRunSummary> = response.json();
        assert_eq!(body.data.horizon, 1);

        let (name, value) = session_header("clamp");
        let table: ApiResponse<ForecastTable> = server
            .get("/api/v1/forecast/table")
            .add_header(name, value)
            .add_query_param("days", -5)
            .await
            .json();
        assert_eq!(table.data.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_threshold_is_clamped_to_the_minimum() {
        let app = setup_test_app_with_model(DeterministicModel::flat(10.0));
        let server = TestServer::new(app).unwrap();
        run_forecast(&server, "clamp-threshold", 1).await;

        let (name, value) = session_header("clamp-threshold");
        let body: ApiResponse<AlertCheck> = server
            .get("/api/v1/forecast/alert")
            .add_header(name, value)
            .add_query_param("threshold", -3.5)
            .await
            .json();

        assert_eq!(body.data.threshold, 0.0);
        assert!(body.data.triggered);
    }
}
