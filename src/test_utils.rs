#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use forecast::testing::DeterministicModel;
    use forecast::ForecastModel;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::router::create_router;
    use crate::schemas::AppState;
    use crate::session::SessionStore;

    /// Create AppState over an arbitrary model double
    pub fn setup_test_app_state(model: impl ForecastModel + 'static) -> AppState {
        AppState {
            model: Arc::new(model),
            sessions: SessionStore::new(100, Duration::from_secs(300)),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing over the default ramp model
    pub fn setup_test_app() -> Router {
        setup_test_app_with_model(DeterministicModel::ramp(20.0, 0.05))
    }

    /// Create axum app for testing over a specific model double
    pub fn setup_test_app_with_model(model: impl ForecastModel + 'static) -> Router {
        let _ = init_test_tracing();
        let state = setup_test_app_state(model);
        create_router(state)
    }
}
