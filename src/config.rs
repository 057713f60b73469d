use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::schemas::AppState;
use crate::session::SessionStore;

/// Initialize application configuration and state
pub fn initialize_app_state(model_path: &str) -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Load the forecast model exactly once; the application cannot function
    // without it
    tracing::info!("Loading forecast model from: {}", model_path);
    let model = forecast::load_model(model_path)
        .with_context(|| format!("Cannot load forecast model from {model_path}"))?;

    // Initialize the per-user session store; idle sessions expire with the
    // session itself
    let sessions = SessionStore::new(1000, Duration::from_secs(30 * 60));

    Ok(AppState {
        model: Arc::new(model),
        sessions,
    })
}
