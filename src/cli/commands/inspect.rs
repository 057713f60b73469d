use anyhow::{Context, Result};
use tracing::info;

use forecast::ForecastModel;

/// Loads the model and logs what the artifact contains.
pub fn inspect_model(model_path: &str) -> Result<()> {
    let model = forecast::load_model(model_path)
        .with_context(|| format!("Cannot load forecast model from {model_path}"))?;

    let info = model.info();
    info!("Model: {}", info.name);
    info!("Trained until: {}", info.trained_until);
    if let Some(rmse) = info.rmse {
        info!("Test RMSE: {}", rmse);
    }
    info!("Interval width: {}", info.interval_width);
    info!("Historical observations: {}", info.history_points);
    Ok(())
}
