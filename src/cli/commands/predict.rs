use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use forecast::ForecastModel;

use crate::helpers::converters::{
    build_forecast_table, convert_dataframe_to_prediction, render_csv,
};

/// Runs the full extend/predict/slice/format pipeline once, without a server,
/// and emits the same CSV the export endpoint serves.
pub fn predict_offline(model_path: &str, days: i64, output: Option<&str>) -> Result<()> {
    let horizon = days.clamp(1, i64::from(u32::MAX)) as u32;

    let model = forecast::load_model(model_path)
        .with_context(|| format!("Cannot load forecast model from {model_path}"))?;

    let index = model.make_future_index(horizon)?;
    let frame = model.predict(&index)?;
    let series = convert_dataframe_to_prediction(frame).map_err(anyhow::Error::msg)?;

    let table = build_forecast_table(&series, horizon);
    let csv = render_csv(&table);

    match output {
        Some(path) => {
            fs::write(path, &csv).with_context(|| format!("Cannot write {path}"))?;
            info!("Forecast for {} day(s) written to {}", horizon, path);
        }
        None => print!("{csv}"),
    }
    Ok(())
}
