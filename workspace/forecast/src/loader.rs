//! Reads a persisted model definition and reconstructs the in-memory model.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::{ForecastModel, TemperatureModel};

/// Loads a serialized model from `path`.
///
/// Fails with an I/O error when the file is missing and with a
/// deserialization or model error when its contents are malformed. Callers
/// treat either as fatal at startup: the application cannot function without
/// a model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TemperatureModel> {
    let raw = fs::read_to_string(path.as_ref())?;
    let model = parse_model(&raw)?;

    let summary = model.info();
    info!(
        name = %summary.name,
        trained_until = %summary.trained_until,
        observations = summary.history_points,
        "Forecast model loaded"
    );
    Ok(model)
}

/// Parses a model from its serialized JSON text and checks its structural
/// invariants.
pub fn parse_model(raw: &str) -> Result<TemperatureModel> {
    let model: TemperatureModel = serde_json::from_str(raw)?;
    model.validate()?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_model("definitely/not/here/modelo.json");
        assert!(matches!(result, Err(ForecastError::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = parse_model("{ this is not json");
        assert!(matches!(result, Err(ForecastError::Deserialization(_))));
    }

    #[test]
    fn structurally_invalid_model_is_rejected() {
        // One changepoint, no matching delta.
        let raw = r#"{
            "name": "broken",
            "trained_until": "2023-01-02",
            "sigma_obs": 1.0,
            "history": [
                {"ds": "2023-01-01", "y": 1.0},
                {"ds": "2023-01-02", "y": 2.0}
            ],
            "trend": {"k": 0.0, "m": 0.0, "changepoints": ["2023-01-02"], "deltas": []}
        }"#;
        assert!(matches!(parse_model(raw), Err(ForecastError::Model(_))));
    }

    #[test]
    fn empty_history_is_rejected() {
        let raw = r#"{
            "name": "empty",
            "trained_until": "2023-01-02",
            "sigma_obs": 1.0,
            "history": [],
            "trend": {"k": 0.0, "m": 0.0}
        }"#;
        assert!(matches!(parse_model(raw), Err(ForecastError::Model(_))));
    }
}
