use chrono::NaiveDate;
use polars::prelude::{AnyValue, Column, DataFrame};

use common::{format_date_br, format_value, round2, ForecastTable, PredictionPoint, PredictionSeries, TableRow};

/// Fixed filename of the CSV download.
pub const EXPORT_FILENAME: &str = "previsao_ozonio.csv";

/// Fixed column headers of the table and the CSV export.
pub const EXPORT_HEADERS: [&str; 2] = ["Data (Dia/Mês/Ano)", "TEMP"];

/// Helper function to convert a prediction DataFrame to a PredictionSeries
pub fn convert_dataframe_to_prediction(df: DataFrame) -> Result<PredictionSeries, String> {
    // Extract columns from DataFrame
    let ds_col = df.column("ds").map_err(|e| format!("Missing ds column: {}", e))?;
    let yhat_col = df
        .column("yhat")
        .map_err(|e| format!("Missing yhat column: {}", e))?;
    let lower_col = df
        .column("yhat_lower")
        .map_err(|e| format!("Missing yhat_lower column: {}", e))?;
    let upper_col = df
        .column("yhat_upper")
        .map_err(|e| format!("Missing yhat_upper column: {}", e))?;
    let observed_col = df.column("y").map_err(|e| format!("Missing y column: {}", e))?;

    let mut points = Vec::with_capacity(df.height());

    // Iterate through rows and rebuild the prediction points
    for i in 0..df.height() {
        let ds_str = match ds_col
            .get(i)
            .map_err(|e| format!("Error getting ds at row {}: {}", i, e))?
        {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => format!("{}", other),
        };
        let ds = NaiveDate::parse_from_str(&ds_str, "%Y-%m-%d")
            .map_err(|e| format!("Invalid date '{}' at row {}: {}", ds_str, i, e))?;

        let yhat = extract_f64(yhat_col, i, "yhat")?;
        let yhat_lower = extract_f64(lower_col, i, "yhat_lower")?;
        let yhat_upper = extract_f64(upper_col, i, "yhat_upper")?;

        let y = match observed_col
            .get(i)
            .map_err(|e| format!("Error getting y at row {}: {}", i, e))?
        {
            AnyValue::Null => None,
            value => Some(
                value
                    .try_extract::<f64>()
                    .map_err(|e| format!("Error extracting y as f64 at row {}: {}", i, e))?,
            ),
        };

        points.push(PredictionPoint {
            ds,
            yhat,
            yhat_lower,
            yhat_upper,
            y,
        });
    }

    Ok(PredictionSeries::new(points))
}

fn extract_f64(column: &Column, i: usize, name: &str) -> Result<f64, String> {
    column
        .get(i)
        .map_err(|e| format!("Error getting {} at row {}: {}", name, i, e))?
        .try_extract::<f64>()
        .map_err(|e| format!("Error extracting {} as f64 at row {}: {}", name, i, e))
}

/// Builds the trailing-horizon forecast table: the last `days` rows by
/// position, dates reformatted day-month-year, values rounded to two
/// decimals.
pub fn build_forecast_table(series: &PredictionSeries, days: u32) -> ForecastTable {
    let rows = series
        .tail(days as usize)
        .iter()
        .map(|point| TableRow {
            data: format_date_br(point.ds),
            temp: round2(point.yhat),
        })
        .collect();

    ForecastTable {
        days,
        description: format!(
            "Tabela contendo as previsões de Temperatura (TEMP) para os próximos {} dias:",
            days
        ),
        rows,
    }
}

/// Renders the table as the downloadable comma-separated export.
pub fn render_csv(table: &ForecastTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("{},{}\n", EXPORT_HEADERS[0], EXPORT_HEADERS[1]));
    for row in &table.rows {
        out.push_str(&format!("{},{}\n", row.data, format_value(row.temp)));
    }
    out
}
