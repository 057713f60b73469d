use plotly::common::{Fill, Font, Line, Marker, Mode, Title};
use plotly::layout::{Axis, Legend};
use plotly::{Layout, Plot, Scatter};

use common::{format_value, round2, AlertCheck, PredictionSeries};

const BACKGROUND: &str = "rgba(240, 240, 240, 1)";
const TEXT_COLOR: &str = "#333";
const BAND_COLOR: &str = "rgba(0, 114, 178, 0.2)";
const LINE_COLOR: &str = "#0072B2";
const OBSERVED_COLOR: &str = "black";

/// Checks the stored forecast against the alert threshold.
///
/// The maximum is taken over the entire result set, historical and future
/// rows alike, and the comparison is strict: a maximum exactly at the
/// threshold does not trigger.
pub fn check_threshold(series: &PredictionSeries, threshold: f64) -> AlertCheck {
    let max = series.max_estimate().unwrap_or(f64::NEG_INFINITY);
    let max_predicted = round2(max);

    if max > threshold {
        AlertCheck {
            triggered: true,
            max_predicted,
            threshold,
            message: Some(format!(
                "🔴 Alerta: A temperatura prevista máxima ({} °C) excede o limite de alerta definido ({} °C)!",
                format_value(max_predicted),
                format_value(threshold)
            )),
        }
    } else {
        AlertCheck {
            triggered: false,
            max_predicted,
            threshold,
            message: None,
        }
    }
}

/// Builds the interactive forecast figure: observed markers, the predicted
/// line and the uncertainty band, restyled with the fixed layout of the
/// original chart.
pub fn build_forecast_figure(series: &PredictionSeries) -> Plot {
    let dates: Vec<String> = series.points.iter().map(|p| p.ds.to_string()).collect();
    let estimates: Vec<f64> = series.points.iter().map(|p| p.yhat).collect();
    let lower: Vec<f64> = series.points.iter().map(|p| p.yhat_lower).collect();
    let upper: Vec<f64> = series.points.iter().map(|p| p.yhat_upper).collect();

    let (observed_dates, observed): (Vec<String>, Vec<f64>) = series
        .points
        .iter()
        .filter_map(|p| p.y.map(|y| (p.ds.to_string(), y)))
        .unzip();

    let mut plot = Plot::new();

    // Uncertainty band: the upper trace fills down to the lower one.
    let lower_trace = Scatter::new(dates.clone(), lower)
        .mode(Mode::Lines)
        .line(Line::new().color(BAND_COLOR).width(0.0))
        .name("Incerteza")
        .show_legend(false);
    let upper_trace = Scatter::new(dates.clone(), upper)
        .mode(Mode::Lines)
        .line(Line::new().color(BAND_COLOR).width(0.0))
        .fill(Fill::ToNextY)
        .fill_color(BAND_COLOR)
        .name("Incerteza");
    plot.add_trace(lower_trace);
    plot.add_trace(upper_trace);

    plot.add_trace(
        Scatter::new(observed_dates, observed)
            .mode(Mode::Markers)
            .name("Observado")
            .marker(Marker::new().color(OBSERVED_COLOR).size(4)),
    );

    plot.add_trace(
        Scatter::new(dates, estimates)
            .mode(Mode::Lines)
            .name("Previsão")
            .line(Line::new().color(LINE_COLOR).width(2.0)),
    );

    let layout = Layout::new()
        .title(Title::with_text("Previsão de Temperatura").font(Font::new().color(TEXT_COLOR)))
        .plot_background_color(BACKGROUND)
        .paper_background_color(BACKGROUND)
        .x_axis(
            Axis::new()
                .title(Title::with_text("Data").font(Font::new().color(TEXT_COLOR)))
                .tick_font(Font::new().color(TEXT_COLOR)),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text("Temperatura (°C)").font(Font::new().color(TEXT_COLOR)))
                .tick_font(Font::new().color(TEXT_COLOR)),
        )
        .legend(Legend::new().font(Font::new().color(TEXT_COLOR)))
        .height(450);

    plot.set_layout(layout);
    plot
}

/// Renders the complete chart page, with the warning banner when the alert
/// fired.
pub fn render_chart_page(series: &PredictionSeries, alert: &AlertCheck) -> String {
    let figure = build_forecast_figure(series).to_inline_html(Some("previsao-chart"));

    let banner = match &alert.message {
        Some(message) => format!(
            "<div style=\"background-color: #fff3cd; color: #664d03; \
             padding: 12px 16px; border-radius: 4px; margin-bottom: 12px;\">{message}</div>"
        ),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Previsão de Temperatura</title>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.27.0.min.js\"></script>\n\
         </head>\n\
         <body style=\"background-color: {BACKGROUND}; font-family: sans-serif; margin: 24px;\">\n\
         {banner}\n\
         {figure}\n\
         </body>\n\
         </html>\n"
    )
}
