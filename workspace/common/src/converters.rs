//! Formatting helpers shared by the table, export, and alert surfaces.

use chrono::NaiveDate;

/// Formats a date as day-month-year, the format shown in the table and the
/// CSV export.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Rounds a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a value the way the UI shows it: the shortest decimal form that
/// round-trips, keeping a trailing `.0` on whole numbers (`30.0`, `31.42`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 5).unwrap();
        assert_eq!(format_date_br(date), "05-05-2023");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(31.4249), 31.42);
        assert_eq!(round2(31.425), 31.43);
        assert_eq!(round2(30.0), 30.0);
    }

    #[test]
    fn keeps_trailing_zero_on_whole_values() {
        assert_eq!(format_value(30.0), "30.0");
        assert_eq!(format_value(31.42), "31.42");
        assert_eq!(format_value(25.5), "25.5");
    }
}
