//! Plain-text rendering of a [`ForecastRecord`].

use crate::model::{DayForecast, ForecastRecord};

const RULE: &str = "-------------------------------------------------------------------";
const UNKNOWN_TEMP: &str = "--";
/// Display columns reserved for the weather text before the temperature fields.
const WEATHER_COLUMNS: usize = 12;

const DAY_LABELS: [&str; 3] = ["今日　", "明日　", "明後日"];

/// Render the three-day report shown by the `weather` command.
pub fn create_message(record: &ForecastRecord) -> String {
    let mut lines = Vec::with_capacity(7);
    lines.push(format!("{} の天気", record.place));
    lines.push(RULE.to_string());
    for (label, day) in DAY_LABELS.iter().zip(&record.forecasts) {
        lines.push(day_line(label, day));
    }
    lines.push(RULE.to_string());
    lines.push(record.description.clone());
    lines.join("\n")
}

fn day_line(label: &str, day: &DayForecast) -> String {
    let pad = " ".repeat(WEATHER_COLUMNS.saturating_sub(display_width(&day.weather)));
    format!(
        "{label}: {weather}{pad}    最低気温:{min:>3}℃    最高気温:{max:>3}℃",
        weather = day.weather,
        min = temp(&day.temp_min),
        max = temp(&day.temp_max),
    )
}

fn temp(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN_TEMP)
}

// Weather text is mostly full-width kana and kanji; count those as two columns.
fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
