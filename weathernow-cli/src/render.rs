//! Pure mapping from dashboard state to terminal output. Deterministic given
//! the state, so every panel is testable as a plain string.

use crossterm::style::{Color, Stylize};
use weathernow_core::{Condition, DashboardState, Phase, WeatherReading};

/// Accent used before any reading exists.
pub const DEFAULT_ACCENT: Color = Color::Blue;

/// Icon glyph for a condition.
pub fn condition_icon(condition: Condition) -> &'static str {
    match condition {
        Condition::Clear => "\u{2600}",  // ☀
        Condition::Clouds => "\u{2601}", // ☁
        Condition::Rain => "\u{1F327}",  // 🌧
        Condition::Snow => "\u{2744}",   // ❄
    }
}

/// Color theme keyed off the condition.
pub fn condition_accent(condition: Condition) -> Color {
    match condition {
        Condition::Clear => Color::Yellow,
        Condition::Clouds => Color::Grey,
        Condition::Rain => Color::Blue,
        Condition::Snow => Color::Cyan,
    }
}

/// One of three mutually exclusive panels: loading, error banner, or the
/// weather panels. An active error replaces the data display entirely.
pub fn render(state: &DashboardState) -> String {
    match &state.phase {
        Phase::Loading => loading_panel(),
        Phase::Failed(message) => error_banner(message),
        Phase::Idle | Phase::Ready => match &state.reading {
            Some(reading) => weather_panels(reading),
            None => empty_panel(),
        },
    }
}

pub fn title_banner() -> String {
    format!(
        "{}\n{}\n",
        "WeatherNow".bold(),
        "Real-time weather information at your fingertips".with(Color::DarkGrey),
    )
}

pub fn loading_panel() -> String {
    format!("{}\n", "Fetching weather...".with(DEFAULT_ACCENT))
}

pub fn error_banner(message: &str) -> String {
    format!("{} {}\n", "\u{2716}".with(Color::Red), message.with(Color::Red))
}

fn empty_panel() -> String {
    format!("{}\n", "Search for a city to get started.".with(Color::DarkGrey))
}

/// The loaded display: current conditions, four metric tiles, sun times, and
/// the five-day forecast grid.
pub fn weather_panels(reading: &WeatherReading) -> String {
    let accent = condition_accent(reading.condition);
    let icon = condition_icon(reading.condition);

    let mut out = String::new();

    out.push_str(&format!(
        "{icon}  {}, {}\n",
        reading.city.as_str().bold(),
        reading.country,
    ));
    out.push_str(&format!(
        "{}°C  feels like {}°C  {}\n",
        reading.temperature_c,
        reading.feels_like_c,
        reading.condition.as_str().with(accent),
    ));
    out.push_str(&format!(
        "observed {}\n\n",
        reading.observed_at.format("%H:%M UTC"),
    ));

    out.push_str(&format!(
        "Wind {} km/h   Humidity {}%   Visibility {} km   Pressure {} mb\n",
        reading.wind_speed_kph, reading.humidity_pct, reading.visibility_km, reading.pressure_mb,
    ));
    out.push_str(&format!(
        "Sunrise {}   Sunset {}\n\n",
        reading.sunrise, reading.sunset,
    ));

    out.push_str("5-Day Forecast\n");
    for day in &reading.forecast {
        out.push_str(&format!(
            "  {:<4} {}  {:>2}°C  {}\n",
            day.day,
            condition_icon(day.condition),
            day.temperature_c,
            day.condition,
        ));
    }

    out
}

/// Chip row for the recent-search history; nothing when the list is empty.
pub fn recent_chips(cities: &[String]) -> Option<String> {
    if cities.is_empty() {
        return None;
    }
    Some(format!("Recent: {}", cities.join("  ")))
}
