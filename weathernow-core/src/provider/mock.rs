use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::model::{Condition, ForecastDay, WeatherReading};

use super::{FetchError, WeatherProvider};

const COUNTRY: &str = "UK";
const SUNRISE: &str = "06:30 AM";
const SUNSET: &str = "06:45 PM";

/// Built-in stand-in for a real weather API: answers every city with
/// plausible random current conditions. Satisfies the provider contract so a
/// genuine HTTP source can replace it without touching the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

/// The outlook is deliberately constant; only the current reading varies.
fn fixed_forecast() -> Vec<ForecastDay> {
    [
        ("Mon", 18, Condition::Clear),
        ("Tue", 20, Condition::Clouds),
        ("Wed", 16, Condition::Rain),
        ("Thu", 19, Condition::Clear),
        ("Fri", 21, Condition::Clear),
    ]
    .into_iter()
    .map(|(day, temperature_c, condition)| ForecastDay {
        day: day.to_string(),
        temperature_c,
        condition,
    })
    .collect()
}

fn synthesize(city: &str) -> WeatherReading {
    let mut rng = rand::rng();
    let condition = Condition::all()[rng.random_range(0..Condition::all().len())];

    WeatherReading {
        city: city.to_string(),
        country: COUNTRY.to_string(),
        temperature_c: rng.random_range(5..=34),
        feels_like_c: rng.random_range(5..=34),
        condition,
        humidity_pct: rng.random_range(40..=79),
        wind_speed_kph: rng.random_range(5..=24),
        pressure_mb: rng.random_range(1000..=1049),
        visibility_km: rng.random_range(5..=9),
        sunrise: SUNRISE.to_string(),
        sunset: SUNSET.to_string(),
        forecast: fixed_forecast(),
        observed_at: Utc::now(),
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, FetchError> {
        Ok(synthesize(city))
    }
}
