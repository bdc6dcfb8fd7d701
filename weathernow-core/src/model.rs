use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categorical weather state. Drives icon and color-theme selection in the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Snow,
        ]
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Condition {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "clear" => Ok(Condition::Clear),
            "clouds" => Ok(Condition::Clouds),
            "rain" => Ok(Condition::Rain),
            "snow" => Ok(Condition::Snow),
            _ => Err(anyhow::anyhow!(
                "Unknown condition '{value}'. Supported conditions: clear, clouds, rain, snow."
            )),
        }
    }
}

/// A complete current-conditions reading for one city, including the five-day
/// outlook. Replaced wholesale on each refresh, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_speed_kph: u32,
    pub pressure_mb: u32,
    pub visibility_km: u32,
    pub sunrise: String,
    pub sunset: String,
    pub forecast: Vec<ForecastDay>,
    pub observed_at: DateTime<Utc>,
}

/// One entry of the five-day outlook, owned by its parent reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temperature_c: i32,
    pub condition: Condition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_as_str_roundtrip() {
        for condition in Condition::all() {
            let s = condition.as_str();
            let parsed = Condition::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*condition, parsed);
        }
    }

    #[test]
    fn condition_parse_is_case_insensitive() {
        assert_eq!(Condition::try_from("RAIN").unwrap(), Condition::Rain);
        assert_eq!(Condition::try_from("clear").unwrap(), Condition::Clear);
    }

    #[test]
    fn unknown_condition_error() {
        let err = Condition::try_from("drizzle").unwrap_err();
        assert!(err.to_string().contains("Unknown condition"));
    }
}
