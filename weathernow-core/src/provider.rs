use crate::{Config, model::WeatherReading, provider::mock::MockProvider};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod mock;

/// Registered weather data sources. Only the built-in mock exists today; a
/// real HTTP provider would be added as a second variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Mock,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Mock]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "mock" => Ok(ProviderId::Mock),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: mock."
            )),
        }
    }
}

/// The one failure a weather source can report.
#[derive(Debug, Clone, thiserror::Error)]
#[error("weather lookup for '{city}' failed: {reason}")]
pub struct FetchError {
    pub city: String,
    pub reason: String,
}

/// A source of weather readings keyed by free-text city name.
///
/// `city` is expected to be trimmed and non-empty; the controller enforces
/// that before calling in.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, FetchError>;
}

/// Construct the provider selected by config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.provider_id()?;

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Mock => Box::new(MockProvider::new()),
    };

    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn provider_from_config_defaults_to_mock() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }

    #[test]
    fn provider_from_config_rejects_unknown_id() {
        let cfg = Config {
            provider: Some("openweather".to_string()),
            ..Config::default()
        };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }
}
