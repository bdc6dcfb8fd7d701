use anyhow::Result;

use crate::{
    model::WeatherReading,
    provider::WeatherProvider,
    state::{DashboardState, Phase},
    store::{RecentSearches, Storage},
};

/// The one user-visible message for a failed refresh.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// The dashboard controller: owns the provider, the storage handle, the
/// recent-search history, and the visible state. Refreshing takes `&mut
/// self`, so a second refresh cannot start while one is in flight.
pub struct Dashboard {
    provider: Box<dyn WeatherProvider>,
    storage: Box<dyn Storage>,
    recent: RecentSearches,
    state: DashboardState,
}

impl Dashboard {
    /// The recent list is read from storage once, here; afterwards the
    /// in-memory copy is authoritative and written back on each change.
    pub fn new(provider: Box<dyn WeatherProvider>, storage: Box<dyn Storage>) -> Self {
        let recent = RecentSearches::load(storage.as_ref());

        Self {
            provider,
            storage,
            recent,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.state.reading.as_ref()
    }

    pub fn recent(&self) -> &[String] {
        self.recent.cities()
    }

    /// Search entry point for free-text input: trims, and treats empty or
    /// whitespace-only input as a no-op. Returns whether a refresh ran.
    pub async fn submit(&mut self, input: &str) -> Result<bool> {
        let city = input.trim();
        if city.is_empty() {
            return Ok(false);
        }

        self.refresh(city).await?;
        Ok(true)
    }

    /// Refresh the dashboard for a known-valid city name. Recent chips call
    /// this directly, skipping the trim path.
    ///
    /// On fetch failure the previous reading is kept and the fixed error
    /// message shown; the city is not recorded. Loading ends on both arms.
    pub async fn refresh(&mut self, city: &str) -> Result<()> {
        log::debug!("refreshing weather for {city}");
        self.state.phase = Phase::Loading;

        match self.provider.fetch_weather(city).await {
            Ok(reading) => {
                self.state.reading = Some(reading);
                self.state.phase = Phase::Ready;

                self.recent.record(city);
                self.recent.save(self.storage.as_ref())?;
            }
            Err(error) => {
                log::error!("weather refresh for {city} failed: {error}");
                self.state.phase = Phase::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        provider::{FetchError, mock::MockProvider},
        store::MemoryStorage,
    };
    use async_trait::async_trait;

    fn mock_dashboard() -> Dashboard {
        Dashboard::new(Box::new(MockProvider::new()), Box::new(MemoryStorage::new()))
    }

    /// Answers like the mock, except one city is permanently down.
    #[derive(Debug)]
    struct OutageProvider {
        healthy: MockProvider,
        down_city: String,
    }

    #[async_trait]
    impl WeatherProvider for OutageProvider {
        async fn fetch_weather(&self, city: &str) -> Result<WeatherReading, FetchError> {
            if city == self.down_city {
                return Err(FetchError {
                    city: city.to_string(),
                    reason: "simulated outage".to_string(),
                });
            }
            self.healthy.fetch_weather(city).await
        }
    }

    #[tokio::test]
    async fn submit_trims_before_fetching() {
        let mut dash = mock_dashboard();

        let ran = dash.submit("  Berlin \n").await.unwrap();
        assert!(ran);
        assert_eq!(dash.reading().unwrap().city, "Berlin");
        assert_eq!(dash.recent(), ["Berlin"]);
    }

    #[tokio::test]
    async fn empty_and_whitespace_input_is_a_no_op() {
        let mut dash = mock_dashboard();
        dash.submit("Oslo").await.unwrap();

        for input in ["", "   ", "\t\n"] {
            let ran = dash.submit(input).await.unwrap();
            assert!(!ran);
        }

        assert_eq!(dash.reading().unwrap().city, "Oslo");
        assert_eq!(dash.recent(), ["Oslo"]);
        assert_eq!(dash.state().phase, Phase::Ready);
    }

    #[tokio::test]
    async fn history_is_capped_and_most_recent_first() {
        let mut dash = mock_dashboard();
        for city in ["a", "b", "c", "d", "e", "f"] {
            dash.submit(city).await.unwrap();
        }

        assert_eq!(dash.recent(), ["f", "e", "d", "c", "b"]);
    }

    #[tokio::test]
    async fn repeat_search_moves_city_to_front_without_growth() {
        let mut dash = mock_dashboard();
        dash.submit("London").await.unwrap();
        dash.submit("Paris").await.unwrap();
        dash.submit("London").await.unwrap();

        assert_eq!(dash.recent(), ["London", "Paris"]);
    }

    #[tokio::test]
    async fn history_written_to_storage_survives_restart() {
        let storage = MemoryStorage::new();

        {
            let mut recent = RecentSearches::default();
            recent.record("Madrid");
            recent.save(&storage).unwrap();
        }

        let dash = Dashboard::new(Box::new(MockProvider::new()), Box::new(storage));
        assert_eq!(dash.recent(), ["Madrid"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_stale_reading_and_skips_history() {
        let provider = OutageProvider {
            healthy: MockProvider::new(),
            down_city: "Atlantis".to_string(),
        };
        let mut dash = Dashboard::new(Box::new(provider), Box::new(MemoryStorage::new()));

        dash.submit("Lisbon").await.unwrap();
        dash.submit("Atlantis").await.unwrap();

        assert_eq!(dash.state().error(), Some(FETCH_FAILED_MESSAGE));
        assert!(!dash.state().is_loading());
        assert_eq!(dash.reading().unwrap().city, "Lisbon");
        assert_eq!(dash.recent(), ["Lisbon"]);
    }

    #[tokio::test]
    async fn successful_refresh_clears_a_prior_error() {
        let provider = OutageProvider {
            healthy: MockProvider::new(),
            down_city: "Atlantis".to_string(),
        };
        let mut dash = Dashboard::new(Box::new(provider), Box::new(MemoryStorage::new()));

        dash.submit("Atlantis").await.unwrap();
        assert!(dash.state().error().is_some());

        dash.submit("Rome").await.unwrap();
        assert!(dash.state().error().is_none());
        assert_eq!(dash.reading().unwrap().city, "Rome");
    }

    #[tokio::test]
    async fn startup_search_end_to_end() {
        let mut dash = mock_dashboard();
        dash.refresh("London").await.unwrap();

        assert_eq!(dash.reading().unwrap().city, "London");
        assert_eq!(dash.recent(), ["London"]);
        assert!(!dash.state().is_loading());
        assert!(dash.state().error().is_none());
    }
}
