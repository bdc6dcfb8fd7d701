use crate::model::WeatherReading;

/// Where the dashboard sits in its refresh lifecycle. A tagged union rather
/// than separate loading/error flags, so the two can never both be active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Single source of truth for what the dashboard shows.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub phase: Phase,
    /// Last successful reading. Kept across a failed refresh so stale data
    /// returns to view once the error is gone.
    pub reading: Option<WeatherReading>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle_with_nothing_to_show() {
        let state = DashboardState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.reading.is_none());
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn loading_and_error_are_mutually_exclusive_by_construction() {
        let mut state = DashboardState::default();

        state.phase = Phase::Loading;
        assert!(state.is_loading());
        assert!(state.error().is_none());

        state.phase = Phase::Failed("boom".to_string());
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("boom"));
    }
}
