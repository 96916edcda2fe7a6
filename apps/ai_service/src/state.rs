use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Service start time as RFC 3339 (`2024-01-01T00:00:00Z`), reported as `timestamp`.
    pub started_at: Arc<str>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_start_time(config, Utc::now())
    }

    pub fn with_start_time(config: Config, started_at: DateTime<Utc>) -> Self {
        AppState {
            config: Arc::new(config),
            started_at: started_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_start_time_renders_as_utc_seconds() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let state = AppState::with_start_time(Config::default(), at);
        assert_eq!(&*state.started_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(Config::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
        assert_eq!(state.started_at, clone.started_at);
    }
}
