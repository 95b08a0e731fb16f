use crate::{Config, model::WeatherSnapshot};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod http;

pub use http::HttpWeatherSource;

/// Everything that can go wrong while obtaining a snapshot.
///
/// The screen shows one failure message for all of these; the variants
/// exist for the diagnostic log line.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to reach weather endpoint: {0}")]
    Network(#[source] reqwest::Error),

    #[error("malformed weather payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather fetch task ended without a result: {0}")]
    Interrupted(String),
}

impl FetchError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Malformed(_) => "malformed",
            FetchError::Interrupted(_) => "interrupted",
        }
    }

    /// True for failures of the response body rather than the transport.
    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::Malformed(_))
    }
}

#[async_trait]
pub trait WeatherDataSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the HTTP data source pointed at the configured endpoint.
pub fn source_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherDataSource>> {
    let url = config.endpoint_url()?;
    Ok(Arc::new(HttpWeatherSource::new(url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_default_config_works() {
        let cfg = Config::default();
        let source = source_from_config(&cfg);
        assert!(source.is_ok());
    }

    #[test]
    fn source_from_config_rejects_bad_endpoint() {
        let cfg = Config { endpoint: "not a url".into(), ..Config::default() };
        let err = source_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("Invalid weather endpoint"));
    }

    #[test]
    fn malformed_errors_are_tagged() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), "malformed");
        assert!(err.is_malformed());

        let err = FetchError::Interrupted("panicked".into());
        assert_eq!(err.kind(), "interrupted");
        assert!(!err.is_malformed());
    }
}
