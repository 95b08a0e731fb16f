use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::model::{WeatherPayload, WeatherSnapshot};

use super::{FetchError, WeatherDataSource};

/// Plain GET against a fixed URL: no query, headers or credentials.
///
/// No timeout is configured; an endpoint that never answers keeps the
/// fetch pending. The body is parsed whatever the status code, so a
/// complete payload is accepted even from a non-2xx response.
#[derive(Debug, Clone)]
pub struct HttpWeatherSource {
    url: Url,
    http: Client,
}

impl HttpWeatherSource {
    pub fn new(url: Url) -> Self {
        Self { url, http: Client::new() }
    }
}

#[async_trait]
impl WeatherDataSource for HttpWeatherSource {
    async fn fetch(&self) -> Result<WeatherSnapshot, FetchError> {
        debug!(url = %self.url, "requesting weather");

        let res = self.http.get(self.url.clone()).send().await.map_err(FetchError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::Network)?;

        let payload: WeatherPayload = serde_json::from_str(&body).map_err(|err| {
            debug!(%status, body = %truncate_body(&body), "unparseable weather body");
            FetchError::Malformed(err)
        })?;

        if !status.is_success() {
            warn!(%status, "weather payload accepted from non-success response");
        }
        debug!(city = %payload.location.city, "weather payload parsed");

        Ok(WeatherSnapshot::from(payload))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
