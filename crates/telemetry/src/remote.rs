//! Remote event logging
//!
//! Best-effort POST of playback events to a logging endpoint. A failed or
//! rejected request is surfaced as a warning in debug builds and otherwise
//! ignored; it never affects playback or state dispatch.

use crate::event::PlaybackEvent;
use crate::{Result, TelemetryError};
use std::time::Duration;
use url::Url;

/// Configuration for the remote event logger
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Endpoint that accepts playback events as JSON
    pub endpoint: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl LoggerConfig {
    /// Create a config for the given endpoint with the default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the logging endpoint
#[derive(Debug, Clone)]
pub struct EventLogger {
    client: reqwest::Client,
    endpoint: Url,
}

impl EventLogger {
    /// Create a logger from config.
    ///
    /// Fails only on invalid configuration; transport failures at log time
    /// are swallowed.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| TelemetryError::InvalidEndpoint(config.endpoint.clone()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// POST an event to the logging endpoint, swallowing any failure.
    pub async fn log(&self, event: &PlaybackEvent) {
        if let Err(error) = self.try_log(event).await {
            if cfg!(debug_assertions) {
                tracing::warn!(kind = event.kind.as_str(), %error, "event logging failed");
            }
        }
    }

    async fn try_log(&self, event: &PlaybackEvent) -> Result<()> {
        self.client
            .post(self.endpoint.clone())
            .json(event)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = EventLogger::new(LoggerConfig::new("not a url"));
        assert!(matches!(result, Err(TelemetryError::InvalidEndpoint(_))));
    }

    #[tokio::test]
    async fn test_log_posts_event_body() {
        let server = MockServer::start().await;
        let event = PlaybackEvent::play("https://youtu.be/abcdefghijk", Some(12.0), None);

        Mock::given(method("POST"))
            .and(path("/log"))
            .and(body_json(&event))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let logger = EventLogger::new(LoggerConfig::new(format!("{}/log", server.uri()))).unwrap();
        logger.log(&event).await;
    }

    #[tokio::test]
    async fn test_log_swallows_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let logger = EventLogger::new(LoggerConfig::new(format!("{}/log", server.uri()))).unwrap();

        // Must not panic or propagate
        logger
            .log(&PlaybackEvent::ended("https://youtu.be/abcdefghijk", None))
            .await;
    }

    #[tokio::test]
    async fn test_log_swallows_connection_failure() {
        // Nothing listening on this port
        let logger =
            EventLogger::new(LoggerConfig::new("http://127.0.0.1:9/log").timeout(Duration::from_millis(200)))
                .unwrap();

        logger
            .log(&PlaybackEvent::play("https://youtu.be/abcdefghijk", None, None))
            .await;
    }
}
