//! Wistia player binding
//!
//! Wistia players speak `postMessage`. A binding owns one message stream:
//! it discards untrusted origins, decodes `_trigger` payloads, tracks the
//! last known playback position (Wistia does not deliver position with
//! every event), and emits domain events. Because the iframe exposes no
//! cross-origin load event, `bind` commands are posted after a fixed delay;
//! events arriving before binding completes are simply never delivered.

use embed_core::wistia;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use telemetry::{PlaybackEvent, TelemetryEmitter};
use tokio::task::JoinHandle;

/// Player events the binding subscribes to
pub const BIND_EVENTS: &[&str] = &["play", "pause", "end", "timechange", "secondchange"];

/// Configuration for establishing a Wistia binding
#[derive(Debug, Clone)]
pub struct WistiaConfig {
    /// Delay before posting `bind` commands to the iframe
    pub bind_delay: Duration,

    /// Target origin for outbound messages
    pub target_origin: String,
}

impl Default for WistiaConfig {
    fn default() -> Self {
        Self {
            // The iframe has no cross-origin load event; one second is long
            // enough in practice for the player to start listening
            bind_delay: Duration::from_secs(1),
            target_origin: wistia::TARGET_ORIGIN.to_string(),
        }
    }
}

/// Outbound `postMessage` channel to the player iframe
#[cfg_attr(test, mockall::automock)]
pub trait MessagePort: Send + Sync {
    /// Post a serialized payload to the iframe at the given target origin
    fn post(&self, payload: &str, target_origin: &str);
}

/// Payload of an inbound window message
#[derive(Debug, Clone)]
pub enum MessageData {
    /// Raw string payload, possibly JSON
    Text(String),
    /// Payload already decoded as JSON
    Json(Value),
}

/// An inbound window `message` event
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Origin the browser attributes the message to
    pub origin: String,
    /// Message payload
    pub data: MessageData,
}

impl InboundMessage {
    /// Convenience constructor for a string payload
    pub fn text(origin: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            data: MessageData::Text(data.into()),
        }
    }

    /// Convenience constructor for an already-decoded payload
    pub fn json(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data: MessageData::Json(data),
        }
    }
}

#[derive(Serialize)]
struct BindCommand {
    method: &'static str,
    args: [&'static str; 1],
}

/// A live binding to one Wistia iframe.
///
/// Owns the last-known playback position for its iframe; the position is
/// reset to zero when the binding is established and discarded with it.
/// Dropping the binding cancels the pending bind-command dispatch.
pub struct WistiaBinding {
    video_url: String,
    page_id: Option<String>,
    emitter: TelemetryEmitter,
    last_position: f64,
    bind_task: Option<JoinHandle<()>>,
}

impl WistiaBinding {
    /// Establish a binding against the iframe behind `port`.
    ///
    /// Spawns the deferred task that posts `bind` commands for each of
    /// [`BIND_EVENTS`] once `config.bind_delay` has elapsed.
    pub fn establish(
        port: Arc<dyn MessagePort>,
        config: &WistiaConfig,
        video_url: impl Into<String>,
        page_id: Option<String>,
        emitter: TelemetryEmitter,
    ) -> Self {
        let delay = config.bind_delay;
        let target_origin = config.target_origin.clone();

        let bind_task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            for event in BIND_EVENTS {
                let command = BindCommand {
                    method: "bind",
                    args: [event],
                };
                if let Ok(payload) = serde_json::to_string(&command) {
                    port.post(&payload, &target_origin);
                }
            }
        });

        Self {
            video_url: video_url.into(),
            page_id,
            emitter,
            last_position: 0.0,
            bind_task: Some(bind_task),
        }
    }

    /// Last known playback position in seconds
    pub fn last_position(&self) -> f64 {
        self.last_position
    }

    /// Process one inbound window message.
    ///
    /// Messages from untrusted origins and non-JSON payloads are discarded
    /// silently; both are routine traffic on a shared window listener.
    pub async fn handle_message(&mut self, message: InboundMessage) {
        if !wistia::is_trusted_origin(&message.origin) {
            return;
        }

        let value = match message.data {
            MessageData::Json(value) => value,
            MessageData::Text(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                // Not every window message is JSON; drop without logging
                Err(_) => return,
            },
        };

        self.handle_payload(value).await;
    }

    async fn handle_payload(&mut self, value: Value) {
        // Only `_trigger` calls carry player events
        if value.get("method").and_then(Value::as_str) != Some("_trigger") {
            return;
        }

        let Some(args) = value.get("args").and_then(Value::as_array) else {
            note_shape_error(&value);
            return;
        };
        let Some(name) = args.first().and_then(Value::as_str) else {
            note_shape_error(&value);
            return;
        };

        let event_data = args.get(1);

        match name.to_ascii_lowercase().as_str() {
            "play" | "playing" => {
                self.update_position_from_event(event_data);
                self.emit(PlaybackEvent::play(
                    self.video_url.clone(),
                    Some(self.last_position),
                    self.page_id.clone(),
                ))
                .await;
            }
            "pause" | "paused" => {
                self.update_position_from_event(event_data);
                self.emit(PlaybackEvent::pause(
                    self.video_url.clone(),
                    Some(self.last_position),
                    self.page_id.clone(),
                ))
                .await;
            }
            "end" | "ended" => {
                self.update_position_from_event(event_data);
                self.emit(PlaybackEvent::ended(
                    self.video_url.clone(),
                    self.page_id.clone(),
                ))
                .await;
            }
            "timechange" | "secondchange" => {
                // Position-only update; no domain event
                let seconds = event_data.and_then(Value::as_f64).or_else(|| {
                    event_data
                        .and_then(|data| data.get("seconds"))
                        .and_then(Value::as_f64)
                });
                if let Some(seconds) = seconds {
                    self.last_position = seconds;
                }
            }
            // Events we never bound to
            _ => {}
        }
    }

    /// Backfill position from a `_trigger` event payload, when present
    fn update_position_from_event(&mut self, event_data: Option<&Value>) {
        let Some(data) = event_data else {
            return;
        };

        let seconds = data
            .get("seconds")
            .and_then(Value::as_f64)
            .or_else(|| data.get("secondsWatched").and_then(Value::as_f64));

        if let Some(seconds) = seconds {
            self.last_position = seconds;
        }
    }

    async fn emit(&self, event: PlaybackEvent) {
        self.emitter.emit(event).await;
    }

    /// Cancel the pending bind dispatch, if it has not fired yet.
    ///
    /// In-flight telemetry requests are left to complete on their own.
    pub fn teardown(&mut self) {
        if let Some(task) = self.bind_task.take() {
            task.abort();
        }
    }
}

impl Drop for WistiaBinding {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Payloads that are valid JSON but not a shape we recognize. Only the
/// non-JSON case is expected background noise, so this one is surfaced in
/// debug builds.
fn note_shape_error(value: &Value) {
    if cfg!(debug_assertions) {
        tracing::debug!(payload = %value, "unexpected wistia message shape");
    }
}
