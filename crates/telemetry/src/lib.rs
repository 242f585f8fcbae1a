//! Playback telemetry for embedded videos
//!
//! This crate normalizes platform-specific player signals into a small
//! closed set of domain events, dispatches them into application state, and
//! best-effort-logs them to a remote endpoint. Remote logging failures are
//! swallowed; they never reach playback code.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emitter;
pub mod event;
pub mod remote;
pub mod sink;

pub use emitter::TelemetryEmitter;
pub use event::{AppEvent, ExceptionEvent, PlaybackEvent, PlaybackKind};
pub use remote::{EventLogger, LoggerConfig};
pub use sink::{EventSink, MemorySink};

use thiserror::Error;

/// Errors that can occur inside the telemetry layer
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured logging endpoint is not a valid URL
    #[error("Invalid logging endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP transport or server failure
    #[error("Logging request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for telemetry operations
pub type Result<T> = std::result::Result<T, TelemetryError>;
