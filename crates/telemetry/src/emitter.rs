//! Telemetry emitter
//!
//! Composes the application-state sink with the optional remote logger.
//! Dispatch into application state always happens first and is unaffected
//! by the outcome of remote logging.

use crate::event::{AppEvent, ExceptionEvent, PlaybackEvent};
use crate::remote::EventLogger;
use crate::sink::EventSink;
use std::sync::Arc;

/// Emits normalized playback events to application state and, best-effort,
/// to the remote logging endpoint.
#[derive(Clone)]
pub struct TelemetryEmitter {
    sink: Arc<dyn EventSink>,
    logger: Option<EventLogger>,
}

impl TelemetryEmitter {
    /// Create an emitter that only dispatches into application state
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self { sink, logger: None }
    }

    /// Attach a remote logger
    pub fn with_logger(mut self, logger: EventLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Emit a playback event.
    ///
    /// The sink dispatch is synchronous and completes before the remote log
    /// attempt starts; a logging failure cannot undo it.
    pub async fn emit(&self, event: PlaybackEvent) {
        self.sink.dispatch(AppEvent::Playback(event.clone()));

        if let Some(logger) = &self.logger {
            logger.log(&event).await;
        }
    }

    /// Report a caught, non-fatal failure as an analytics exception.
    ///
    /// Exceptions are dispatched into application state only; they are not
    /// sent to the playback logging endpoint.
    pub fn report_exception(&self, description: impl Into<String>) {
        self.sink.dispatch(AppEvent::Exception(ExceptionEvent {
            description: description.into(),
        }));
    }
}
