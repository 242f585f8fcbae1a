//! Normalized playback events
//!
//! Domain events are the same three signals regardless of which platform
//! produced them. The wire shape matches the remote logging endpoint:
//! `{ "type": "VIDEO_PLAY", "videoUrl": ..., "videoPosition": ..., "pageId": ... }`.

use serde::{Deserialize, Serialize};

/// The closed set of normalized playback signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackKind {
    /// Playback started or resumed
    #[serde(rename = "VIDEO_PLAY")]
    Play,
    /// Playback paused
    #[serde(rename = "VIDEO_PAUSE")]
    Pause,
    /// Playback reached the end
    #[serde(rename = "VIDEO_ENDED")]
    Ended,
}

impl PlaybackKind {
    /// Get the event kind as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackKind::Play => "VIDEO_PLAY",
            PlaybackKind::Pause => "VIDEO_PAUSE",
            PlaybackKind::Ended => "VIDEO_ENDED",
        }
    }
}

/// A playback state transition, ready for dispatch and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    /// Which transition occurred
    #[serde(rename = "type")]
    pub kind: PlaybackKind,

    /// The original (pre-rewrite) video URL
    pub video_url: String,

    /// Playback position in seconds; never present for `Ended`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_position: Option<f64>,

    /// Identifier of the page hosting the embed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

impl PlaybackEvent {
    /// Create an event, enforcing that `Ended` never carries a position
    pub fn new(
        kind: PlaybackKind,
        video_url: impl Into<String>,
        video_position: Option<f64>,
        page_id: Option<String>,
    ) -> Self {
        let video_position = match kind {
            PlaybackKind::Ended => None,
            _ => video_position,
        };

        Self {
            kind,
            video_url: video_url.into(),
            video_position,
            page_id,
        }
    }

    /// Create a `VIDEO_PLAY` event
    pub fn play(
        video_url: impl Into<String>,
        position: Option<f64>,
        page_id: Option<String>,
    ) -> Self {
        Self::new(PlaybackKind::Play, video_url, position, page_id)
    }

    /// Create a `VIDEO_PAUSE` event
    pub fn pause(
        video_url: impl Into<String>,
        position: Option<f64>,
        page_id: Option<String>,
    ) -> Self {
        Self::new(PlaybackKind::Pause, video_url, position, page_id)
    }

    /// Create a `VIDEO_ENDED` event
    pub fn ended(video_url: impl Into<String>, page_id: Option<String>) -> Self {
        Self::new(PlaybackKind::Ended, video_url, None, page_id)
    }
}

/// A non-fatal failure worth surfacing to analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionEvent {
    /// Human-readable description of what failed
    pub description: String,
}

/// The generic logged-event action dispatched into application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AppEvent {
    /// A normalized playback signal
    Playback(PlaybackEvent),
    /// A caught, non-fatal error
    Exception(ExceptionEvent),
}

impl AppEvent {
    /// Get as a playback event if applicable
    pub fn as_playback(&self) -> Option<&PlaybackEvent> {
        match self {
            AppEvent::Playback(event) => Some(event),
            _ => None,
        }
    }

    /// Get as an exception event if applicable
    pub fn as_exception(&self) -> Option<&ExceptionEvent> {
        match self {
            AppEvent::Exception(event) => Some(event),
            _ => None,
        }
    }
}
