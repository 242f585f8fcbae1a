//! YouTube player binding
//!
//! The platform's iframe API is an externally-loaded object that appears on
//! the page at its own pace; only the methods actually used are described
//! here. A binding goes Uninitialized → Bound on successful instantiation
//! and then maps player state changes onto domain events. Instantiation
//! failure degrades the component; it never crashes it.

use serde::Serialize;
use std::sync::Arc;
use telemetry::{PlaybackEvent, TelemetryEmitter};
use thiserror::Error;

/// Errors from the platform player layer
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The platform script has not (yet) appeared on the page
    #[error("Player API unavailable")]
    ApiUnavailable,

    /// The platform refused to construct a player
    #[error("Player instantiation failed: {0}")]
    Instantiation(String),
}

/// Parameters passed to the platform when constructing a player.
///
/// Field names follow the platform's `playerVars` wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerVars {
    /// Enable the iframe JS API
    pub enablejsapi: u8,
    /// Disable related-video suggestions
    pub rel: u8,
    /// Allow fullscreen
    pub fs: u8,
    /// Reduce platform branding
    pub modestbranding: u8,
    /// Embedding page origin
    pub origin: String,
    /// Start offset in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    /// End offset in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

impl PlayerVars {
    /// Standard parameters for the given embedding origin
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            enablejsapi: 1,
            rel: 0,
            fs: 1,
            modestbranding: 1,
            origin: origin.into(),
            start: None,
            end: None,
        }
    }

    /// Carry start/end offsets extracted from the source URL
    pub fn with_clip(mut self, clip: embed_core::youtube::ClipRange) -> Self {
        self.start = clip.start;
        self.end = clip.end;
        self
    }
}

/// Player states reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Loaded but not started
    Unstarted,
    /// Playback finished
    Ended,
    /// Actively playing
    Playing,
    /// Paused by the user
    Paused,
    /// Buffering
    Buffering,
    /// Cued and ready
    Cued,
}

impl PlayerState {
    /// Map the platform's numeric state code, if it is a known state
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(PlayerState::Unstarted),
            0 => Some(PlayerState::Ended),
            1 => Some(PlayerState::Playing),
            2 => Some(PlayerState::Paused),
            3 => Some(PlayerState::Buffering),
            5 => Some(PlayerState::Cued),
            _ => None,
        }
    }
}

/// Minimal contract over the externally-loaded player object
#[cfg_attr(test, mockall::automock)]
pub trait PlayerApi: Send + Sync {
    /// Current playback position in seconds
    fn current_time(&self) -> f64;
}

/// Constructs platform players against a DOM node
#[cfg_attr(test, mockall::automock)]
pub trait PlayerFactory: Send + Sync {
    /// Instantiate a player for the video with the given parameters
    fn create(
        &self,
        video_id: &str,
        vars: &PlayerVars,
    ) -> std::result::Result<Arc<dyn PlayerApi>, PlayerError>;
}

/// A bound YouTube player emitting domain events on state changes
pub struct YouTubeBinding {
    player: Arc<dyn PlayerApi>,
    video_url: String,
    page_id: Option<String>,
    emitter: TelemetryEmitter,
}

impl YouTubeBinding {
    /// Instantiate a player and bind to it.
    ///
    /// On factory failure the error is logged, reported as an analytics
    /// exception, and `None` is returned; the embed degrades to an inert
    /// frame. No retry.
    pub fn bind(
        factory: &dyn PlayerFactory,
        video_id: &str,
        vars: PlayerVars,
        video_url: impl Into<String>,
        page_id: Option<String>,
        emitter: TelemetryEmitter,
    ) -> Option<Self> {
        let player = match factory.create(video_id, &vars) {
            Ok(player) => player,
            Err(error) => {
                tracing::error!(video_id, %error, "video player instantiation failed");
                emitter.report_exception(format!("Video details incorrect: {}", error));
                return None;
            }
        };

        Some(Self {
            player,
            video_url: video_url.into(),
            page_id,
            emitter,
        })
    }

    /// Handle a platform state change.
    ///
    /// `Playing`, `Paused` and `Ended` map to domain events; every other
    /// state is ignored. Position is read from the player at event time and
    /// omitted for `Ended`.
    pub async fn on_player_state(&self, state: PlayerState) {
        let event = match state {
            PlayerState::Playing => PlaybackEvent::play(
                self.video_url.clone(),
                Some(self.player.current_time()),
                self.page_id.clone(),
            ),
            PlayerState::Paused => PlaybackEvent::pause(
                self.video_url.clone(),
                Some(self.player.current_time()),
                self.page_id.clone(),
            ),
            PlayerState::Ended => {
                PlaybackEvent::ended(self.video_url.clone(), self.page_id.clone())
            }
            _ => return,
        };

        self.emitter.emit(event).await;
    }
}
