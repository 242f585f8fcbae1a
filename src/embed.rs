//! The video embed component
//!
//! One instance per rendered video. Detection and rewriting are memoized
//! per source; mounting wires the platform binding and is refused outright
//! for hidden embeds.

use crate::view::{FrameProps, RenderPlan, VisibilityProvider};
use embed_core::{wistia, youtube, Platform, ResolvedEmbed};
use player_binding::{
    MessagePort, PlayerFactory, PlayerVars, ScriptLoader, WistiaBinding, WistiaConfig,
    YouTubeBinding,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use telemetry::TelemetryEmitter;

/// Input props for a video embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSource {
    /// Raw, content-supplied video URL
    pub src: String,

    /// Print-safe textual fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl VideoSource {
    /// Create a source without alt text
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt_text: None,
        }
    }

    /// Attach alt text
    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }
}

/// Page-level configuration shared by every embed on a page
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// The embedding page's origin, forwarded to platform players
    pub origin: String,

    /// Identifier of the hosting page, carried on telemetry events
    pub page_id: Option<String>,

    /// Wistia binding behavior
    pub wistia: WistiaConfig,
}

impl EmbedConfig {
    /// Config for a page at `origin`
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            page_id: None,
            wistia: WistiaConfig::default(),
        }
    }

    /// Attach the hosting page id
    pub fn page_id(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }
}

/// Browser-side capabilities needed to mount a live embed
#[derive(Clone)]
pub struct MountDeps {
    /// Telemetry destination for the binding
    pub emitter: TelemetryEmitter,

    /// Page-wide vendor script loader
    pub script_loader: Arc<ScriptLoader>,

    /// Outbound message channel to the embed iframe
    pub message_port: Arc<dyn MessagePort>,

    /// Platform player constructor
    pub player_factory: Arc<dyn PlayerFactory>,
}

/// A live platform binding produced by [`VideoEmbed::mount`]
pub enum EmbedBinding {
    /// Bound YouTube player
    YouTube(YouTubeBinding),
    /// Established Wistia message binding
    Wistia(WistiaBinding),
}

impl EmbedBinding {
    /// Get the YouTube binding if applicable
    pub fn as_youtube(&self) -> Option<&YouTubeBinding> {
        match self {
            EmbedBinding::YouTube(binding) => Some(binding),
            _ => None,
        }
    }

    /// Get the Wistia binding if applicable
    pub fn as_wistia_mut(&mut self) -> Option<&mut WistiaBinding> {
        match self {
            EmbedBinding::Wistia(binding) => Some(binding),
            _ => None,
        }
    }
}

/// A video embed instance
#[derive(Debug, Clone)]
pub struct VideoEmbed {
    source: VideoSource,
    config: EmbedConfig,
    resolved: Option<ResolvedEmbed>,
}

impl VideoEmbed {
    /// Create an embed for a source, resolving it once up front
    pub fn new(source: VideoSource, config: EmbedConfig) -> Self {
        let resolved = embed_core::resolve(&source.src, &config.origin);
        Self {
            source,
            config,
            resolved,
        }
    }

    /// Replace the source (the page supplied a new document) and re-resolve
    pub fn set_source(&mut self, source: VideoSource) {
        self.resolved = embed_core::resolve(&source.src, &self.config.origin);
        self.source = source;
    }

    /// Detected platform, if any
    pub fn platform(&self) -> Option<Platform> {
        self.resolved.as_ref().map(|r| r.platform)
    }

    /// Rewritten embed URL, if the source resolved
    pub fn embed_url(&self) -> Option<&str> {
        self.resolved.as_ref().map(|r| r.embed_url.as_str())
    }

    /// Decide what to render.
    ///
    /// Hidden embeds and unresolvable sources both fall back to alt text;
    /// only a visible, resolved source produces frame props.
    pub fn render_plan(&self, visibility: &dyn VisibilityProvider) -> RenderPlan {
        if !visibility.is_visible() {
            return self.alt_text_plan();
        }

        match &self.resolved {
            Some(resolved) => RenderPlan::Frame(FrameProps {
                src: resolved.embed_url.clone(),
                title: self.source.alt_text.clone(),
                allow_fullscreen: true,
            }),
            None => self.alt_text_plan(),
        }
    }

    /// Mount the platform binding for a rendered frame.
    ///
    /// Performs no side effect at all — no script injection, no player, no
    /// listener — when the embed is hidden or unresolved. For YouTube a
    /// failed instantiation yields `None` after the error has been reported
    /// through the emitter.
    pub fn mount(
        &self,
        visibility: &dyn VisibilityProvider,
        deps: &MountDeps,
    ) -> Option<EmbedBinding> {
        if !visibility.is_visible() {
            return None;
        }
        let resolved = self.resolved.as_ref()?;

        match resolved.platform {
            Platform::YouTube => {
                let vars = PlayerVars::new(self.config.origin.clone())
                    .with_clip(youtube::clip_range_from_src(&self.source.src));

                YouTubeBinding::bind(
                    deps.player_factory.as_ref(),
                    &resolved.video_id,
                    vars,
                    self.source.src.clone(),
                    self.config.page_id.clone(),
                    deps.emitter.clone(),
                )
                .map(EmbedBinding::YouTube)
            }
            Platform::Wistia => {
                deps.script_loader.ensure_loaded(wistia::SCRIPT_URL);

                Some(EmbedBinding::Wistia(WistiaBinding::establish(
                    deps.message_port.clone(),
                    &self.config.wistia,
                    self.source.src.clone(),
                    self.config.page_id.clone(),
                    deps.emitter.clone(),
                )))
            }
        }
    }

    fn alt_text_plan(&self) -> RenderPlan {
        RenderPlan::AltText {
            text: self.source.alt_text.clone().unwrap_or_default(),
        }
    }
}
