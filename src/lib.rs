//! Accordion-aware video embed component
//!
//! Glues the member crates into one component: a video source is classified
//! and rewritten by `embed-core`, rendered (or suppressed) according to the
//! ambient section visibility, and — once mounted — bound to its platform
//! player by `player-binding`, with playback telemetry flowing through
//! `telemetry`.
//!
//! A hidden embed is inert by construction: it renders its alt text and
//! [`VideoEmbed::mount`] refuses to inject scripts, create players, or
//! register listeners for it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod view;

pub use embed::{EmbedBinding, EmbedConfig, MountDeps, VideoEmbed, VideoSource};
pub use view::{AccordionSection, AlwaysVisible, FrameProps, RenderPlan, VisibilityProvider};
