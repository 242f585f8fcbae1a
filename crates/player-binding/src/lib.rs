//! Player bindings for embedded videos
//!
//! This crate turns platform-native player signals into normalized
//! telemetry. Browser-side capabilities (script injection, `postMessage`,
//! the externally-loaded player object) live behind small traits so the
//! binding state machines run and test without a browser.
//!
//! - [`script`] - page-wide vendor script loading, at most once per URL
//! - [`youtube`] - iframe player instantiation and state-change mapping
//! - [`wistia`] - `postMessage` listener, position tracking, deferred binds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod script;
pub mod wistia;
pub mod youtube;

pub use script::{ScriptInjector, ScriptLoader};
pub use wistia::{InboundMessage, MessageData, MessagePort, WistiaBinding, WistiaConfig};
pub use youtube::{PlayerApi, PlayerError, PlayerFactory, PlayerState, PlayerVars, YouTubeBinding};
