//! Video source classification and embed URL rewriting
//!
//! This crate turns raw, content-supplied video URLs into privacy-preserving
//! embeddable URLs. It knows how to recognize the supported platforms by
//! hostname, extract their video identifiers, and emit parameterized iframe
//! URLs with the platform's JS API enabled. Everything here is a pure
//! function of the input URL (and the caller's origin); no network calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod platform;
pub mod wistia;
pub mod youtube;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use platform::Platform;

/// Errors that can occur while resolving a video source
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The source string is not a parseable URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The URL's hostname matches no supported platform
    #[error("Unsupported video platform: {0}")]
    Unsupported(String),

    /// The URL matched a platform's host but not its ID pattern
    #[error("Missing video ID in URL")]
    MissingId,
}

/// Result type for embed resolution
pub type Result<T> = std::result::Result<T, EmbedError>;

/// A video source resolved to an embeddable URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmbed {
    /// Detected platform
    pub platform: Platform,
    /// Platform-specific video identifier
    pub video_id: String,
    /// Rewritten iframe `src` value
    pub embed_url: String,
}

/// Resolve a raw source URL into an embeddable URL.
///
/// `origin` is the embedding page's origin, forwarded to platforms that
/// require it for their JS API.
pub fn try_resolve(src: &str, origin: &str) -> Result<ResolvedEmbed> {
    let platform = match platform::detect(src) {
        Some(platform) => platform,
        None => {
            // Distinguish "not a URL" from "URL we don't embed"
            if url::Url::parse(src).is_err() {
                return Err(EmbedError::InvalidUrl(src.to_string()));
            }
            return Err(EmbedError::Unsupported(src.to_string()));
        }
    };

    let (video_id, embed_url) = match platform {
        Platform::YouTube => {
            let id = youtube::video_id_from_src(src).ok_or(EmbedError::MissingId)?;
            let embed = youtube::embed_url(src, origin).ok_or(EmbedError::MissingId)?;
            (id, embed)
        }
        Platform::Wistia => {
            let id = wistia::media_id_from_src(src).ok_or(EmbedError::MissingId)?;
            let embed = wistia::embed_url(src).ok_or(EmbedError::MissingId)?;
            (id, embed)
        }
    };

    Ok(ResolvedEmbed {
        platform,
        video_id,
        embed_url,
    })
}

/// Resolve a raw source URL, collapsing all failure modes to `None`.
///
/// Unsupported sources and ID-extraction failures are both routine ("no
/// embeddable URL"), so callers that only render get the option view.
pub fn resolve(src: &str, origin: &str) -> Option<ResolvedEmbed> {
    try_resolve(src, origin).ok()
}
