//! Platform detection for video source URLs
//!
//! Classification is hostname-based: a source belongs to a platform when its
//! hostname equals one of the platform's allowed hosts or is a sub-domain of
//! that host's registrable domain. Unparseable URLs are simply unclassified.

use serde::{Deserialize, Serialize};
use url::Url;

/// Hostnames recognized as YouTube
const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "youtu.be"];

/// Hostnames recognized as Wistia
const WISTIA_HOSTS: &[&str] = &["wistia.com", "www.wistia.com", "fast.wistia.net", "wistia.net"];

/// Supported video platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube video
    YouTube,
    /// Wistia-hosted video
    Wistia,
}

impl Platform {
    /// Get the platform as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Wistia => "wistia",
        }
    }
}

/// Classify a source URL by hostname.
///
/// Returns `None` for unparseable URLs and for hosts outside both
/// allow-lists. Matching is case-insensitive and no side effects occur.
pub fn detect(src: &str) -> Option<Platform> {
    let parsed = Url::parse(src).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    if YOUTUBE_HOSTS.iter().any(|entry| host_matches(&host, entry)) {
        return Some(Platform::YouTube);
    }
    if WISTIA_HOSTS.iter().any(|entry| host_matches(&host, entry)) {
        return Some(Platform::Wistia);
    }

    None
}

/// A host matches an allow-list entry if it equals the entry or is a
/// sub-domain of the entry's registrable domain.
fn host_matches(host: &str, entry: &str) -> bool {
    if host == entry {
        return true;
    }

    let registrable = registrable_domain(entry);
    host == registrable || host.ends_with(&format!(".{}", registrable))
}

/// Last two dot-separated labels of a hostname
fn registrable_domain(host: &str) -> &str {
    match host.rmatch_indices('.').nth(1) {
        Some((index, _)) => &host[index + 1..],
        None => host,
    }
}
