//! Wistia URL handling and origin trust
//!
//! Extracts media IDs from Wistia link shapes, rewrites them onto the
//! `fast.wistia.net` iframe host, and decides which `postMessage` origins
//! are trusted to speak for a Wistia player.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// The vendor script that upgrades Wistia iframes on the page
pub const SCRIPT_URL: &str = "https://fast.wistia.net/assets/external/E-v1.js";

/// Target origin for outbound messages to the player iframe
pub const TARGET_ORIGIN: &str = "https://fast.wistia.net";

/// Origins trusted to deliver player messages (exact matches)
const TRUSTED_ORIGINS: &[&str] = &[
    "https://fast.wistia.net",
    "https://fast.wistia.com",
    "https://embed-ssl.wistia.com",
    "https://embed-cloudfront.wistia.com",
];

fn id_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap())
}

/// Extract the alphanumeric media ID from a parsed Wistia URL.
///
/// Recognized shapes: `/embed/iframe/{id}` and `/medias/{id}`.
pub fn media_id(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    let candidate = match segments.as_slice() {
        ["embed", "iframe", id, ..] => id,
        ["medias", id, ..] => id,
        _ => return None,
    };

    if id_regex().is_match(candidate) {
        Some((*candidate).to_string())
    } else {
        None
    }
}

/// Extract the media ID from a raw source string
pub fn media_id_from_src(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    media_id(&url)
}

/// Rewrite a Wistia URL into a parameterized iframe embed URL.
///
/// Returns `None` when no media ID can be extracted.
pub fn embed_url(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let id = media_id(&url)?;

    Some(format!(
        "https://fast.wistia.net/embed/iframe/{}?videoFoam=true&playerColor=1fadad&wmode=transparent",
        id
    ))
}

/// Whether a `postMessage` origin is trusted to carry player events.
///
/// Exact matches on the known embed origins, or any origin whose host falls
/// under `wistia.net`/`wistia.com`. Everything else is page background
/// noise and must be discarded without processing.
pub fn is_trusted_origin(origin: &str) -> bool {
    TRUSTED_ORIGINS.contains(&origin)
        || origin.ends_with(".wistia.net")
        || origin.ends_with(".wistia.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_id_from_iframe_url() {
        assert_eq!(
            media_id_from_src("https://fast.wistia.net/embed/iframe/xyz123ab"),
            Some("xyz123ab".to_string())
        );
    }

    #[test]
    fn test_media_id_from_medias_url() {
        assert_eq!(
            media_id_from_src("https://company.wistia.com/medias/abc9def"),
            Some("abc9def".to_string())
        );
    }

    #[test]
    fn test_media_id_rejects_other_paths() {
        assert_eq!(media_id_from_src("https://fast.wistia.net/pricing"), None);
        assert_eq!(media_id_from_src("https://wistia.com/"), None);
    }

    #[test]
    fn test_media_id_rejects_non_alphanumeric() {
        assert_eq!(media_id_from_src("https://wistia.com/medias/abc-def"), None);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("https://fast.wistia.net/embed/iframe/xyz123ab"),
            Some(
                "https://fast.wistia.net/embed/iframe/xyz123ab?videoFoam=true&playerColor=1fadad&wmode=transparent"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_embed_url_without_id_is_none() {
        assert_eq!(embed_url("https://fast.wistia.net/pricing"), None);
    }

    #[test]
    fn test_trusted_origins() {
        assert!(is_trusted_origin("https://fast.wistia.net"));
        assert!(is_trusted_origin("https://embed-ssl.wistia.com"));
        assert!(is_trusted_origin("https://player.wistia.com"));
        assert!(is_trusted_origin("https://anything.wistia.net"));
    }

    #[test]
    fn test_untrusted_origins() {
        assert!(!is_trusted_origin("https://evil.example.com"));
        assert!(!is_trusted_origin("https://wistia.net.evil.example"));
        assert!(!is_trusted_origin("https://notwistia.com"));
    }
}
