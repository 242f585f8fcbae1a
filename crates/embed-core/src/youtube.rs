//! YouTube URL handling
//!
//! Extracts 11-character video IDs and optional clip offsets from the
//! various URL shapes YouTube uses, and rewrites them onto the
//! `youtube-nocookie.com` embed host with the JS API enabled and
//! related-video suggestions disabled.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Embed host used for rewritten URLs (no tracking cookies)
const EMBED_HOST: &str = "www.youtube-nocookie.com";

/// Optional start/end offsets carried on a video URL, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipRange {
    /// Playback start offset
    pub start: Option<u64>,
    /// Playback end offset
    pub end: Option<u64>,
}

fn id_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap())
}

fn is_video_id(candidate: &str) -> bool {
    id_regex().is_match(candidate)
}

/// Extract the 11-character video ID from a parsed YouTube URL.
///
/// Recognized shapes, in order: a `v=` query parameter, an `/embed/{id}`
/// path, and a bare `/{id}` trailing path segment (`youtu.be` links).
pub fn video_id(url: &Url) -> Option<String> {
    if let Some(v) = url
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
    {
        if is_video_id(&v) {
            return Some(v);
        }
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    if let Some(position) = segments.iter().position(|s| *s == "embed") {
        if let Some(id) = segments.get(position + 1) {
            if is_video_id(id) {
                return Some((*id).to_string());
            }
        }
    }

    if let Some(last) = segments.last() {
        if is_video_id(last) {
            return Some((*last).to_string());
        }
    }

    None
}

/// Extract the video ID from a raw source string
pub fn video_id_from_src(src: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    video_id(&url)
}

/// Extract `start`/`t` and `end` second offsets from a parsed URL.
///
/// A trailing `s` on the value (`t=30s`) is tolerated.
pub fn clip_range(url: &Url) -> ClipRange {
    let mut range = ClipRange::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "start" | "t" if range.start.is_none() => {
                range.start = value.trim_end_matches('s').parse().ok();
            }
            "end" if range.end.is_none() => {
                range.end = value.trim_end_matches('s').parse().ok();
            }
            _ => {}
        }
    }

    range
}

/// Extract the clip range from a raw source string
pub fn clip_range_from_src(src: &str) -> ClipRange {
    Url::parse(src).map(|url| clip_range(&url)).unwrap_or_default()
}

/// Rewrite a YouTube URL into a parameterized embed URL.
///
/// Enables the iframe JS API, disables related-video suggestions, allows
/// fullscreen, and forwards the embedding page's origin. Returns `None`
/// when no video ID can be extracted.
pub fn embed_url(src: &str, origin: &str) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let id = video_id(&url)?;
    let clip = clip_range(&url);

    let mut embed = format!(
        "https://{}/embed/{}?enablejsapi=1&rel=0&fs=1&modestbranding=1",
        EMBED_HOST, id
    );
    if let Some(start) = clip.start {
        embed.push_str(&format!("&start={}", start));
    }
    if let Some(end) = clip.end {
        embed.push_str(&format!("&end={}", end));
    }
    embed.push_str(&format!("&origin={}", origin));

    Some(embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://learn.example.org";

    #[test]
    fn test_video_id_from_watch_url() {
        assert_eq!(
            video_id_from_src("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_video_id_from_short_url() {
        assert_eq!(
            video_id_from_src("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_video_id_from_embed_url() {
        assert_eq!(
            video_id_from_src("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_video_id_rejects_wrong_length() {
        assert_eq!(video_id_from_src("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(video_id_from_src("https://www.youtube.com/feed/library"), None);
    }

    #[test]
    fn test_clip_range_from_start_and_end() {
        let range = clip_range_from_src("https://youtu.be/dQw4w9WgXcQ?t=30&end=90");
        assert_eq!(range.start, Some(30));
        assert_eq!(range.end, Some(90));
    }

    #[test]
    fn test_clip_range_tolerates_trailing_s() {
        let range = clip_range_from_src("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s");
        assert_eq!(range.start, Some(42));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_embed_url_parameters() {
        let embed = embed_url("https://www.youtube.com/watch?v=abcdefghijk", ORIGIN).unwrap();

        assert!(embed.contains("youtube-nocookie.com/embed/abcdefghijk"));
        assert!(embed.contains("enablejsapi=1&rel=0&fs=1&modestbranding=1"));
        assert!(embed.ends_with(&format!("&origin={}", ORIGIN)));
    }

    #[test]
    fn test_embed_url_carries_clip_range() {
        let embed = embed_url("https://youtu.be/abcdefghijk?t=30&end=90", ORIGIN).unwrap();
        assert!(embed.contains("&start=30&end=90"));
    }

    #[test]
    fn test_embed_url_without_id_is_none() {
        assert_eq!(embed_url("https://www.youtube.com/feed/library", ORIGIN), None);
    }
}
