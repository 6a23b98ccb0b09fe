//! # Video Identifier
//!
//! Extraction of YouTube video identifiers from user-supplied URL strings.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Length of a YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Matches both `watch?v=<id>` and path-style `youtu.be/<id>` forms.
    PATTERN.get_or_init(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap())
}

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video identifier from an arbitrary URL string.
    ///
    /// Recognizes `v=<id>` query parameters and trailing `/<id>` path
    /// segments. Returns `None` when no identifier-shaped token is present.
    pub fn from_url(url: &str) -> Option<Self> {
        id_pattern()
            .captures(url)
            .and_then(|cap| cap.get(1))
            .map(|m| VideoId(m.as_str().to_string()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url() {
        let id = VideoId::from_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_url_with_extra_params() {
        let id = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_shorts_url() {
        let id = VideoId::from_url("https://www.youtube.com/shorts/abc123def45").unwrap();
        assert_eq!(id.as_str(), "abc123def45");
    }

    #[test]
    fn test_no_identifier() {
        assert!(VideoId::from_url("https://example.com/about").is_none());
        assert!(VideoId::from_url("not a url at all").is_none());
        assert!(VideoId::from_url("").is_none());
    }

    #[test]
    fn test_too_short_token() {
        // ten characters after v= is not a valid identifier
        assert!(VideoId::from_url("v=abcdefghij").is_none());
    }

    #[test]
    fn test_id_length() {
        let id = VideoId::from_url("v=dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str().len(), VIDEO_ID_LEN);
    }
}
