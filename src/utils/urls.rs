//! YouTube URL classification
//!
//! Fixed pattern matching over the four URL shapes the extractor accepts:
//! standard watch URLs, shortened youtu.be URLs, playlist URLs and channel
//! URLs. Classification only; items handed to the batch core are trusted
//! to have come through the extractor already.

/// The URL shapes tunegrab recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Watch,
    Short,
    Playlist,
    Channel,
}

/// Classify a URL, returning `None` for anything that is not a recognized
/// YouTube shape. Scheme and host matching is case-insensitive; video and
/// playlist IDs keep their case.
pub fn classify(url: &str) -> Option<UrlKind> {
    let lower = url.trim().to_ascii_lowercase();
    let rest = strip_scheme(&lower);

    if rest.starts_with("www.youtube.com/watch?v=") {
        Some(UrlKind::Watch)
    } else if rest.starts_with("youtu.be/") {
        Some(UrlKind::Short)
    } else if rest.starts_with("www.youtube.com/playlist?list=") {
        Some(UrlKind::Playlist)
    } else if rest.starts_with("www.youtube.com/channel/") {
        Some(UrlKind::Channel)
    } else {
        None
    }
}

/// True if the URL matches any recognized YouTube shape
pub fn is_valid(url: &str) -> bool {
    classify(url).is_some()
}

/// True if the URL is a playlist URL
pub fn is_playlist(url: &str) -> bool {
    classify(url) == Some(UrlKind::Playlist)
}

/// True if the URL is a channel URL
pub fn is_channel(url: &str) -> bool {
    classify(url) == Some(UrlKind::Channel)
}

/// Extract the video ID from watch or shortened URLs
pub fn extract_id(url: &str) -> Option<&str> {
    if !is_valid(url) {
        return None;
    }

    if let Some(pos) = url.find("v=") {
        let id = &url[pos + 2..];
        let end = id.find('&').unwrap_or(id.len());
        return Some(&id[..end]);
    }

    if let Some(pos) = url.find("youtu.be/") {
        let id = &url[pos + "youtu.be/".len()..];
        let end = id.find(['&', '?']).unwrap_or(id.len());
        return Some(&id[..end]);
    }

    None
}

/// Normalize a recognized URL: drop trailing `&`-joined tracking params and
/// force an https scheme. Returns `None` for unrecognized URLs.
pub fn normalize(url: &str) -> Option<String> {
    if !is_valid(url) {
        return None;
    }

    let cleaned = match url.find('&') {
        Some(pos) => &url[..pos],
        None => url,
    };

    Some(format!("https://{}", strip_scheme(cleaned)))
}

fn strip_scheme(url: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if url.len() >= scheme.len() && url[..scheme.len()].eq_ignore_ascii_case(scheme) {
            return &url[scheme.len()..];
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_watch() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(UrlKind::Watch)
        );
        assert_eq!(
            classify("www.youtube.com/watch?v=abc123"),
            Some(UrlKind::Watch)
        );
    }

    #[test]
    fn test_classify_short() {
        assert_eq!(classify("https://youtu.be/dQw4w9WgXcQ"), Some(UrlKind::Short));
        assert_eq!(classify("youtu.be/abc123?t=42"), Some(UrlKind::Short));
    }

    #[test]
    fn test_classify_playlist_and_channel() {
        assert!(is_playlist("https://www.youtube.com/playlist?list=PL123"));
        assert!(is_channel("https://www.youtube.com/channel/UCabc"));
        assert!(!is_playlist("https://www.youtube.com/watch?v=abc"));
        assert!(!is_channel("https://www.youtube.com/playlist?list=PL123"));
    }

    #[test]
    fn test_classify_ignores_host_case() {
        assert_eq!(
            classify("HTTPS://WWW.YouTube.com/watch?v=dQw4w9WgXcQ"),
            Some(UrlKind::Watch)
        );
        assert_eq!(classify("Youtu.Be/abc123"), Some(UrlKind::Short));
        assert!(is_playlist("https://WWW.YOUTUBE.COM/playlist?list=PL123"));
    }

    #[test]
    fn test_classify_rejects_junk() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("https://example.com/watch?v=abc"), None);
        assert_eq!(classify("not a url"), None);
        assert_eq!(classify("ftp://www.youtube.com/watch?v=abc"), None);
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(
            extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_id("https://www.youtube.com/watch?v=abc123&list=xyz"),
            Some("abc123")
        );
        assert_eq!(extract_id("https://youtu.be/abc123?t=9"), Some("abc123"));
        assert_eq!(extract_id("https://example.com/watch?v=abc"), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("www.youtube.com/watch?v=abc&feature=share"),
            Some("https://www.youtube.com/watch?v=abc".to_string())
        );
        assert_eq!(
            normalize("https://youtu.be/abc"),
            Some("https://youtu.be/abc".to_string())
        );
        assert_eq!(
            normalize("http://www.youtube.com/watch?v=abc"),
            Some("https://www.youtube.com/watch?v=abc".to_string())
        );
        assert_eq!(
            normalize("HTTPS://youtu.be/abc"),
            Some("https://youtu.be/abc".to_string())
        );
        assert_eq!(normalize("https://example.com/"), None);
    }
}
