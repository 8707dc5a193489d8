use regex::Regex;

/// URL shapes accepted for identifier extraction, tried in order.
const VIDEO_ID_PATTERNS: &[&str] = &[
    r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})",
    r"youtu\.be/([a-zA-Z0-9_-]{11})",
    r"^([a-zA-Z0-9_-]{11})$",
];

/// Extract a YouTube video ID from a watch URL, a youtu.be short link,
/// or a raw 11-character ID. Returns `None` when the input matches none
/// of the accepted forms.
pub fn extract_video_id(input: &str) -> Option<String> {
    for pattern in VIDEO_ID_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        if let Some(captures) = re.captures(input) {
            return Some(captures[1].to_string());
        }
    }

    None
}
