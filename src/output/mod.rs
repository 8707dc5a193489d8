use crate::fetch::Transcript;

/// Render a transcript as a single string.
///
/// With timestamps, each entry becomes a `[m:ss] text` line; without,
/// entry texts are joined with single spaces and timing is discarded.
pub fn format_transcript(transcript: &Transcript, timestamps: bool) -> String {
    if timestamps {
        transcript
            .entries
            .iter()
            .map(|entry| {
                let minutes = (entry.start / 60.0).floor() as u64;
                let seconds = (entry.start % 60.0).floor() as u64;
                format!("[{}:{:02}] {}", minutes, seconds, entry.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        transcript
            .entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
