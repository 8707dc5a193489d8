use serde::Deserialize;

/// Default endpoint for the transcript service.
const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

/// Endpoint override consumed by the process-level tests.
const BASE_URL_ENV: &str = "YT_TRANSCRIPT_BASE_URL";

/// Browser user agent for the watch page request; the page serves a
/// consent interstitial without captions to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Errors surfaced by transcript retrieval
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for video: {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript found for video: {0}")]
    NoTranscriptFound(String),

    #[error("Error fetching transcript: {0}")]
    FetchFailed(String),
}

/// One caption unit with display text and timing in seconds
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptEntry {
    /// Caption text
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Display duration in seconds
    pub duration: f64,
}

/// Full ordered transcript for a video in a given language
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    /// 11-character video identifier
    pub video_id: String,

    /// Language code of the caption track actually retrieved
    pub language: String,

    /// Entries in chronological order
    pub entries: Vec<TranscriptEntry>,
}

/// Caption track metadata from the watch page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsPayload {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

/// json3 caption payload as served by the track endpoint
#[derive(Debug, Deserialize)]
struct Json3Payload {
    events: Option<Vec<Json3Event>>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Debug, Deserialize)]
struct Json3Segment {
    utf8: Option<String>,
}

/// Client for retrieving YouTube caption tracks
pub struct TranscriptClient {
    http: reqwest::Client,
    base_url: String,
}

impl TranscriptClient {
    /// Create a client pointed at the real transcript service, unless
    /// `YT_TRANSCRIPT_BASE_URL` overrides the endpoint
    pub fn new() -> Result<Self, TranscriptError> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| YOUTUBE_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an alternate endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, TranscriptError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the transcript for a video in the requested language.
    ///
    /// Single attempt, no retries: the watch page is retrieved to discover
    /// the available caption tracks, then the matching track is downloaded
    /// and decoded into ordered entries.
    pub async fn fetch(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Transcript, TranscriptError> {
        tracing::debug!("Fetching watch page for video: {}", video_id);
        let html = self.fetch_watch_page(video_id).await?;

        let tracks = parse_caption_tracks(&html)?
            .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.to_string()))?;
        tracing::debug!("Found {} caption track(s)", tracks.len());

        let track = select_track(&tracks, language)
            .ok_or_else(|| TranscriptError::NoTranscriptFound(video_id.to_string()))?;

        tracing::debug!("Downloading caption track: {}", track.language_code);
        let entries = self.fetch_track(&track.base_url).await?;

        Ok(Transcript {
            video_id: video_id.to_string(),
            language: track.language_code.clone(),
            entries,
        })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<String, TranscriptError> {
        let url = format!("{}/watch?v={}", self.base_url, video_id);

        let response = self
            .http
            .get(&url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::FetchFailed(format!(
                "HTTP {} from watch page",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))
    }

    async fn fetch_track(&self, base_url: &str) -> Result<Vec<TranscriptEntry>, TranscriptError> {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        let url = format!("{}{}fmt=json3", base_url, separator);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptError::FetchFailed(format!(
                "HTTP {} from caption track",
                response.status()
            )));
        }

        let payload: Json3Payload = response
            .json()
            .await
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))?;

        Ok(decode_events(payload))
    }
}

/// Locate the caption track list embedded in the watch page HTML.
///
/// Returns `Ok(None)` when the page carries no caption tracks, which is
/// how the service reports transcripts being disabled for a video.
fn parse_caption_tracks(html: &str) -> Result<Option<Vec<CaptionTrack>>, TranscriptError> {
    let Some((_, tail)) = html.split_once("\"captions\":") else {
        return Ok(None);
    };

    let json = extract_json_object(tail).ok_or_else(|| {
        TranscriptError::FetchFailed("malformed captions data in watch page".to_string())
    })?;

    let payload: CaptionsPayload = serde_json::from_str(json)
        .map_err(|e| TranscriptError::FetchFailed(format!("invalid captions data: {}", e)))?;

    Ok(payload
        .player_captions_tracklist_renderer
        .and_then(|renderer| renderer.caption_tracks)
        .filter(|tracks| !tracks.is_empty()))
}

/// Take the balanced JSON object at the start of `input`, honoring
/// string literals and escapes.
fn extract_json_object(input: &str) -> Option<&str> {
    let start = input.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in input[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&input[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Pick the caption track for the requested language: exact languageCode
/// match preferred, primary-subtag prefix match accepted ("en" matches
/// "en-GB").
fn select_track<'a>(tracks: &'a [CaptionTrack], language: &str) -> Option<&'a CaptionTrack> {
    tracks
        .iter()
        .find(|track| track.language_code == language)
        .or_else(|| {
            tracks.iter().find(|track| {
                track
                    .language_code
                    .split('-')
                    .next()
                    .map(|primary| primary == language)
                    .unwrap_or(false)
            })
        })
}

/// Convert the json3 event stream into transcript entries. Events without
/// text segments (style/window events) are dropped, and newlines inside
/// captions are flattened to spaces.
fn decode_events(payload: Json3Payload) -> Vec<TranscriptEntry> {
    payload
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            let segments = event.segs?;
            let text: String = segments
                .into_iter()
                .filter_map(|segment| segment.utf8)
                .collect::<String>()
                .replace('\n', " ")
                .trim()
                .to_string();

            if text.is_empty() {
                return None;
            }

            Some(TranscriptEntry {
                text,
                start: event.start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
            })
        })
        .collect()
}
