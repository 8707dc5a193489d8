//! yt-transcript - A Rust CLI tool for fetching YouTube video transcripts
//!
//! This library extracts an 11-character video identifier from a URL or raw ID,
//! retrieves the caption track for that video in a requested language, and
//! formats the result as plain text or timestamped lines.

pub mod cli;
pub mod fetch;
pub mod output;
pub mod video_id;

pub use cli::Cli;
pub use fetch::{Transcript, TranscriptClient, TranscriptEntry, TranscriptError};
pub use output::format_transcript;
pub use video_id::extract_video_id;
