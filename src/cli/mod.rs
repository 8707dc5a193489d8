use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "yt-transcript",
    about = "Fetch and format YouTube video transcripts",
    version,
    long_about = "Fetches the transcript of a YouTube video given a URL or video ID and \
prints it as plain text, or as timestamped lines with --timestamps."
)]
pub struct Cli {
    /// YouTube URL or 11-character video ID
    #[arg(value_name = "URL_OR_ID")]
    pub url_or_id: Option<String>,

    /// Include [m:ss] timestamps in the output
    #[arg(long)]
    pub timestamps: bool,

    /// Language code of the transcript to fetch
    #[arg(short, long, value_name = "LANG", default_value = "en")]
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_anywhere_in_argument_list() {
        let cli = Cli::parse_from(["yt-transcript", "--timestamps", "dQw4w9WgXcQ"]);
        assert!(cli.timestamps);
        assert_eq!(cli.url_or_id.as_deref(), Some("dQw4w9WgXcQ"));

        let cli = Cli::parse_from(["yt-transcript", "dQw4w9WgXcQ", "--timestamps"]);
        assert!(cli.timestamps);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["yt-transcript", "dQw4w9WgXcQ"]);
        assert!(!cli.timestamps);
        assert_eq!(cli.language, "en");
    }

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::parse_from(["yt-transcript"]);
        assert!(cli.url_or_id.is_none());
    }
}
