use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript::{extract_video_id, format_transcript, Cli, TranscriptClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yt_transcript=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(url_or_id) = cli.url_or_id else {
        println!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    let Some(video_id) = extract_video_id(&url_or_id) else {
        println!("Error: Could not extract video ID from: {}", url_or_id);
        std::process::exit(1);
    };

    tracing::info!("Fetching transcript for video: {}", video_id);

    let client = TranscriptClient::new()?;
    let transcript = client.fetch(&video_id, &cli.language).await?;

    println!("{}", format_transcript(&transcript, cli.timestamps));

    Ok(())
}
