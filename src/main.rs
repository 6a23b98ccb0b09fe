//! # YouTube Sentiment CLI
//!
//! Fetches comments for a video, classifies their sentiment, prints the
//! distribution chart, keyword panels, and comment table, and exports a CSV.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use yt_sentiment::{
    config, render_report, top_keywords, write_csv_file, AnalysisError, CommentNormalizer,
    CommentSet, EnglishStopwords, Sentiment, SentimentClassifier, VideoId, YouTubeClient,
    DEFAULT_EXPORT_FILENAME,
};

#[derive(Parser)]
#[command(name = "yt-sentiment")]
#[command(about = "Sentiment analysis for YouTube video comments", long_about = None)]
struct Cli {
    /// Video URL (prompted interactively when omitted)
    url: Option<String>,

    /// YouTube Data API key (falls back to the YOUTUBE_API_KEY env var)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Number of comments to analyze (50-1000 in steps of 50)
    #[arg(short, long, default_value = "200")]
    max_comments: usize,

    /// Keywords listed per sentiment panel
    #[arg(short, long, default_value = "15")]
    top: usize,

    /// CSV output path
    #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
    out: PathBuf,

    /// Verbosity level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let api_key = config::resolve_api_key(cli.api_key.clone())?;
    let max_comments = config::validate_max_comments(cli.max_comments)?;

    let url = match &cli.url {
        Some(url) => url.clone(),
        None => prompt("Video URL: ")?,
    };
    let video_id = VideoId::from_url(&url).ok_or(AnalysisError::InvalidUrl)?;
    info!(video_id = %video_id, max_comments, "starting analysis");

    let client = YouTubeClient::new(api_key);
    let raw_comments = client.fetch_comments(&video_id, max_comments).await?;
    info!(fetched = raw_comments.len(), "comments fetched");

    let normalizer = CommentNormalizer::new();
    let classifier = SentimentClassifier::new();
    let set = CommentSet::analyze(raw_comments, &normalizer, &classifier);

    let stopwords = EnglishStopwords::new();
    let positive_keywords = top_keywords(&set, Sentiment::Positive, cli.top, &stopwords);
    let negative_keywords = top_keywords(&set, Sentiment::Negative, cli.top, &stopwords);

    render_report(&set, &positive_keywords, &negative_keywords);

    write_csv_file(&cli.out, &set)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    println!(
        "\nExported {} comment(s) to {}",
        set.len(),
        cli.out.display()
    );

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;
    Ok(())
}

/// Read one line from stdin, standing in for the original interactive form
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim().to_string();
    if trimmed.is_empty() {
        bail!("no URL supplied");
    }
    Ok(trimmed)
}
