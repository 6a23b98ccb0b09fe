//! # YouTube Comment Sentiment
//!
//! Single-pass sentiment analysis for the comments of one YouTube video:
//! fetch top-level comments, normalize and classify each one, aggregate
//! keywords per sentiment bucket, render the results, and export a CSV
//! artifact.
//!
//! ## Modules
//!
//! - `video` - video identifier extraction from URLs
//! - `api` - paginated comment fetching (YouTube Data API)
//! - `text` - comment normalization and stopwords
//! - `sentiment` - polarity scoring and classification
//! - `analysis` - the per-run comment set and keyword aggregation
//! - `report` - terminal rendering and CSV export
//! - `config` - credential sourcing and parameter validation
//!
//! ## Example Usage
//!
//! ```no_run
//! use yt_sentiment::{
//!     top_keywords, CommentNormalizer, CommentSet, EnglishStopwords, Sentiment,
//!     SentimentClassifier, VideoId, YouTubeClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let video = VideoId::from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .ok_or("no video id in URL")?;
//!
//!     let client = YouTubeClient::new("api-key");
//!     let raw = client.fetch_comments(&video, 200).await?;
//!
//!     let normalizer = CommentNormalizer::new();
//!     let classifier = SentimentClassifier::new();
//!     let set = CommentSet::analyze(raw, &normalizer, &classifier);
//!
//!     let stopwords = EnglishStopwords::new();
//!     let top = top_keywords(&set, Sentiment::Positive, 15, &stopwords);
//!     println!("{} comments, top positive keywords: {:?}", set.len(), top);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod text;
pub mod video;

// Re-exports for convenience
pub use analysis::{top_keywords, AnalyzedComment, CommentSet, SentimentDistribution};
pub use api::{YouTubeClient, YouTubeError};
pub use error::AnalysisError;
pub use report::{render_report, write_csv, write_csv_file, DEFAULT_EXPORT_FILENAME};
pub use sentiment::{LexiconScorer, PolarityScorer, Sentiment, SentimentClassifier};
pub use text::{CommentNormalizer, EnglishStopwords, StopwordSet};
pub use video::VideoId;
