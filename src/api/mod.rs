//! # API Module
//!
//! YouTube Data API client for paginated comment fetching.

mod youtube;

pub use youtube::{YouTubeClient, YouTubeError};
