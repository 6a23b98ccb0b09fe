//! # Analysis Module
//!
//! Per-run comment collection, sentiment distribution, and keyword
//! aggregation.

mod comments;
mod keywords;

pub use comments::{AnalyzedComment, CommentSet, SentimentDistribution};
pub use keywords::top_keywords;
