//! # Text Module
//!
//! Comment normalization and stopword handling.

mod normalize;
mod stopwords;

pub use normalize::CommentNormalizer;
pub use stopwords::{EnglishStopwords, StopwordSet};
