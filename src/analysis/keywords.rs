//! # Keyword Aggregation
//!
//! Frequency counting of meaningful tokens within one sentiment bucket.

use super::comments::CommentSet;
use crate::sentiment::Sentiment;
use crate::text::StopwordSet;
use std::collections::HashMap;

/// Tokens of this length or shorter are discarded
const MIN_TOKEN_LEN: usize = 2;

/// Most frequent tokens among comments with the given sentiment.
///
/// Tokenizes the normalized text of every matching comment on whitespace,
/// drops stopwords and tokens of length <= 2, and returns at most `limit`
/// `(token, count)` pairs ordered by descending count. Ties keep
/// first-encountered order.
///
/// Returns an empty vec when no comment carries the label; callers render
/// that as an explicit "no data" state.
pub fn top_keywords(
    set: &CommentSet,
    sentiment: Sentiment,
    limit: usize,
    stopwords: &dyn StopwordSet,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for comment in set.iter().filter(|c| c.sentiment == sentiment) {
        for token in comment.normalized.split_whitespace() {
            if token.len() <= MIN_TOKEN_LEN || stopwords.is_stopword(token) {
                continue;
            }
            let entry = counts.entry(token).or_insert(0);
            if *entry == 0 {
                order.push(token);
            }
            *entry += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|token| (token.to_string(), counts[token]))
        .collect();
    // Stable sort: equal counts keep first-encountered order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
