//! # Terminal Rendering
//!
//! Sentiment distribution chart, keyword panels, and the comment table.
//! Empty inputs render explicit "no data" lines instead of failing.

use crate::analysis::{CommentSet, SentimentDistribution};
use crate::sentiment::Sentiment;

/// Width of the distribution bars in characters
const BAR_WIDTH: usize = 40;

/// Width of the keyword panel bars in characters
const PANEL_BAR_WIDTH: usize = 30;

/// Comment column width in the table
const TABLE_TEXT_WIDTH: usize = 60;

/// Render the full report: distribution chart, both keyword panels, and the
/// comment table.
pub fn render_report(
    set: &CommentSet,
    positive_keywords: &[(String, usize)],
    negative_keywords: &[(String, usize)],
) {
    println!("\n{}", header_line(set));
    render_distribution(&set.distribution());
    render_keyword_panel("Top Positive Keywords", positive_keywords);
    render_keyword_panel("Top Negative Keywords", negative_keywords);
    render_table(set);
}

/// Render the sentiment distribution as proportioned horizontal bars
pub fn render_distribution(distribution: &SentimentDistribution) {
    println!("\n=== Sentiment Distribution ===\n");

    if distribution.total() == 0 {
        println!("No data: no comments were analyzed.");
        return;
    }

    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        let share = distribution.share(sentiment);
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<8} {:<width$} {:>5.1}% ({})",
            sentiment.as_str(),
            "#".repeat(filled),
            share * 100.0,
            distribution.count(sentiment),
            width = BAR_WIDTH
        );
    }
}

/// Render one keyword panel as ranked, count-scaled bars
pub fn render_keyword_panel(title: &str, keywords: &[(String, usize)]) {
    println!("\n=== {} ===\n", title);

    if keywords.is_empty() {
        println!("No data: no keywords for this sentiment.");
        return;
    }

    let max_count = keywords.iter().map(|(_, count)| *count).max().unwrap_or(1);
    for (token, count) in keywords {
        let filled = (count * PANEL_BAR_WIDTH).div_ceil(max_count);
        println!("{:>16}  {} ({})", token, "#".repeat(filled), count);
    }
}

/// Render the (comment, sentiment) table
pub fn render_table(set: &CommentSet) {
    println!("\n=== Comments ===\n");

    if set.is_empty() {
        println!("No data: nothing to tabulate.");
        return;
    }

    println!("{:<width$}  Sentiment", "Comment", width = TABLE_TEXT_WIDTH);
    println!("{}  {}", "-".repeat(TABLE_TEXT_WIDTH), "-".repeat(9));
    for comment in set.iter() {
        println!(
            "{:<width$}  {}",
            truncate(&comment.text, TABLE_TEXT_WIDTH),
            comment.sentiment.as_str(),
            width = TABLE_TEXT_WIDTH
        );
    }
}

/// Report header naming the comment count and when the analysis ran
fn header_line(set: &CommentSet) -> String {
    format!(
        "Analyzed {} comment(s) at {}",
        set.len(),
        set.analyzed_at().format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Truncate on a char boundary, marking cut-off text with an ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    result.push_str("...");
    result
}
