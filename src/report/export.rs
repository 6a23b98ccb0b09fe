//! # CSV Export
//!
//! Flat-file artifact with one row per analyzed comment.

use crate::analysis::CommentSet;
use crate::sentiment::Sentiment;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Default name of the exported artifact
pub const DEFAULT_EXPORT_FILENAME: &str = "youtube_sentiment_results.csv";

/// One exported row: the raw comment and its label
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Comment")]
    comment: &'a str,
    #[serde(rename = "Sentiment")]
    sentiment: Sentiment,
}

/// Write the comment set as CSV to any writer.
///
/// Emits a `Comment,Sentiment` header followed by one row per comment,
/// UTF-8 encoded. An empty set produces just the header.
pub fn write_csv<W: io::Write>(writer: W, set: &CommentSet) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    write_records(&mut csv_writer, set)
}

/// Write the comment set as CSV to a file path
pub fn write_csv_file(path: &Path, set: &CommentSet) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    write_records(&mut csv_writer, set)
}

// Header is written explicitly so an empty set still produces it.
fn write_records<W: io::Write>(
    writer: &mut csv::Writer<W>,
    set: &CommentSet,
) -> Result<(), csv::Error> {
    writer.write_record(["Comment", "Sentiment"])?;
    for comment in set.iter() {
        writer.serialize(ExportRow {
            comment: &comment.text,
            sentiment: comment.sentiment,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
