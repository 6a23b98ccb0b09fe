//! # Configuration
//!
//! Credential sourcing and run parameter validation. The API key is always
//! injected (flag or environment); there is no bundled default.

use crate::error::AnalysisError;

/// Environment variable consulted when no key is passed explicitly
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Smallest supported comment count
pub const MIN_COMMENTS: usize = 50;

/// Largest supported comment count
pub const MAX_COMMENTS: usize = 1000;

/// Supported comment counts advance in steps of this size
pub const COMMENT_STEP: usize = 50;

/// Resolve the API credential.
///
/// An explicitly passed key wins; otherwise the `YOUTUBE_API_KEY`
/// environment variable is consulted. Blank values count as missing.
pub fn resolve_api_key(explicit: Option<String>) -> Result<String, AnalysisError> {
    if let Some(key) = explicit {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AnalysisError::MissingCredential),
    }
}

/// Validate the requested comment count against the 50-1000 range in steps
/// of 50.
pub fn validate_max_comments(count: usize) -> Result<usize, AnalysisError> {
    if count < MIN_COMMENTS || count > MAX_COMMENTS || count % COMMENT_STEP != 0 {
        return Err(AnalysisError::InvalidMaxComments(count));
    }
    Ok(count)
}
