//! # Error Types
//!
//! Run-level error taxonomy. Input errors and remote API failures abort the
//! run with no partial output; empty results are not errors and are handled
//! by the presentation layer.

use crate::api::YouTubeError;
use thiserror::Error;

/// Errors that abort an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("could not extract a video id from the supplied URL")]
    InvalidUrl,

    #[error("no API key supplied; pass --api-key or set YOUTUBE_API_KEY")]
    MissingCredential,

    #[error("comment count {0} is outside the supported range (50-1000 in steps of 50)")]
    InvalidMaxComments(usize),

    #[error(transparent)]
    Api(#[from] YouTubeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert!(AnalysisError::InvalidUrl.to_string().contains("video id"));
        assert!(AnalysisError::MissingCredential
            .to_string()
            .contains("YOUTUBE_API_KEY"));
        assert!(AnalysisError::InvalidMaxComments(42)
            .to_string()
            .contains("42"));
    }

    #[test]
    fn test_api_error_passthrough() {
        let api = YouTubeError::ApiError {
            code: 403,
            message: "quota exceeded".to_string(),
        };
        let wrapped = AnalysisError::from(api);
        assert!(wrapped.to_string().contains("quota exceeded"));
    }
}
