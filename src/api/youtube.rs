//! # YouTube API Client
//!
//! Client for fetching top-level video comments through the YouTube Data API
//! `commentThreads` endpoint. Pages are walked with a continuation token
//! until the requested comment count is reached or no further page exists.

use crate::video::VideoId;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// YouTube Data API base URL
const YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum comments per page accepted by the API
const MAX_PAGE_SIZE: usize = 100;

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when talking to the YouTube API
#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {message} (code: {code})")]
    ApiError { code: i64, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// commentThreads.list response wrapper
#[derive(Debug, Deserialize)]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
struct CommentSnippet {
    #[serde(rename = "textDisplay")]
    text_display: String,
}

/// Error body returned by the API on non-success status codes
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: i64,
    message: String,
}

/// YouTube Data API client
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a new client with the given API credential.
    ///
    /// The credential is always injected by the caller; there is no bundled
    /// default key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: YOUTUBE_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch up to `max_comments` top-level comments for a video.
    ///
    /// Walks `commentThreads` pages with `maxResults = min(100, remaining)`
    /// until the requested count is reached or the API stops returning a
    /// continuation token. The page walk is bounded: it issues at most
    /// `ceil(max_comments / 100) + 1` requests.
    ///
    /// Any transport or API error is fatal for the run; no retry is
    /// attempted and no partial result is returned.
    pub async fn fetch_comments(
        &self,
        video_id: &VideoId,
        max_comments: usize,
    ) -> Result<Vec<String>, YouTubeError> {
        let mut comments: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let page_budget = max_comments.div_ceil(MAX_PAGE_SIZE) + 1;
        let mut pages = 0;

        while comments.len() < max_comments && pages < page_budget {
            let page_size = page_size(max_comments - comments.len()).to_string();
            let mut request = self
                .client
                .get(format!("{}/commentThreads", self.base_url))
                .query(&[
                    ("part", "snippet"),
                    ("videoId", video_id.as_str()),
                    ("maxResults", page_size.as_str()),
                    ("textFormat", "plainText"),
                    ("key", self.api_key.as_str()),
                ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await?;
                return Err(parse_api_error(status, &body));
            }

            let page: CommentThreadsResponse = response.json().await?;
            pages += 1;

            comments.extend(
                page.items
                    .into_iter()
                    .map(|item| item.snippet.top_level_comment.snippet.text_display),
            );

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        comments.truncate(max_comments);
        Ok(comments)
    }
}

/// Page size for the next request given how many comments are still wanted
fn page_size(remaining: usize) -> usize {
    remaining.min(MAX_PAGE_SIZE)
}

/// Map a non-success HTTP response to an error value
fn parse_api_error(status: StatusCode, body: &str) -> YouTubeError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => YouTubeError::ApiError {
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => YouTubeError::InvalidResponse(format!(
            "HTTP {} with unrecognized error body",
            status.as_u16()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct MockApi {
        base_url: String,
        requests: Arc<AtomicUsize>,
        request_lines: Arc<Mutex<Vec<String>>>,
    }

    /// Serve the given JSON bodies one per request, recording request lines.
    async fn serve_pages(pages: Vec<String>) -> MockApi {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(AtomicUsize::new(0));
        let request_lines = Arc::new(Mutex::new(Vec::new()));
        let counter = Arc::clone(&requests);
        let lines = Arc::clone(&request_lines);

        tokio::spawn(async move {
            for body in pages {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                if let Some(line) = String::from_utf8_lossy(&head).lines().next() {
                    lines.lock().unwrap().push(line.to_string());
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        MockApi {
            base_url: format!("http://{}", addr),
            requests,
            request_lines,
        }
    }

    fn page_json(comments: &[&str], next_token: Option<&str>) -> String {
        let items: Vec<String> = comments
            .iter()
            .map(|text| {
                format!(
                    r#"{{"snippet":{{"topLevelComment":{{"snippet":{{"textDisplay":"{text}"}}}}}}}}"#
                )
            })
            .collect();
        match next_token {
            Some(token) => format!(
                r#"{{"items":[{}],"nextPageToken":"{}"}}"#,
                items.join(","),
                token
            ),
            None => format!(r#"{{"items":[{}]}}"#, items.join(",")),
        }
    }

    fn test_video() -> VideoId {
        VideoId::from_url("v=dQw4w9WgXcQ").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_stops_when_no_next_page_token() {
        let server = serve_pages(vec![page_json(&["one", "two", "three"], None)]).await;
        let client = YouTubeClient::new("test-key").with_base_url(server.base_url.clone());

        let comments = client.fetch_comments(&test_video(), 50).await.unwrap();
        assert_eq!(comments, vec!["one", "two", "three"]);
        assert_eq!(server.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_truncates_over_delivering_page() {
        // page carries more comments than requested plus a continuation token
        let page = page_json(&["a", "b", "c", "d", "e"], Some("NEXT"));
        let server = serve_pages(vec![page]).await;
        let client = YouTubeClient::new("test-key").with_base_url(server.base_url.clone());

        let comments = client.fetch_comments(&test_video(), 3).await.unwrap();
        assert_eq!(comments, vec!["a", "b", "c"]);
        assert_eq!(server.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_walks_pages_up_to_maximum() {
        let full_page: Vec<String> = (0..100).map(|i| format!("c{i}")).collect();
        let refs: Vec<&str> = full_page.iter().map(String::as_str).collect();
        let server = serve_pages(vec![
            page_json(&refs, Some("PAGE2")),
            page_json(&refs, None),
        ])
        .await;
        let client = YouTubeClient::new("test-key").with_base_url(server.base_url.clone());

        let comments = client.fetch_comments(&test_video(), 150).await.unwrap();
        assert_eq!(comments.len(), 150);
        assert_eq!(server.requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_request_count_bounded_with_endless_tokens() {
        // pages that keep advertising a continuation while delivering little
        let page = page_json(&["only"], Some("AGAIN"));
        let server = serve_pages(vec![page; 10]).await;
        let client = YouTubeClient::new("test-key").with_base_url(server.base_url.clone());

        let comments = client.fetch_comments(&test_video(), 200).await.unwrap();
        assert!(comments.len() <= 200);
        assert!(server.requests.load(Ordering::SeqCst) <= 200_usize.div_ceil(MAX_PAGE_SIZE) + 1);
    }

    #[tokio::test]
    async fn test_query_parameters_percent_encoded() {
        let server = serve_pages(vec![page_json(&[], None)]).await;
        let client = YouTubeClient::new("a key&more").with_base_url(server.base_url.clone());

        client.fetch_comments(&test_video(), 50).await.unwrap();

        let lines = server.request_lines.lock().unwrap();
        assert!(
            lines[0].contains("key=a+key%26more"),
            "unexpected request line: {}",
            lines[0]
        );
        assert!(lines[0].contains("maxResults=50"));
    }

    #[test]
    fn test_page_size_capped() {
        assert_eq!(page_size(250), 100);
        assert_eq!(page_size(100), 100);
        assert_eq!(page_size(50), 50);
        assert_eq!(page_size(1), 1);
    }

    #[test]
    fn test_page_budget_bound() {
        for max in [50usize, 100, 150, 200, 1000] {
            let budget = max.div_ceil(MAX_PAGE_SIZE) + 1;
            assert!(budget <= max / MAX_PAGE_SIZE + 2);
        }
        assert_eq!(50_usize.div_ceil(MAX_PAGE_SIZE) + 1, 2);
        assert_eq!(1000_usize.div_ceil(MAX_PAGE_SIZE) + 1, 11);
    }

    #[test]
    fn test_parse_comment_threads_response() {
        let json = r#"{
            "items": [
                {"snippet": {"topLevelComment": {"snippet": {"textDisplay": "Great video!"}}}},
                {"snippet": {"topLevelComment": {"snippet": {"textDisplay": "First"}}}}
            ],
            "nextPageToken": "CAoQAA"
        }"#;
        let page: CommentThreadsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.items[0].snippet.top_level_comment.snippet.text_display,
            "Great video!"
        );
        assert_eq!(page.next_page_token.as_deref(), Some("CAoQAA"));
    }

    #[test]
    fn test_parse_last_page() {
        let json = r#"{"items": []}"#;
        let page: CommentThreadsResponse = serde_json::from_str(json).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_parse_api_error_body() {
        let body = r#"{"error": {"code": 403, "message": "The request is missing a valid API key."}}"#;
        match parse_api_error(StatusCode::FORBIDDEN, body) {
            YouTubeError::ApiError { code, message } => {
                assert_eq!(code, 403);
                assert!(message.contains("API key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unrecognized_error_body() {
        match parse_api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>") {
            YouTubeError::InvalidResponse(msg) => assert!(msg.contains("502")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
