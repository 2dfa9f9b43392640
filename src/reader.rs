//! Client for the hosted layout-parsing API.
//!
//! The API takes a PDF as a `multipart/form-data` upload (single part named
//! `file`) and answers with JSON:
//!
//! ```text
//! { "return_dict": { "result": { "blocks": [ { "tag": "header", ... }, ... ] } } }
//! ```
//!
//! All layout analysis happens server-side. This client only moves bytes and
//! deserialises the block list into a [`Document`].

use crate::config::ReaderConfig;
use crate::document::{Block, Document};
use crate::error::ReaderError;
use crate::input;
use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest slice of an error body kept in [`ReaderError::ApiStatus`].
const MAX_ERROR_BODY: usize = 512;

/// Reader bound to one parser endpoint.
///
/// Cheap to clone: the underlying HTTP client shares its connection pool.
#[derive(Debug, Clone)]
pub struct LayoutPdfReader {
    config: ReaderConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    return_dict: ReturnDict,
}

#[derive(Debug, Deserialize)]
struct ReturnDict {
    result: ParseResult,
}

#[derive(Debug, Deserialize)]
struct ParseResult {
    blocks: Vec<Block>,
}

impl LayoutPdfReader {
    /// Create a reader for `api_url` with default timeouts.
    pub fn new(api_url: &str) -> Result<Self, ReaderError> {
        let config = ReaderConfig::builder().api_url(api_url).build()?;
        Self::with_config(config)
    }

    pub fn with_config(config: ReaderConfig) -> Result<Self, ReaderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        debug!("Layout reader bound to {}", config.api_url);
        Ok(Self { config, client })
    }

    pub fn api_url(&self) -> &Url {
        &self.config.api_url
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Parse a PDF given as a local path or an HTTP/HTTPS URL.
    pub async fn read_pdf(&self, path_or_url: &str) -> Result<Document, ReaderError> {
        let resolved =
            input::resolve_input(path_or_url, self.config.download_timeout_secs).await?;
        self.read_pdf_bytes(&resolved.filename, resolved.contents)
            .await
    }

    /// Upload `contents` under `filename` and parse the returned layout.
    pub async fn read_pdf_bytes(
        &self,
        filename: &str,
        contents: Vec<u8>,
    ) -> Result<Document, ReaderError> {
        let start = Instant::now();
        info!(
            "Uploading '{}' ({} bytes) to {}",
            filename,
            contents.len(),
            self.config.api_url
        );

        let part = Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.api_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Parser API returned HTTP {}", status);
            return Err(ReaderError::ApiStatus {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let document = parse_response(&body)?;
        debug!(
            "Parsed {} blocks in {:?}",
            document.len(),
            start.elapsed()
        );
        Ok(document)
    }
}

/// Decode the parser's JSON body into a [`Document`].
pub(crate) fn parse_response(body: &str) -> Result<Document, ReaderError> {
    let parsed: ParseResponse = serde_json::from_str(body)
        .map_err(|e| ReaderError::MalformedResponse(e.to_string()))?;
    Ok(Document::from_blocks(parsed.return_dict.result.blocks))
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}\u{2026}", &s[..end])
}
