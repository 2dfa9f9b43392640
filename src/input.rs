//! Input resolution: turn a user-supplied path or URL into upload bytes.
//!
//! The parser API takes the PDF as a multipart upload, so both local files
//! and remote URLs end up as an in-memory buffer plus the filename the
//! upload part is labelled with. No content checks happen here; the parser
//! decides whether the bytes are a PDF.

use crate::error::ReaderError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Fallback filename when a URL has no usable last path segment.
const DOWNLOADED_FILENAME: &str = "downloaded.pdf";

/// Fallback filename when a local path has no file-name component.
const LOCAL_FILENAME: &str = "document.pdf";

/// A document ready to be uploaded.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    /// Filename sent with the multipart part.
    pub filename: String,
    /// Raw document bytes.
    pub contents: Vec<u8>,
}

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the input string to upload bytes.
///
/// URLs are downloaded with `timeout_secs`; anything else is read from disk.
pub async fn resolve_input(input: &str, timeout_secs: u64) -> Result<ResolvedInput, ReaderError> {
    if is_url(input) {
        download_url(input, timeout_secs).await
    } else {
        read_local(input).await
    }
}

async fn read_local(path_str: &str) -> Result<ResolvedInput, ReaderError> {
    let path = PathBuf::from(path_str);

    let contents = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(match e.kind() {
                ErrorKind::NotFound => ReaderError::FileNotFound { path },
                ErrorKind::PermissionDenied => ReaderError::PermissionDenied { path },
                _ => ReaderError::ReadFailed { path, source: e },
            });
        }
    };

    debug!("Read local PDF: {} ({} bytes)", path.display(), contents.len());
    Ok(ResolvedInput {
        filename: local_filename(&path),
        contents,
    })
}

async fn download_url(url: &str, timeout_secs: u64) -> Result<ResolvedInput, ReaderError> {
    info!("Downloading PDF from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ReaderError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| download_error(url, timeout_secs, e))?;

    if !response.status().is_success() {
        return Err(ReaderError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| download_error(url, timeout_secs, e))?;

    info!("Downloaded {} bytes", bytes.len());

    Ok(ResolvedInput {
        filename: url_filename(url),
        contents: bytes.to_vec(),
    })
}

fn download_error(url: &str, timeout_secs: u64, e: reqwest::Error) -> ReaderError {
    if e.is_timeout() {
        ReaderError::DownloadTimeout {
            url: url.to_string(),
            secs: timeout_secs,
        }
    } else {
        ReaderError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}

/// Last URL path segment when it looks like a filename, else a fixed name.
fn url_filename(url: &str) -> String {
    if let Ok(parsed) = reqwest::Url::parse(url) {
        if let Some(mut segments) = parsed.path_segments() {
            if let Some(last) = segments.next_back() {
                if !last.is_empty() && last.contains('.') {
                    return last.to_string();
                }
            }
        }
    }

    DOWNLOADED_FILENAME.to_string()
}

fn local_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| LOCAL_FILENAME.to_string())
}
