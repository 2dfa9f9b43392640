//! Error types for the layout-reader library.
//!
//! Every fallible operation returns [`ReaderError`]. The variants are grouped
//! by where the failure happens: building the reader, resolving the input
//! document, or talking to the parsing API. Nothing is retried; callers see
//! the first failure as-is.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the layout-reader library.
#[derive(Debug, Error)]
pub enum ReaderError {
    // ── Config errors ─────────────────────────────────────────────────────
    /// The parser API URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid parser API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The path exists but could not be read as a file (a directory, an I/O fault).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'\nIncrease --download-timeout.")]
    DownloadTimeout { url: String, secs: u64 },

    // ── API errors ────────────────────────────────────────────────────────
    /// Transport-level failure talking to the parser API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The parser API answered with a non-success status.
    #[error("Parser API returned HTTP {status}: {body}")]
    ApiStatus { status: u16, body: String },

    /// The parser API answered 2xx but the body is not the expected layout JSON.
    #[error("Malformed parser response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_api_url_display() {
        let e = ReaderError::InvalidApiUrl {
            url: "ftp://x".into(),
            reason: "unsupported scheme 'ftp'".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("ftp://x"), "got: {msg}");
        assert!(msg.contains("unsupported scheme"), "got: {msg}");
    }

    #[test]
    fn api_status_display() {
        let e = ReaderError::ApiStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(e.to_string().contains("502"));
        assert!(e.to_string().contains("bad gateway"));
    }

    #[test]
    fn download_timeout_display() {
        let e = ReaderError::DownloadTimeout {
            url: "https://example.com/a.pdf".into(),
            secs: 7,
        };
        assert!(e.to_string().contains("7s"));
    }

    #[test]
    fn read_failed_keeps_io_source() {
        use std::error::Error as _;
        let e = ReaderError::ReadFailed {
            path: PathBuf::from("/tmp"),
            source: std::io::Error::other("is a directory"),
        };
        assert!(e.to_string().contains("/tmp"));
        assert!(e.source().is_some());
    }

    #[test]
    fn file_not_found_display() {
        let e = ReaderError::FileNotFound {
            path: PathBuf::from("/nope/doc.pdf"),
        };
        assert!(e.to_string().contains("/nope/doc.pdf"));
    }
}
