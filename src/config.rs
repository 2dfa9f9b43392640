//! Configuration for the layout reader.
//!
//! [`ReaderConfig`] holds the parser endpoint and the two timeouts the client
//! uses. It is built through [`ReaderConfigBuilder`], whose `build()` parses
//! and checks the endpoint so a [`crate::LayoutPdfReader`] never holds a URL
//! it cannot post to.

use crate::error::ReaderError;
use reqwest::Url;

/// Hosted parser endpoint the reader talks to unless told otherwise.
pub const DEFAULT_API_URL: &str =
    "https://readers.llmsherpa.com/api/document/developer/parseDocument?renderFormat=all";

/// Configuration for a [`crate::LayoutPdfReader`].
///
/// # Example
/// ```rust
/// use layout_reader::ReaderConfig;
///
/// let config = ReaderConfig::builder()
///     .api_url("http://localhost:5010/api/parseDocument?renderFormat=all")
///     .api_timeout_secs(60)
///     .build()
///     .unwrap();
/// assert_eq!(config.api_url.host_str(), Some("localhost"));
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Parser endpoint. Default: [`DEFAULT_API_URL`].
    pub api_url: Url,

    /// Timeout for fetching URL inputs, in seconds. Default: 120.
    pub download_timeout_secs: u64,

    /// Timeout for the parse request, in seconds. Default: 300.
    ///
    /// Layout parsing of a long document runs server-side before the
    /// response starts, so this is much larger than the download timeout.
    pub api_timeout_secs: u64,
}

impl ReaderConfig {
    /// Create a new builder for `ReaderConfig`.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder {
            api_url: DEFAULT_API_URL.to_string(),
            download_timeout_secs: 120,
            api_timeout_secs: 300,
        }
    }
}

/// Builder for [`ReaderConfig`].
#[derive(Debug)]
pub struct ReaderConfigBuilder {
    api_url: String,
    download_timeout_secs: u64,
    api_timeout_secs: u64,
}

impl ReaderConfigBuilder {
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.download_timeout_secs = secs;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.api_timeout_secs = secs;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ReaderConfig, ReaderError> {
        let api_url = parse_api_url(&self.api_url)?;
        if self.download_timeout_secs == 0 {
            return Err(ReaderError::InvalidConfig(
                "Download timeout must be ≥ 1s".into(),
            ));
        }
        if self.api_timeout_secs == 0 {
            return Err(ReaderError::InvalidConfig("API timeout must be ≥ 1s".into()));
        }
        Ok(ReaderConfig {
            api_url,
            download_timeout_secs: self.download_timeout_secs,
            api_timeout_secs: self.api_timeout_secs,
        })
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ReaderError> {
    let url = Url::parse(raw).map_err(|e| ReaderError::InvalidApiUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ReaderError::InvalidApiUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReaderConfig::builder().build().unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.download_timeout_secs, 120);
        assert_eq!(config.api_timeout_secs, 300);
    }

    #[test]
    fn default_url_keeps_render_format_query() {
        let config = ReaderConfig::builder().build().unwrap();
        let pairs: Vec<(String, String)> = config
            .api_url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("renderFormat".to_string(), "all".to_string())]);
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ReaderConfig::builder().api_url("ftp://x").build().unwrap_err();
        assert!(matches!(err, ReaderError::InvalidApiUrl { .. }), "got: {err}");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = ReaderConfig::builder()
            .api_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ReaderError::InvalidApiUrl { .. }));
    }

    #[test]
    fn rejects_zero_timeouts() {
        assert!(matches!(
            ReaderConfig::builder().api_timeout_secs(0).build(),
            Err(ReaderError::InvalidConfig(_))
        ));
        assert!(matches!(
            ReaderConfig::builder().download_timeout_secs(0).build(),
            Err(ReaderError::InvalidConfig(_))
        ));
    }
}
