//! Top-level entry points used by the binary.

use crate::config::DEFAULT_API_URL;
use crate::error::ReaderError;
use crate::reader::LayoutPdfReader;
use tracing::debug;

/// Status string returned by [`read_pdf`].
pub const READ_PDF_STATUS: &str = "success";

/// Bind a layout reader to the hosted parser and report `"success"`.
///
/// The reader is constructed but no document is sent: `path` is not read,
/// fetched, or uploaded. Use [`LayoutPdfReader::read_pdf`] to actually parse.
///
/// # Errors
/// Only reader construction can fail, which the built-in endpoint does not
/// trigger.
pub fn read_pdf(path: &str) -> Result<String, ReaderError> {
    let reader = LayoutPdfReader::new(DEFAULT_API_URL)?;
    debug!(path, api_url = %reader.api_url(), "layout reader ready; document not sent");
    Ok(READ_PDF_STATUS.to_string())
}

pub fn greetings(name: &str) -> String {
    format!("Hello, {name}!")
}
