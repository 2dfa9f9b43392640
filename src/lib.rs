//! # layout-reader
//!
//! Client for a hosted PDF layout-parsing API, plus two small entry points.
//!
//! The parser runs remotely: a PDF is uploaded, and the API answers with a
//! flat list of layout blocks (headers, paragraphs, list items, tables) in
//! reading order. This crate uploads the bytes and models the response; it
//! never inspects PDF content itself.
//!
//! ## Overview
//!
//! ```text
//! read_pdf(path)      bind a reader to the hosted endpoint, return "success"
//! greetings(name)     "Hello, {name}!"
//!
//! LayoutPdfReader
//!  ├─ input     resolve local file or download URL to bytes
//!  ├─ reader    multipart upload, decode JSON blocks
//!  └─ document  sections / chunks / tables / text views
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use layout_reader::{LayoutPdfReader, DEFAULT_API_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reader = LayoutPdfReader::new(DEFAULT_API_URL)?;
//!     let doc = reader.read_pdf("https://arxiv.org/pdf/1910.13461.pdf").await?;
//!     for section in doc.sections() {
//!         println!("{}", section.title_chain().join(" > "));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `layout-reader` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod input;
pub mod reader;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ReaderConfig, ReaderConfigBuilder, DEFAULT_API_URL};
pub use document::{Block, BlockTag, Document, Section, TableCell, TableRow};
pub use entry::{greetings, read_pdf, READ_PDF_STATUS};
pub use error::ReaderError;
pub use reader::LayoutPdfReader;
