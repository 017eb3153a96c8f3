//! Client for the remote heading-extraction service.
//!
//! The service accepts a single PDF and answers with a flat outline of
//! detected headings. This crate wraps that exchange:
//!
//! - [`ExtractionClient`] is the seam the session controller depends on, so
//!   tests can substitute a fake.
//! - [`HttpExtractionClient`] is the `reqwest` implementation, configured by
//!   an explicit [`ClientConfig`].
//! - [`interpret_response`] turns a raw status and body into a result or an
//!   [`ExtractionError`] without any I/O.
//!
//! # Example
//!
//! ```no_run
//! use hx_client::{ClientConfig, ExtractionClient, HttpExtractionClient};
//! use hx_model::DocumentFile;
//!
//! async fn run(file: DocumentFile) -> hx_client::Result<()> {
//!     let client = HttpExtractionClient::new(ClientConfig::default())?;
//!     let result = client.extract(&file).await?;
//!     println!("{} headings", result.total_headings);
//!     Ok(())
//! }
//! ```
//!
//! One request at a time is expected per session. Nothing here retries or
//! enforces a timeout; that is left to the transport.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::{ExtractionClient, HttpExtractionClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, EXTRACT_PATH, HEALTH_PATH};
pub use error::{ExtractionError, FALLBACK_MESSAGE, Result};
pub use response::{error_detail, interpret_response};
