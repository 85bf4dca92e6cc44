//! # citefetch
//!
//! Look up bibliographic metadata on the CrossRef REST API by DOI or by a
//! free-text query field, and render the matched work as a labeled text
//! block, a BibTeX entry, or JSON.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Work, Envelope, WorkQuery)
//! - [`client`]: The CrossRef HTTP client
//! - [`utils`]: Result selection, citation formatting, and display helpers
//! - [`config`]: Configuration management
//! - [`ui`]: Interactive prompting and candidate listing

pub mod client;
pub mod config;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use client::{CrossrefClient, LookupError};
pub use models::{Envelope, Message, Work, WorkQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
