//! Utility modules supporting the lookup pipeline.
//!
//! - [`resolve`]: Reduce a response message to a single work, prompting
//!   through an injected chooser when the candidate list is ambiguous
//! - [`format_block`] / [`format_bibtex`] / [`format_json`]: Render a work
//!   as a labeled text block, a BibTeX entry, or JSON
//! - [`truncate_with_ellipsis`]: Width-aware truncation for candidate
//!   listings

mod cite;
mod display;
mod select;

pub use cite::{display_authors, format_bibtex, format_block, format_json, WorkMetadata};
pub use display::{terminal_width, truncate_with_ellipsis};
pub use select::{resolve, SelectError};
