//! Core data models for CrossRef works and lookup queries.

mod query;
mod work;

pub use query::{QueryError, QueryField, WorkQuery};
pub use work::{Author, Envelope, Message, PartialDate, Work, WorkList};
