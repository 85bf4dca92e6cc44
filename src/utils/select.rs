//! Candidate selection: reduce a response message to a single work.

use crate::models::{Message, Work};

/// Errors raised while resolving an ambiguous candidate list
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The entered choice was not a positive integer
    #[error("invalid selection {0:?}: expected a number from the list")]
    InvalidChoice(String),

    /// The entered choice was outside the candidate list
    #[error("selection {choice} is out of range (1-{count})")]
    OutOfRange { choice: usize, count: usize },

    /// Reading the choice from the terminal failed
    #[error("failed to read selection: {0}")]
    Io(#[from] std::io::Error),
}

/// Reduce a response message to at most one work.
///
/// - A single-record message is returned directly.
/// - A one-element candidate list is returned without consulting the
///   chooser.
/// - A longer list is put to the `chooser`, which returns the user's
///   1-based pick; the matching element is returned. A zero or
///   out-of-range pick is a fatal [`SelectError`], not recovered.
/// - An empty candidate list yields `None`; the caller treats that as
///   "no usable record".
pub fn resolve<F>(message: Message, chooser: F) -> Result<Option<Work>, SelectError>
where
    F: FnOnce(&[Work]) -> Result<usize, SelectError>,
{
    match message {
        Message::Single(work) => Ok(Some(*work)),
        Message::List(list) => {
            let mut items = list.items;
            match items.len() {
                0 => Ok(None),
                1 => Ok(items.pop()),
                count => {
                    let choice = chooser(&items)?;
                    let index = choice
                        .checked_sub(1)
                        .filter(|i| *i < count)
                        .ok_or(SelectError::OutOfRange { choice, count })?;
                    Ok(Some(items.swap_remove(index)))
                }
            }
        }
    }
}
