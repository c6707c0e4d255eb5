//! Crate-wide error type.
//!
//! Lookup misses and out-of-range positional edits are not errors; they come
//! back as `Option` or silently do nothing. This enum only covers the cases
//! a caller has to react to.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("no track titled '{0}'")]
    UnknownTitle(String),

    #[error("a track titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("corrupt data file at line {line}: {reason}")]
    PersistenceCorrupt { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
