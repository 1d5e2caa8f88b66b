//! Error types for wikeddiff operations.

use thiserror::Error;

/// Errors that can occur while reading fragments or render settings.
///
/// Rendering itself never fails: every [`FragmentKind`](crate::FragmentKind)
/// has markup, so errors only come from the boundaries where fragments and
/// message tables enter the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown fragment type: {0:?}")]
    UnknownFragmentType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
