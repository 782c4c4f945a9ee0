//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core only ever produces [`Error::InvalidConfiguration`].
/// The remaining variants belong to the console front-end (input parsing and
/// policy selection) and never reach algorithmic state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The frame count is below one (or does not fit a `usize`).
    ///
    /// Raised before any policy runs; no partial results are produced.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A token in a free-text reference string is not an integer.
    #[error("Invalid page reference '{token}': expected an integer")]
    InvalidReference { token: String },

    /// A policy name that does not match any known policy.
    #[error("Unknown policy '{0}' (expected one of: fifo, lru, optimal)")]
    UnknownPolicy(String),
}
