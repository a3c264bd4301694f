//! Errors that may occur while starting or running the server, and the one way an append to
//! the store can fail.

use std::{error::Error, io::Error as IoError};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;

/// Convenience alias.
type BoxError = Box<dyn Error + Send + Sync>;

/// Errors that may occur when appending to the [`Store`](crate::store::Store). Lookups never
/// fail.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// Every identifier up to `i32::MAX` has been handed out for this collection.
    #[error("no identifiers left for new {collection}")]
    IdsExhausted {
        /// The collection that is full, e.g. `"books"`.
        collection: &'static str,
    },
}

/// Errors that may occur when starting or running the server.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    /// The configured log filter is not a valid set of directives.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] ParseError),
    /// A global subscriber was already installed, or installing it failed otherwise.
    #[error("failed to install the log subscriber: {0}")]
    Logging(#[source] BoxError),
    /// Binding the listener or serving a connection failed.
    #[error(transparent)]
    Io(#[from] IoError),
}
