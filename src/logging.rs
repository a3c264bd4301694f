//! Log output for the server, written to stderr through `tracing-subscriber`.

use std::io::stderr;

use tracing_subscriber::EnvFilter;

use crate::errors::ServerError;

/// Install the global subscriber, filtering events with the given directives (e.g. `info` or
/// `bookshelf=debug,tower_http=info`).
///
/// # Errors
///
/// Returns [`ServerError::LogFilter`] if the directives do not parse and
/// [`ServerError::Logging`] if a global subscriber is already installed.
#[inline]
pub fn init(filter: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .try_init()
        .map_err(ServerError::Logging)
}
