//! Runs the GraphQL API over a seeded in-memory store.

// Dependencies of the library, not used directly here.
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use clap as _;
use dotenvy as _;
use parking_lot as _;
use thiserror as _;
use tower_http as _;
use tracing_subscriber as _;

#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

use bookshelf::{Config, ServerError, logging, server};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::load();
    logging::init(&config.log)?;

    server::run(&config).await.inspect_err(|err| {
        error!(%err, "server stopped");
    })
}
