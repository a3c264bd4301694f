//! A GraphQL API over an in-memory store of authors and books.
//!
//! The [`Store`] owns both collections and answers lookups and appends. The [`schema`] exposes
//! it as GraphQL, following the relation from a book to its author and from an author to their
//! books. The [`server`] serves that schema over HTTP.

// Only used by the integration tests.
#[cfg(test)]
use reqwest as _;

pub mod config;
pub use config::Config;

pub mod errors;
pub use errors::{ServerError, StoreError};

pub mod logging;

pub mod model;
pub use model::{Author, Book};

pub mod schema;
pub use schema::{LibrarySchema, build_schema};

pub mod server;

pub mod store;
pub use store::Store;
