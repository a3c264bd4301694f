//! HTTP wiring: routes GraphQL requests to the schema and serves the `GraphiQL` explorer.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
    serve,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    errors::ServerError,
    schema::{LibrarySchema, build_schema},
    store::Store,
};

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Executes a GraphQL request.
async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(graphql_request.into_inner()).await.into()
}

/// Serves the `GraphiQL` explorer.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Builder function for the Router app. `GET` on the endpoint serves `GraphiQL` unless it is
/// disabled in the config.
#[inline]
pub fn build_app(store: Arc<Store>, config: &Config) -> Router {
    let endpoint = if config.graphiql() {
        post(graphql_handler).get(graphiql)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .with_state(build_schema(store))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on an already bound listener until the process is stopped.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the listener fails.
#[inline]
pub async fn serve_on(
    listener: TcpListener,
    store: Arc<Store>,
    config: &Config,
) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    info!(%addr, graphiql = config.graphiql(), "serving GraphQL on http://{addr}{GRAPHQL_PATH}");
    serve(listener, build_app(store, config)).await?;
    Ok(())
}

/// Seed a store, bind to the configured address and serve until the process is stopped.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the address cannot be bound or the listener fails.
#[inline]
pub async fn run(config: &Config) -> Result<(), ServerError> {
    let store = Arc::new(Store::seeded());
    info!(
        authors = store.author_count(),
        books = store.book_count(),
        "seeded store"
    );

    let listener = TcpListener::bind(config.socket_addr()).await?;
    serve_on(listener, store, config).await
}
