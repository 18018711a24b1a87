//! GraphQL API for Galactic Battle.
//!
//! Exposes the `people` and `starships` collections as read-only queries:
//! paginated listing, lookup by id and random pick.

mod config;
mod error;
mod schema;
mod types;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post_service};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use config::ServerConfig;
pub use error::{graphql_error, join_error, ServerError, ServerResult};
pub use schema::{build_schema, export_schema_sdl, AppSchema, AppState, QueryRoot};
pub use types::{Paginated, PaginationInfo, PaginationInput, PersonObject, RequestedPage, StarshipObject};

/// Path the GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Build the HTTP router: the GraphQL endpoint (plus GraphiQL on GET when
/// the playground is enabled) behind the configured CORS policy.
pub fn build_router(schema: AppSchema, config: &ServerConfig) -> ServerResult<Router> {
    let endpoint = if config.playground {
        get(graphiql).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    Ok(Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .layer(cors_layer(&config.cors_origins)?))
}

fn cors_layer(origins: &[String]) -> ServerResult<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, ACCEPT, AUTHORIZATION]))
}
