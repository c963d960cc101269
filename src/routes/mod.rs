// src/routes/mod.rs
pub mod graphql;

use crate::state::SharedState;
use axum::{Router, body::Body, http::Request, routing::get};
use graphql::{GRAPHQL_PATH, graphql_get_handler, graphql_handler};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get_handler).post(graphql_handler))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %req.method(),
                    path = %req.uri().path(),
                )
            }),
        )
}
