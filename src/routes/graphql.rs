use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Query, Request, State},
    response::{Html, IntoResponse, Response},
};

use crate::{schema::RequestContext, state::SharedState};

pub const GRAPHQL_PATH: &str = "/graphql";

pub async fn graphql_handler(State(state): State<SharedState>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&state, req).await
}

// GET without a `query` parameter opens the explorer; with one, it is a
// regular GraphQL-over-HTTP GET request. Unparsable query strings go to the
// GraphQL extractor so they are rejected the usual way.
pub async fn graphql_get_handler(State(state): State<SharedState>, req: Request) -> Response {
    let has_operation = Query::<HashMap<String, String>>::try_from_uri(req.uri())
        .map(|Query(params)| params.contains_key("query"))
        .unwrap_or(true);
    if !has_operation {
        return graphiql().await.into_response();
    }

    match <GraphQLRequest>::from_request(req, &state).await {
        Ok(gql) => execute(&state, gql).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

pub async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .title("Species Gateway")
            .finish(),
    )
}

async fn execute(state: &SharedState, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner().data(RequestContext {
        chat_api_key: state.chat_api_key.clone(),
    });
    state.schema.execute(request).await.into()
}
