//! GraphQL schema for the gateway.
//!
//! [`QueryRoot`] exposes two independent fields, `species` and `askAssistant`,
//! each backed by one upstream client. The schema is built once at startup and
//! shared read-only between requests; per-request data travels in
//! [`RequestContext`].

mod query;
pub mod types;

pub use query::QueryRoot;
pub use types::{Species, SpeciesSprites};

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::config::ApiKey;
use crate::services::{chat_client::ChatClient, species_client::SpeciesClient};

pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Data attached to a single GraphQL execution.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub chat_api_key: Option<ApiKey>,
}

pub fn build_schema(species: SpeciesClient, chat: ChatClient) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(species)
        .data(chat)
        .finish()
}
