// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::{ApiKey, Settings};
use crate::schema::{GatewaySchema, build_schema};
use crate::services::{chat_client::ChatClient, edge_cache::EdgeCache, species_client::SpeciesClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub schema: GatewaySchema,
    pub chat_api_key: Option<ApiKey>,
    pub species_cache: EdgeCache,
}

impl AppState {
    /// Wires both upstream clients over one shared connection pool.
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache = EdgeCache::new(settings.species_cache_ttl);
        let species = SpeciesClient::new(
            http.clone(),
            settings.species_api_base_url.clone(),
            cache.clone(),
        );
        let chat = ChatClient::new(http, settings.chat_api_base_url.clone());

        Ok(Self {
            schema: build_schema(species, chat),
            chat_api_key: settings.chat_api_key.clone(),
            species_cache: cache,
        })
    }
}
