use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::{info, warn};

use super::RequestContext;
use super::types::Species;
use crate::error::GatewayError;
use crate::services::{chat_client::ChatClient, species_client::SpeciesClient};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up a species by its upstream identifier.
    #[graphql(cache_control(max_age = 50))]
    async fn species(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Species>> {
        let client = ctx.data::<SpeciesClient>()?;
        info!(species_id = %id.as_str(), "resolving species");

        match client.fetch_species(id.as_str()).await {
            Ok(species) => Ok(Some(species)),
            Err(err) => {
                warn!(species_id = %id.as_str(), error = %err, "species lookup failed");
                Err(err.extend())
            }
        }
    }

    /// Ask the chat assistant a single question.
    #[graphql(cache_control(private))]
    async fn ask_assistant(&self, ctx: &Context<'_>, prompt: String) -> Result<Option<String>> {
        let client = ctx.data::<ChatClient>()?;
        let api_key = ctx
            .data_opt::<RequestContext>()
            .and_then(|request| request.chat_api_key.as_ref())
            .ok_or_else(|| {
                GatewayError::ConfigurationError("chat API key is not configured".to_string())
                    .extend()
            })?;

        info!(prompt_chars = prompt.chars().count(), "resolving askAssistant");

        match client.ask(api_key, &prompt).await {
            Ok(reply) => Ok(Some(reply)),
            Err(err) => {
                warn!(error = %err, "chat completion failed");
                Err(err.extend())
            }
        }
    }
}
