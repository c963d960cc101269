// src/services/species_client.rs
use std::sync::Arc;

use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::schema::types::Species;
use crate::services::edge_cache::{CachedResponse, EdgeCache};

#[derive(Debug, Clone)]
pub struct SpeciesClient {
    http: Client,
    base_url: Url,
    cache: EdgeCache,
}

impl SpeciesClient {
    pub fn new(http: Client, base_url: Url, cache: EdgeCache) -> Self {
        Self { http, base_url, cache }
    }

    pub fn cache(&self) -> &EdgeCache {
        &self.cache
    }

    /// `{base}/api/v2/pokemon/{id}` with `id` as one encoded path segment.
    pub fn species_url(&self, id: &str) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::UpstreamCallFailed(format!(
                    "species base url cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["api", "v2", "pokemon", id.trim()]);
        Ok(url)
    }

    pub async fn fetch_species(&self, id: &str) -> Result<Species, GatewayError> {
        let url = self.species_url(id)?;
        let response = self.fetch_cached(url).await?;

        if !response.is_success() {
            warn!(species_id = %id, status = response.status, "species upstream returned an error status");
            return Err(GatewayError::UpstreamUnavailable {
                status: response.status_text,
            });
        }

        let species: Species = serde_json::from_slice(&response.body)?;
        Ok(species)
    }

    async fn fetch_cached(&self, url: Url) -> Result<CachedResponse, GatewayError> {
        let key = url.to_string();
        if let Some(hit) = self.cache.get(&key) {
            debug!(url = %key, status = hit.status, "edge cache hit");
            return Ok(hit);
        }

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        let body = response.bytes().await?;
        info!(url = %key, status = status.as_u16(), bytes = body.len(), "species upstream responded");

        let recorded = CachedResponse {
            status: status.as_u16(),
            status_text,
            body: Arc::from(body.as_ref()),
        };
        self.cache.insert(key, recorded.clone());
        Ok(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client(base: &str) -> SpeciesClient {
        SpeciesClient::new(
            Client::new(),
            Url::parse(base).unwrap(),
            EdgeCache::new(Duration::from_secs(50)),
        )
    }

    #[test]
    fn builds_upstream_path() {
        let c = client("https://pokeapi.co");
        assert_eq!(
            c.species_url("1").unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/1"
        );
    }

    #[test]
    fn keeps_base_path_and_encodes_id() {
        let c = client("http://localhost:9000/proxy/");
        assert_eq!(
            c.species_url(" 1/2 ").unwrap().as_str(),
            "http://localhost:9000/proxy/api/v2/pokemon/1%2F2"
        );
    }
}
