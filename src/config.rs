// src/config.rs
use std::{fmt, net::SocketAddr, time::Duration};

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
pub const DEFAULT_SPECIES_API_BASE_URL: &str = "https://pokeapi.co";
pub const DEFAULT_CHAT_API_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_SPECIES_CACHE_TTL_SECS: u64 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a valid number of seconds: {value}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Secret credential for the chat upstream. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Blank keys count as "not configured".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub species_api_base_url: Url,
    pub chat_api_base_url: Url,
    pub chat_api_key: Option<ApiKey>,
    pub species_cache_ttl: Duration,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = {
            let value = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
            value
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { var: "BIND_ADDR", value })?
        };

        let species_api_base_url = parse_url(
            "SPECIES_API_BASE_URL",
            lookup("SPECIES_API_BASE_URL"),
            DEFAULT_SPECIES_API_BASE_URL,
        )?;
        let chat_api_base_url = parse_url(
            "CHAT_API_BASE_URL",
            lookup("CHAT_API_BASE_URL"),
            DEFAULT_CHAT_API_BASE_URL,
        )?;

        let species_cache_ttl = match lookup("SPECIES_CACHE_TTL_SECS") {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeconds {
                    var: "SPECIES_CACHE_TTL_SECS",
                    value,
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_SPECIES_CACHE_TTL_SECS),
        };

        Ok(Self {
            bind_addr,
            species_api_base_url,
            chat_api_base_url,
            chat_api_key: lookup("CHAT_API_KEY").and_then(ApiKey::new),
            species_cache_ttl,
        })
    }
}

fn parse_url(var: &'static str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    Url::parse(value.trim()).map_err(|_| ConfigError::InvalidUrl { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind_addr.port(), 8787);
        assert_eq!(settings.species_api_base_url.as_str(), "https://pokeapi.co/");
        assert_eq!(settings.chat_api_base_url.as_str(), "https://api.deepseek.com/");
        assert_eq!(settings.species_cache_ttl, Duration::from_secs(50));
        assert!(settings.chat_api_key.is_none());
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        let settings = Settings::from_lookup(lookup_from(&[("CHAT_API_KEY", "   ")])).unwrap();
        assert!(settings.chat_api_key.is_none());
    }

    #[test]
    fn key_is_redacted_in_debug_output() {
        let settings = Settings::from_lookup(lookup_from(&[("CHAT_API_KEY", "sk-live-123")])).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("sk-live-123"));
        assert_eq!(settings.chat_api_key.unwrap().expose(), "sk-live-123");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")])),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[("CHAT_API_BASE_URL", "not a url")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[("SPECIES_CACHE_TTL_SECS", "-1")])),
            Err(ConfigError::InvalidSeconds { .. })
        ));
    }
}
