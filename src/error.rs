// src/error.rs
use async_graphql::{Error as GraphQLError, ErrorExtensions};
use thiserror::Error;

/// Failures a resolver can hit. Each one becomes a field-level GraphQL error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("upstream unavailable: {status}")]
    UpstreamUnavailable { status: String },

    #[error("upstream call failed: {0}")]
    UpstreamCallFailed(String),

    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl GatewayError {
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            GatewayError::UpstreamCallFailed(_) => "UPSTREAM_CALL_FAILED",
            GatewayError::ConfigurationError(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest errors carry the URL but never request headers.
        GatewayError::UpstreamCallFailed(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::UpstreamCallFailed(err.to_string())
    }
}

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> GraphQLError {
        GraphQLError::new(self.to_string()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}
