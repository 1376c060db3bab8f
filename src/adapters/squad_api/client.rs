//! Squad API Client
//!
//! HTTP client for the squad generation service.
//! One POST per submission; no retries and no client-side cancellation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::SquadConstraints;
use crate::ports::squad_service::{GatewayError, SquadServicePort};
use crate::ports::wire::{WireSquadRequest, WireSquadResult};

/// Path of the generate-squad endpoint on the service
pub const DEFAULT_GENERATE_PATH: &str = "/api/v1/fpl/squad/generate";

/// Squad API client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SquadApiConfig {
    /// Base URL of the squad service
    pub base_url: String,
    /// Path of the generate endpoint, appended to `base_url`
    pub generate_path: String,
    /// Request timeout; `None` waits for the service indefinitely
    pub timeout: Option<Duration>,
}

impl Default for SquadApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            generate_path: DEFAULT_GENERATE_PATH.to_string(),
            timeout: None,
        }
    }
}

/// Squad generation service client
#[derive(Debug, Clone)]
pub struct SquadApiClient {
    config: SquadApiConfig,
    http: Client,
}

impl SquadApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, GatewayError> {
        Self::with_config(SquadApiConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: SquadApiConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Full URL of the generate endpoint
    pub fn generate_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.generate_path
        )
    }

    /// POST the request body and decode the squad
    pub async fn generate_squad(
        &self,
        request: &WireSquadRequest,
    ) -> Result<WireSquadResult, GatewayError> {
        let url = self.generate_url();
        tracing::debug!(
            "POST {} budget={} formation={} must_have={:?} excluded={:?}",
            url,
            request.budget,
            request.formation,
            request.must_have_players,
            request.excluded_players
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Reject non-success statuses, then deserialize the body
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    pub fn config(&self) -> &SquadApiConfig {
        &self.config
    }
}

#[async_trait]
impl SquadServicePort for SquadApiClient {
    async fn submit(&self, constraints: &SquadConstraints) -> Result<WireSquadResult, GatewayError> {
        let request = WireSquadRequest::from(constraints);
        let result = self.generate_squad(&request).await?;
        tracing::debug!(
            "Squad service returned {} players (total cost {})",
            result.selected_players.len(),
            result.total_cost
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squad_api_config_default() {
        let config = SquadApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.generate_path, "/api/v1/fpl/squad/generate");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_client_creation() {
        assert!(SquadApiClient::new().is_ok());
    }

    #[test]
    fn test_client_with_timeout() {
        let client = SquadApiClient::with_config(SquadApiConfig {
            timeout: Some(Duration::from_secs(5)),
            ..SquadApiConfig::default()
        })
        .unwrap();
        assert_eq!(client.config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_generate_url_joins_trailing_slash() {
        let client = SquadApiClient::with_config(SquadApiConfig {
            base_url: "https://squads.example.com/".to_string(),
            ..SquadApiConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.generate_url(),
            "https://squads.example.com/api/v1/fpl/squad/generate"
        );
    }
}
