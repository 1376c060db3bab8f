use async_trait::async_trait;
use thiserror::Error;

use super::wire::WireSquadResult;
use crate::domain::SquadConstraints;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
    #[error("Request to squad service failed: {0}")]
    Transport(String),
    #[error("Squad service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Service gateway contract: one request out, one response in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SquadServicePort: Send + Sync {
    async fn submit(&self, constraints: &SquadConstraints) -> Result<WireSquadResult, GatewayError>;
}
