use thiserror::Error;

use crate::gateway::GatewayError;
use crate::query::retry::Retryable;

/// Message stored for transport-level failures.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies.";

#[derive(Debug, Error)]
pub enum QueryError {
    /// The upstream answered `Response: "False"`.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Transport(#[from] GatewayError),
}

impl QueryError {
    /// Human-readable text for the search store's `message`.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::NotFound(message) => message.clone(),
            QueryError::Transport(_) => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl Retryable for QueryError {
    fn is_retryable(&self) -> bool {
        match self {
            QueryError::NotFound(_) => false,
            QueryError::Transport(err) => err.is_retryable(),
        }
    }
}
