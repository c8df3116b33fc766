use thiserror::Error;

/// Endpoint error types that describe a condition a retry cannot change.
const FINAL_ERROR_TYPES: &[&str] = &["missing_api_key", "invalid_request"];

/// Failures of a single gateway call.
///
/// A "not found" answer is not an error here; it arrives in-band as
/// [`RemoteEnvelope::NotFound`](super::RemoteEnvelope::NotFound).
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The endpoint URL could not be built.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, or timeout failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a valid response envelope.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Transport(_) => true,
            GatewayError::Status { status, body } => {
                let is_final = endpoint_error_type(body)
                    .is_some_and(|t| FINAL_ERROR_TYPES.contains(&t.as_str()));
                *status >= 500 && !is_final
            }
            GatewayError::InvalidUrl(_) | GatewayError::Decode(_) => false,
        }
    }
}

/// `error.type` of an endpoint JSON error body, if the body is one.
fn endpoint_error_type(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["type"].as_str().map(str::to_string)
}
