use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Response, StatusCode};
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::{CredentialStatus, OmdbConfig};
use crate::proxy::error::ProxyError;
use crate::proxy::timeout::TimeoutConfig;

/// Client for the upstream movie database.
pub struct UpstreamClient {
    client: Client,
    timeouts: TimeoutConfig,
}

impl UpstreamClient {
    pub fn new(timeouts: TimeoutConfig) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build upstream client: {}", e)))?;

        Ok(Self { client, timeouts })
    }

    /// `{base_url}/?apikey=<key>&s=<title>`
    pub fn search_url(omdb: &OmdbConfig, api_key: &str, title: &str) -> Result<Url, ProxyError> {
        Url::parse_with_params(&omdb.base_url, &[("apikey", api_key), ("s", title)])
            .map_err(|e| ProxyError::Internal(format!("Invalid upstream URL: {}", e)))
    }

    /// Search by title and pass the upstream status and body through.
    ///
    /// The key is resolved per request; without one no upstream call is made.
    pub async fn search(&self, omdb: &OmdbConfig, title: &str) -> Result<Response<Body>, ProxyError> {
        let api_key = match omdb.resolve_api_key() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(ProxyError::MissingApiKey { reason });
            }
        };

        let url = Self::search_url(omdb, api_key.expose(), title)?;

        match timeout(self.timeouts.request, self.do_search(url)).await {
            Ok(response) => response,
            Err(_) => Err(ProxyError::RequestTimeout {
                duration: self.timeouts.request.as_secs(),
            }),
        }
    }

    async fn do_search(&self, url: Url) -> Result<Response<Body>, ProxyError> {
        let upstream_resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProxyError::ConnectionError {
                source: e.without_url(),
            })?;

        let status = StatusCode::from_u16(upstream_resp.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = upstream_resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let body_bytes = upstream_resp
            .bytes()
            .await
            .map_err(|e| ProxyError::ConnectionError {
                source: e.without_url(),
            })?;

        let mut response = Response::new(Body::from(body_bytes));
        *response.status_mut() = status;
        response.headers_mut().insert(CONTENT_TYPE, content_type);
        Ok(response)
    }
}
