use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::envelope::RemoteEnvelope;
use super::error::GatewayError;
use crate::config::Defaults;

/// One outbound search by title.
///
/// Implementations perform exactly one request per call and never retry;
/// retry policy belongs to the caller. Callers must not pass a blank title.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    async fn fetch_movies(&self, title: &str) -> Result<RemoteEnvelope, GatewayError>;
}

/// Gateway that calls the app's own search endpoint (`/api/movies`).
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, defaults: &Defaults) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(defaults.timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// `{base_url}/api/movies?title=<title>`, with the title passed verbatim.
    pub fn search_url(&self, title: &str) -> Result<Url, GatewayError> {
        let endpoint = format!("{}/api/movies", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(&endpoint, &[("title", title)])
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait]
impl MovieGateway for HttpGateway {
    async fn fetch_movies(&self, title: &str) -> Result<RemoteEnvelope, GatewayError> {
        let url = self.search_url(title)?;
        tracing::debug!(%url, "Fetching movies");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_title_parameter() {
        let gateway = HttpGateway::new("http://localhost:3000/", &Defaults::default()).unwrap();
        let url = gateway.search_url("frozen").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/movies?title=frozen");
    }

    #[test]
    fn search_url_encodes_spaces() {
        let gateway = HttpGateway::new("http://localhost:3000", &Defaults::default()).unwrap();
        let url = gateway.search_url("the matrix").unwrap();
        assert_eq!(url.path(), "/api/movies");
        let title: Vec<_> = url.query_pairs().collect();
        assert_eq!(title[0].1, "the matrix");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let gateway = HttpGateway::new("not a url", &Defaults::default()).unwrap();
        assert!(matches!(
            gateway.search_url("frozen"),
            Err(GatewayError::InvalidUrl(_))
        ));
    }
}
