use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::config::ConfigStore;
use crate::proxy::error::{ErrorResponse, ProxyError};
use crate::proxy::health::health_handler;
use crate::proxy::shutdown::ShutdownManager;
use crate::proxy::upstream::UpstreamClient;

/// Shared state for the search endpoint handlers.
#[derive(Clone)]
pub struct RouterEngine {
    config: ConfigStore,
    upstream: Arc<UpstreamClient>,
    shutdown: Arc<ShutdownManager>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

impl RouterEngine {
    pub fn new(
        config: ConfigStore,
        upstream: UpstreamClient,
        shutdown: Arc<ShutdownManager>,
    ) -> Self {
        Self {
            config,
            upstream: Arc::new(upstream),
            shutdown,
        }
    }

    pub async fn search(&self, params: SearchParams) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        let Some(title) = params.title else {
            let err = ProxyError::InvalidRequest("missing 'title' query parameter".to_string());
            tracing::warn!(request_id = %request_id, "Search rejected: {}", err);
            return ErrorResponse::from_error(&err, &request_id);
        };

        let omdb = self.config.get().omdb;
        match self.upstream.search(&omdb, &title).await {
            Ok(response) => {
                tracing::info!(
                    request_id = %request_id,
                    title = %title,
                    status = response.status().as_u16(),
                    "Search proxied"
                );
                response
            }
            Err(err) => {
                tracing::error!(request_id = %request_id, title = %title, "Search failed: {}", err);
                ErrorResponse::from_error(&err, &request_id)
            }
        }
    }
}

pub fn build_router(engine: RouterEngine) -> Router {
    let shutdown = engine.shutdown.clone();
    Router::new()
        .route("/api/movies", get(search_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(shutdown, track_in_flight))
        .with_state(engine)
}

async fn search_handler(
    State(engine): State<RouterEngine>,
    Query(params): Query<SearchParams>,
) -> Response {
    engine.search(params).await
}

async fn track_in_flight(
    State(shutdown): State<Arc<ShutdownManager>>,
    req: Request,
    next: Next,
) -> Response {
    let _guard = shutdown.track();
    next.run(req).await
}
