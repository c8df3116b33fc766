use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::config::ConfigStore;
use crate::proxy::error::ProxyError;
use crate::proxy::router::{build_router, RouterEngine};
use crate::proxy::shutdown::ShutdownManager;
use crate::proxy::timeout::TimeoutConfig;
use crate::proxy::upstream::UpstreamClient;

/// How many ports above the configured one `try_bind` will probe.
const PORT_SEARCH_RANGE: u16 = 100;

pub struct ProxyServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    router: RouterEngine,
    shutdown: Arc<ShutdownManager>,
}

impl ProxyServer {
    pub fn new(config: ConfigStore) -> Result<Self, ProxyError> {
        let timeouts = TimeoutConfig::from(&config.get().defaults);
        let upstream = UpstreamClient::new(timeouts)?;
        let shutdown = Arc::new(ShutdownManager::new());
        let router = RouterEngine::new(config, upstream, shutdown.clone());

        Ok(Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            router,
            shutdown,
        })
    }

    /// Try to bind to the configured address, falling back to incremental ports if busy.
    /// Returns the bound address and the base URL clients should call.
    pub async fn try_bind(&mut self, config: &ConfigStore) -> Result<(SocketAddr, String), ProxyError> {
        let server = config.get().server;

        let bind_addr: SocketAddr = server
            .bind_addr
            .parse()
            .map_err(|e| ProxyError::Bind(format!("Invalid bind address '{}': {}", server.bind_addr, e)))?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        for port in start_port..=start_port.saturating_add(PORT_SEARCH_RANGE) {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener
                        .local_addr()
                        .map_err(|e| ProxyError::Bind(e.to_string()))?;

                    let actual_base_url = if server.base_url.contains("localhost")
                        || server.base_url.contains("127.0.0.1")
                    {
                        format!("http://127.0.0.1:{}", actual_addr.port())
                    } else {
                        server.base_url.clone()
                    };

                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Search endpoint bound to {} (base_url: {})", actual_addr, actual_base_url);
                    return Ok((actual_addr, actual_base_url));
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                }
            }
        }

        Err(ProxyError::Bind(format!(
            "Could not find available port in range {}-{}",
            start_port,
            start_port.saturating_add(PORT_SEARCH_RANGE)
        )))
    }

    pub fn handle(&self) -> ProxyHandle {
        ProxyHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the server until shutdown is signalled.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), ProxyError> {
        let listener = self
            .listener
            .ok_or_else(|| ProxyError::Internal("try_bind() must be called before run()".to_string()))?;

        tracing::info!("Starting search endpoint on {}", self.addr);

        let app = build_router(self.router.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(e) = shutdown.wait_for_shutdown().await {
                    tracing::error!("Signal handler failed: {}", e);
                }
            })
            .into_future()
            .await
            .map_err(|e| ProxyError::Internal(format!("Server error: {}", e)))?;

        self.shutdown.wait_for_requests(Duration::from_secs(10)).await;
        tracing::info!("Shutting down gracefully");

        Ok(())
    }
}

#[derive(Clone)]
pub struct ProxyHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ProxyHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
