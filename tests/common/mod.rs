//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gateway;
pub mod mock_upstream;

use moviesearch::config::{Config, ConfigStore};
use moviesearch::gateway::MovieSummary;
use moviesearch::proxy::{ProxyHandle, ProxyServer};
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// Poll `condition` until it holds or `timeout` elapses.
pub async fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

// -- Fixtures -----------------------------------------------------------------

pub fn movie(title: &str, year: &str, imdb_id: &str) -> MovieSummary {
    MovieSummary {
        title: title.to_string(),
        year: year.to_string(),
        imdb_id: imdb_id.to_string(),
        kind: "movie".to_string(),
        poster: format!("https://m.media-amazon.com/images/{}.jpg", imdb_id),
    }
}

pub fn frozen_movies() -> Vec<MovieSummary> {
    vec![
        movie("Frozen", "2013", "tt2294629"),
        movie("Frozen II", "2019", "tt4520988"),
        movie("Frozen Fever", "2015", "tt4007502"),
    ]
}

// -- Server helpers -----------------------------------------------------------

/// Config pointing the endpoint at `upstream_url`, reading the key from `key_env`.
pub fn endpoint_config(upstream_url: &str, api_key: Option<&str>, key_env: &str) -> Config {
    let mut config = Config::default();
    config.server.bind_addr = format!("127.0.0.1:{}", free_port());
    config.omdb.base_url = upstream_url.to_string();
    config.omdb.api_key = api_key.map(str::to_string);
    config.omdb.api_key_env = key_env.to_string();
    config.defaults.timeout_seconds = 2;
    config.defaults.connect_timeout_seconds = 1;
    config
}

/// Bind and spawn the search endpoint. Returns its base URL.
pub async fn start_endpoint(config: Config) -> (String, ProxyHandle) {
    let store = ConfigStore::new(config, PathBuf::from("/tmp/moviesearch-test.toml"));
    let mut server = ProxyServer::new(store.clone()).expect("Failed to create server");
    let (addr, base_url) = server.try_bind(&store).await.expect("Failed to bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    (base_url, handle)
}
