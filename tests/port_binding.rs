//! Port selection for the search endpoint.
//!
//! Each server keeps its listener alive between `try_bind()` and `run()`,
//! so concurrent servers never end up sharing a port.

mod common;

use common::mock_upstream::MockUpstream;
use common::{endpoint_config, free_port};
use moviesearch::config::ConfigStore;
use moviesearch::proxy::ProxyServer;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Barrier;

#[tokio::test]
async fn busy_port_falls_back_to_next_free_one() {
    let upstream = MockUpstream::start().await;
    let port = free_port();
    let mut config = endpoint_config(&upstream.base_url(), Some("k"), "MOVIESEARCH_PORT_UNSET_1");
    config.server.bind_addr = format!("127.0.0.1:{}", port);
    let store = ConfigStore::new(config, PathBuf::from("/tmp/moviesearch-port-test.toml"));

    let mut first = ProxyServer::new(store.clone()).unwrap();
    let (first_addr, first_url) = first.try_bind(&store).await.unwrap();
    let mut second = ProxyServer::new(store.clone()).unwrap();
    let (second_addr, second_url) = second.try_bind(&store).await.unwrap();

    assert_eq!(first_addr.port(), port);
    assert!(second_addr.port() > port);
    assert_eq!(first_url, format!("http://127.0.0.1:{}", port));
    assert_eq!(second_url, format!("http://127.0.0.1:{}", second_addr.port()));
}

#[tokio::test]
async fn concurrent_servers_get_unique_ports() {
    let upstream = MockUpstream::start().await;
    let num_servers = 5;
    let barrier = Arc::new(Barrier::new(num_servers));
    let mut handles = Vec::new();

    for i in 0..num_servers {
        let mut config = endpoint_config(
            &upstream.base_url(),
            Some("k"),
            &format!("MOVIESEARCH_PORT_UNSET_{}", i + 2),
        );
        config.server.bind_addr = "127.0.0.1:0".to_string();
        let barrier = barrier.clone();

        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            let store = ConfigStore::new(config, PathBuf::from("/tmp/moviesearch-port-test.toml"));
            let mut server = ProxyServer::new(store.clone()).unwrap();
            let (addr, _) = server.try_bind(&store).await.unwrap();
            // Hold the listener until every server has bound.
            (addr.port(), server)
        }));
    }

    let mut ports = HashSet::new();
    let mut servers = Vec::new();
    for handle in handles {
        let (port, server) = handle.await.unwrap();
        ports.insert(port);
        servers.push(server);
    }

    assert_eq!(ports.len(), num_servers);
}

#[tokio::test]
async fn invalid_bind_address_is_rejected() {
    let mut config = endpoint_config("http://127.0.0.1:9", None, "MOVIESEARCH_PORT_UNSET_9");
    config.server.bind_addr = "not-an-address".to_string();
    let store = ConfigStore::new(config, PathBuf::from("/tmp/moviesearch-port-test.toml"));

    let mut server = ProxyServer::new(store.clone()).unwrap();
    let err = server.try_bind(&store).await.unwrap_err();

    assert!(err.to_string().contains("not-an-address"));
}
