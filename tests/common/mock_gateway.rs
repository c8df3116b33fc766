//! Scripted in-process `MovieGateway`.

#![allow(dead_code)]

use async_trait::async_trait;
use moviesearch::gateway::{GatewayError, MovieGateway, MovieSummary, RemoteEnvelope};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    Found(Vec<MovieSummary>),
    NotFound(String),
    /// 503 from the endpoint; retryable.
    Unavailable,
}

#[derive(Default)]
struct Script {
    once: VecDeque<MockReply>,
    repeat: Option<MockReply>,
    delay: Duration,
}

#[derive(Default)]
pub struct MockGateway {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every call for `title`.
    pub fn script(&self, title: &str, reply: MockReply) -> &Self {
        self.scripts.lock().entry(title.to_string()).or_default().repeat = Some(reply);
        self
    }

    /// Reply to the next call for `title` only; takes precedence over `script`.
    pub fn script_once(&self, title: &str, reply: MockReply) -> &Self {
        self.scripts
            .lock()
            .entry(title.to_string())
            .or_default()
            .once
            .push_back(reply);
        self
    }

    pub fn delay(&self, title: &str, delay: Duration) -> &Self {
        self.scripts.lock().entry(title.to_string()).or_default().delay = delay;
        self
    }

    /// Titles passed to `fetch_movies`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieGateway for MockGateway {
    async fn fetch_movies(&self, title: &str) -> Result<RemoteEnvelope, GatewayError> {
        self.calls.lock().push(title.to_string());

        let (reply, delay) = {
            let mut scripts = self.scripts.lock();
            match scripts.get_mut(title) {
                Some(script) => {
                    let reply = script.once.pop_front().or_else(|| script.repeat.clone());
                    (reply, script.delay)
                }
                None => (None, Duration::ZERO),
            }
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Some(MockReply::Found(movies)) => Ok(RemoteEnvelope::found(movies)),
            Some(MockReply::NotFound(error)) => Ok(RemoteEnvelope::not_found(error)),
            Some(MockReply::Unavailable) => Err(GatewayError::Status {
                status: 503,
                body: "Service Unavailable".to_string(),
            }),
            None => Err(GatewayError::Status {
                status: 404,
                body: format!("unscripted title {:?}", title),
            }),
        }
    }
}
