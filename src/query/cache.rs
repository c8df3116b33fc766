//! Keyed task cache for movie searches.
//!
//! Entries are keyed by the committed search term. Each key moves through
//! `Idle → Fetching → {Success | Error}`. A fetch whose key is no longer
//! the committed term when it resolves is discarded. An `Error` entry is
//! refetched when its term is committed again.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::gateway::{MovieGateway, MovieSummary, RemoteEnvelope};
use crate::query::error::QueryError;
use crate::query::retry::{with_retry, RetryPolicy};
use crate::ui::search::SearchStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Fetching,
    Success(Vec<MovieSummary>),
    /// Settled failure, with the message written to the store.
    Error(String),
}

/// What the view layer reads for the committed term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult {
    pub data: Option<Vec<MovieSummary>>,
    pub is_fetching: bool,
    pub is_error: bool,
}

impl QueryResult {
    /// Result for a blank term: no fetch, no results.
    pub fn empty() -> Self {
        Self {
            data: Some(Vec::new()),
            is_fetching: false,
            is_error: false,
        }
    }
}

impl From<&QueryStatus> for QueryResult {
    fn from(status: &QueryStatus) -> Self {
        match status {
            QueryStatus::Idle => QueryResult::default(),
            QueryStatus::Fetching => QueryResult {
                data: None,
                is_fetching: true,
                is_error: false,
            },
            QueryStatus::Success(data) => QueryResult {
                data: Some(data.clone()),
                is_fetching: false,
                is_error: false,
            },
            QueryStatus::Error(_) => QueryResult {
                data: None,
                is_fetching: false,
                is_error: true,
            },
        }
    }
}

/// Movie search query bound to a [`SearchStore`].
///
/// Cloning is cheap; clones share the cache and the store.
#[derive(Clone)]
pub struct MovieQuery {
    inner: Arc<QueryInner>,
}

struct Entry {
    status: QueryStatus,
    /// Store commit count when the fetch for this entry started.
    commit: u64,
}

impl Entry {
    fn is_error(&self) -> bool {
        matches!(self.status, QueryStatus::Error(_))
    }
}

struct QueryInner {
    gateway: Arc<dyn MovieGateway>,
    store: SearchStore,
    retry: RetryPolicy,
    entries: Mutex<HashMap<String, Entry>>,
    gateway_calls: AtomicUsize,
    settled: Notify,
}

impl MovieQuery {
    pub fn new(gateway: Arc<dyn MovieGateway>, store: SearchStore, retry: RetryPolicy) -> Self {
        Self {
            inner: Arc::new(QueryInner {
                gateway,
                store,
                retry,
                entries: Mutex::new(HashMap::new()),
                gateway_calls: AtomicUsize::new(0),
                settled: Notify::new(),
            }),
        }
    }

    pub fn store(&self) -> &SearchStore {
        &self.inner.store
    }

    /// Result for the currently committed term.
    ///
    /// Blank terms short-circuit to [`QueryResult::empty`] without creating
    /// an entry. A term with no entry, or whose entry failed before the
    /// latest commit, is marked `Fetching` before this returns and fetched
    /// on a background task, so this must be called from within a Tokio
    /// runtime.
    pub fn observe(&self) -> QueryResult {
        let commit = self.inner.store.commit_count();
        let (key, has_query) = self
            .inner
            .store
            .select(|s| (s.search_text.clone(), s.has_query()));
        if !has_query {
            return QueryResult::empty();
        }

        let mut entries = self.inner.entries.lock();
        match entries.get(&key) {
            Some(entry) if entry.is_error() && entry.commit < commit => {
                tracing::debug!(key = %key, "Refetching failed query after recommit");
            }
            Some(entry) => return QueryResult::from(&entry.status),
            None => {}
        }

        entries.insert(
            key.clone(),
            Entry {
                status: QueryStatus::Fetching,
                commit,
            },
        );
        drop(entries);

        self.spawn_fetch(key, commit);
        QueryResult::from(&QueryStatus::Fetching)
    }

    /// Wait until the committed term is no longer fetching.
    pub async fn settled(&self) -> QueryResult {
        loop {
            let notified = self.inner.settled.notified();
            let result = self.observe();
            if !result.is_fetching {
                return result;
            }
            notified.await;
        }
    }

    /// Cached status for `key`, without fetching.
    pub fn status(&self, key: &str) -> QueryStatus {
        self.inner
            .entries
            .lock()
            .get(key)
            .map(|entry| entry.status.clone())
            .unwrap_or_default()
    }

    /// Drop the entry for `key` so the next observation refetches it.
    pub fn invalidate(&self, key: &str) {
        self.inner.entries.lock().remove(key);
    }

    pub fn clear(&self) {
        self.inner.entries.lock().clear();
    }

    /// Number of gateway invocations so far, retries included.
    pub fn gateway_calls(&self) -> usize {
        self.inner.gateway_calls.load(Ordering::SeqCst)
    }

    /// Observe every change of the committed term on a background task.
    pub fn spawn_sync(&self) -> JoinHandle<()> {
        let query = self.clone();
        let mut rx = self.inner.store.subscribe();
        tokio::spawn(async move {
            let mut last = rx.borrow_and_update().search_text.clone();
            query.observe();
            while rx.changed().await.is_ok() {
                let current = rx.borrow_and_update().search_text.clone();
                if current != last {
                    last = current;
                    query.observe();
                }
            }
        })
    }

    fn spawn_fetch(&self, key: String, commit: u64) {
        let query = self.clone();
        tokio::spawn(async move {
            tracing::debug!(key = %key, "Query fetch started");
            let outcome = query.fetch(&key).await;
            query.settle(&key, commit, outcome);
        });
    }

    async fn fetch(&self, key: &str) -> Result<Vec<MovieSummary>, QueryError> {
        let inner = &self.inner;
        with_retry(&inner.retry, |_attempt| async move {
            inner.gateway_calls.fetch_add(1, Ordering::SeqCst);
            match inner.gateway.fetch_movies(key).await {
                Ok(RemoteEnvelope::Found { search, .. }) => Ok(search),
                Ok(RemoteEnvelope::NotFound { error }) => Err(QueryError::NotFound(error)),
                Err(err) => Err(QueryError::Transport(err)),
            }
        })
        .await
    }

    fn settle(&self, key: &str, commit: u64, outcome: Result<Vec<MovieSummary>, QueryError>) {
        let is_current = self.inner.store.select(|s| s.search_text == key);
        if !is_current {
            tracing::debug!(key = %key, "Discarding stale query result");
            self.inner.entries.lock().remove(key);
            self.inner.settled.notify_waiters();
            return;
        }

        match outcome {
            Ok(data) => {
                tracing::info!(key = %key, results = data.len(), "Query succeeded");
                // A success replaces whatever an earlier failure left behind.
                self.inner.store.set_message_if_current(key, "");
                self.inner.entries.lock().insert(
                    key.to_string(),
                    Entry {
                        status: QueryStatus::Success(data),
                        commit,
                    },
                );
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(key = %key, error = %err, "Query failed");
                if self.inner.store.set_message_if_current(key, message.clone()) {
                    self.inner.entries.lock().insert(
                        key.to_string(),
                        Entry {
                            status: QueryStatus::Error(message),
                            commit,
                        },
                    );
                } else {
                    self.inner.entries.lock().remove(key);
                }
            }
        }
        self.inner.settled.notify_waiters();
    }
}
