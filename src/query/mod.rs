//! Query cache layer: committed term → cached remote search.

mod cache;
mod error;
mod retry;

pub use cache::{MovieQuery, QueryResult, QueryStatus};
pub use error::{QueryError, FETCH_FAILED_MESSAGE};
pub use retry::{with_retry, RetryPolicy, Retryable};
