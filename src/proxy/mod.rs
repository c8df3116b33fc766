//! Search endpoint: `GET /api/movies?title=` proxied to the movie database
//! with the server-held API key.

pub mod error;
pub mod health;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod timeout;
pub mod upstream;

pub use error::{ErrorResponse, ProxyError};
pub use router::{build_router, RouterEngine};
pub use server::{ProxyHandle, ProxyServer};
pub use shutdown::ShutdownManager;
pub use timeout::TimeoutConfig;
pub use upstream::UpstreamClient;
