//! Remote movie gateway: one outbound search call per invocation.

mod client;
mod envelope;
mod error;

pub use client::{HttpGateway, MovieGateway};
pub use envelope::{MovieSummary, RemoteEnvelope};
pub use error::GatewayError;
