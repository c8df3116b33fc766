use std::time::Duration;

use crate::config::Defaults;

/// Timeouts applied to upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    /// Total budget for one upstream request, body included.
    pub request: Duration,
}

impl From<&Defaults> for TimeoutConfig {
    fn from(defaults: &Defaults) -> Self {
        Self {
            connect: Duration::from_secs(defaults.connect_timeout_seconds as u64),
            request: Duration::from_secs(defaults.timeout_seconds as u64),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&Defaults::default())
    }
}
