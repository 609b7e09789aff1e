//! Client configuration.

use std::time::Duration;

/// Production endpoint of the bill resource.
pub const DEFAULT_BASE_URL: &str = "https://api.qiwi.com/partner/bill/v1/bills";

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Connect/read timeout pair applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT_TIMEOUT,
            read: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// Settings needed to build a [`QiwiClient`](crate::QiwiClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub secret_key: String,
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Configuration for the production endpoint with default timeouts.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: Timeouts::default(),
        }
    }
}

// The secret key must never end up in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}
