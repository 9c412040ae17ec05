// Configuration for QualityClient

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_HIGH_RISK_THRESHOLD};

/// Configuration for the quality API client
#[derive(Clone, Debug)]
pub struct QualityClientConfig {
    /// API base URLs including the version prefix (e.g. ["http://localhost:8080/api/v1"])
    pub server_addrs: Vec<String>,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Threshold used when a high-risk query does not name one (default: 0.7)
    pub high_risk_threshold: f64,
}

impl Default for QualityClientConfig {
    fn default() -> Self {
        Self {
            server_addrs: vec![DEFAULT_BASE_URL.to_string()],
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            high_risk_threshold: DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }
}

impl QualityClientConfig {
    /// Create a config for a single base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            server_addrs: vec![base_url.to_string()],
            ..Default::default()
        }
    }

    /// Create a config with several base URLs tried in order on failure
    pub fn with_servers(server_addrs: Vec<String>) -> Self {
        Self {
            server_addrs,
            ..Default::default()
        }
    }

    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    pub fn with_high_risk_threshold(mut self, threshold: f64) -> Self {
        self.high_risk_threshold = threshold;
        self
    }
}
