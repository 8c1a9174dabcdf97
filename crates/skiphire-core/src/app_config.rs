use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration shared by the server and CLI binaries.
///
/// Every field has a default; the environment only needs to override what
/// differs from a local development setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the upstream skip-pricing API.
    pub upstream_url: String,
    /// Default postcode for by-location queries.
    pub postcode: String,
    /// Default area name for by-location queries.
    pub area: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
