//! Endpoint configuration for the RDF service.

/// Where the RDF service listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host name or address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServiceConfig {
    /// Builds a configuration for `host:port`.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://{host}:{port}`, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full URL of one service endpoint, e.g. `query`.
    #[must_use]
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url(), name)
    }
}
