//! Client configuration

/// Default listing collection path, relative to the base URL
pub const DEFAULT_LISTINGS_PATH: &str = "api/products";

/// Client configuration for connecting to the catalog service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token injected as `Authorization`
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Listing collection path
    pub listings_path: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            listings_path: DEFAULT_LISTINGS_PATH.to_string(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Override the listing collection path
    pub fn with_listings_path(mut self, path: impl Into<String>) -> Self {
        self.listings_path = path.into().trim_matches('/').to_string();
        self
    }

    /// Create a network client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::NetworkCatalogClient> {
        crate::NetworkCatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
