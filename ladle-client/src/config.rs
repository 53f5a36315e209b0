//! Client configuration

/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "LADLE_API_URL";
/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "LADLE_API_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read base URL and token from the environment
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            config.token = Some(token);
        }
        config
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

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_token_and_timeout() {
        let config = ClientConfig::new("http://localhost:5000/api")
            .with_token("jwt-token")
            .with_timeout(5);
        assert_eq!(config.token.as_deref(), Some("jwt-token"));
        assert_eq!(config.timeout, 5);
    }
}
