use std::time::Duration;

/// Environment variable that selects the backend endpoint.
pub const API_URL_ENV: &str = "FEEDBACKZ_API_URL";

/// Endpoint used when [`API_URL_ENV`] is unset (local development).
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all request paths are appended to. No trailing slash.
    pub base_url: String,
    /// Deadline applied to every request.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `FEEDBACKZ_API_URL`; falls back to the local development
    /// endpoint when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        let config = ApiConfig::new("http://localhost:8080/api");
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn with_timeout_overrides_deadline() {
        let config = ApiConfig::new("http://localhost:8080/api")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn from_env_reads_override() {
        temp_env::with_var(API_URL_ENV, Some("https://api.feedbackz.app/api"), || {
            let config = ApiConfig::from_env();
            assert_eq!(config.base_url, "https://api.feedbackz.app/api");
        });
    }

    #[test]
    fn from_env_falls_back_to_local_endpoint() {
        temp_env::with_var_unset(API_URL_ENV, || {
            let config = ApiConfig::from_env();
            assert_eq!(config.base_url, DEFAULT_API_URL);
        });
    }
}
