// ABOUTME: Configuration options for the scrape client with sensible defaults.
// ABOUTME: Provides Options struct and a fluent ClientBuilder for customization.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::sites::ProfileRegistry;

/// Default User-Agent, a desktop Chrome string that the target storefronts
/// serve full markup to.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Configuration options for the scrape client.
#[derive(Debug, Clone)]
pub struct Options {
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// User-Agent header sent with each request.
    pub user_agent: String,
    /// Extra headers sent with each request.
    pub headers: HashMap<String, String>,
    /// Custom HTTP client. When None, the client builds its own.
    pub http_client: Option<reqwest::blocking::Client>,
    /// Custom site profiles. When None, the builtin registry is used.
    pub profiles: Option<ProfileRegistry>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
            http_client: None,
            profiles: None,
        }
    }
}

/// Fluent builder for constructing a [`Client`] with custom options.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add an extra header sent with each request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(name.into(), value.into());
        self
    }

    /// Use a preconfigured HTTP client instead of building one.
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.opts.http_client = Some(http_client);
        self
    }

    /// Replace the builtin site profiles.
    ///
    /// Sites absent from the registry scrape to empty tables.
    pub fn profiles(mut self, profiles: ProfileRegistry) -> Self {
        self.opts.profiles = Some(profiles);
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert_eq!(opts.user_agent, DEFAULT_USER_AGENT);
        assert!(opts.headers.is_empty());
        assert!(opts.http_client.is_none());
        assert!(opts.profiles.is_none());
    }

    #[test]
    fn builder_overrides() {
        let builder = ClientBuilder::new()
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .header("accept-language", "en");
        assert_eq!(builder.opts.timeout, Duration::from_secs(5));
        assert_eq!(builder.opts.user_agent, "test-agent");
        assert_eq!(
            builder.opts.headers.get("accept-language"),
            Some(&"en".to_string())
        );
    }
}
