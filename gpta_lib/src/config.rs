use std::time::Duration;

/// Chat completions endpoint used when no other URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Timeout applied to every model request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Model parameters.
#[derive(Clone, Debug)]
pub struct Config {
    /// Model name.
    pub name: String,
    /// API key.
    pub api_key: String,
    /// Model API URL.
    pub api_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Config {

    /// Create config for the default endpoint using model name and API key.
    pub fn new(name: String, api_key: String) -> Self {
        Config {
            name,
            api_key,
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Replace the endpoint URL.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}
