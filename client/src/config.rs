use std::time::Duration;

/// Connection settings for a [`crate::Client`].
///
/// `base_url` is the only required field. Extra headers and query
/// parameters are applied to every request, streaming or not.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub bearer_token: Option<String>,
    pub headers: Vec<(String, String)>,
    pub query_params: Vec<(String, String)>,
    /// Timeout for plain (non-streaming) calls. Streaming reads are bounded
    /// per-read by [`crate::StreamOptions::idle_timeout`] instead.
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            headers: Vec::new(),
            query_params: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
