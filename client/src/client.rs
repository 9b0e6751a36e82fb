use quarry_protocol::Envelope;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::error::Result;

/// Low-level typed client. One method per REST endpoint, spread across the
/// resource modules; everything funnels through the envelope helpers here.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a request with auth, extra headers, and extra query parameters
    /// applied. Streaming and plain calls both start here.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.config.bearer_token {
            builder = builder.bearer_auth(token);
        }
        for (name, value) in &self.config.headers {
            builder = builder.header(name, value);
        }
        if !self.config.query_params.is_empty() {
            builder = builder.query(&self.config.query_params);
        }
        builder
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.execute(path, builder).await?.ok_or_else(missing_data)
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute(path, builder).await?.ok_or_else(missing_data)
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let builder = self.request(Method::POST, path).json(body);
        self.execute::<serde_json::Value>(path, builder).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path);
        self.execute::<serde_json::Value>(path, builder).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).multipart(form);
        self.execute(path, builder).await?.ok_or_else(missing_data)
    }

    /// Send a plain request and unwrap the JSON envelope. Non-2xx statuses
    /// and `code != 0` envelopes both become errors; `data` may be absent.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<Option<T>> {
        let response = builder.timeout(self.config.request_timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response>".to_string());
            return Err(Error::UnexpectedStatus { status, body });
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.is_success() {
            debug!(
                code = envelope.code,
                request_id = envelope.request_id.as_deref(),
                "api error on {path}: {}",
                envelope.msg
            );
            return Err(Error::Api {
                code: envelope.code,
                msg: envelope.msg,
                request_id: envelope.request_id,
            });
        }
        Ok(envelope.data)
    }
}

fn missing_data() -> Error {
    Error::Other("response envelope is missing data".to_string())
}
