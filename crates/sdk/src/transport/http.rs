//! HTTP transport layer: authenticated requests against the upstream API.

use crate::config::{ClientConfig, API_VERSION};
use crate::error::{RunnError, RunnResult};
use reqwest::{header, Client, Method};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP adapter for upstream API requests. Holds the only process-wide
/// state: the immutable configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> RunnResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| RunnError::Config("invalid API key format".to_string()))?,
        );
        headers.insert(
            header::HeaderName::from_static("accept-version"),
            header::HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve an upstream-relative path against the base URL. Any path is
    /// forwarded; the generic passthrough tool relies on that.
    fn build_url(&self, path: &str) -> RunnResult<url::Url> {
        Ok(self.config.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Issue a request and decode the response body as JSON.
    ///
    /// Returns the status together with the decoded body; a non-2xx
    /// response fails with [`RunnError::Upstream`] carrying the status and
    /// the upstream body verbatim. Retries follow the configured uniform
    /// policy (none by default).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> RunnResult<(u16, Value)> {
        let url = self.build_url(path)?;
        let retry = &self.config.retry;
        let mut attempts = 0;

        loop {
            debug!(%method, %url, attempt = attempts, "upstream request");
            let mut builder = self.client.request(method.clone(), url.clone());
            if let Some(query) = query {
                builder = builder.query(query);
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }

            match builder.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if response.status().is_success() {
                        let text = response.text().await?;
                        return Ok((status, decode_body(&text)));
                    }

                    if attempts < retry.max_retries && retry.should_retry_status(status) {
                        let backoff = retry.backoff_for_attempt(attempts);
                        warn!(
                            status,
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            "request failed, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }

                    let text = response.text().await.unwrap_or_default();
                    return Err(RunnError::from_response(status, &text));
                }
                Err(e) => {
                    if attempts < retry.max_retries && e.is_timeout() {
                        let backoff = retry.backoff_for_attempt(attempts);
                        warn!(
                            attempt = attempts + 1,
                            backoff_ms = backoff.as_millis(),
                            "request timed out, retrying"
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Execute a GET request, returning only the decoded body.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&[(String, String)]>,
    ) -> RunnResult<Value> {
        let (_, body) = self.request(Method::GET, path, query, None).await?;
        Ok(body)
    }
}

// Upstream success bodies are JSON in practice; an empty body decodes to
// null and anything unparseable is kept as a string.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
