use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::DomainError;
use crate::infrastructure::truncate_for_log;

/// Default timeout for one outbound provider call
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// Upstream error bodies are logged up to this many bytes
const MAX_LOGGED_BODY: usize = 500;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body and decode the JSON answer.
    ///
    /// Errors are attributed to `"http"`; callers re-attribute them with
    /// [`DomainError::for_provider`].
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_send_error(&self, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            return DomainError::timeout("http", self.timeout.as_millis() as u64);
        }

        // Gemini carries its key in the query string
        DomainError::transport("http", e.without_url().to_string())
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body = %truncate_for_log(&error_body, MAX_LOGGED_BODY),
                "Upstream returned an error status"
            );
            return Err(DomainError::upstream_status("http", status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;

        serde_json::from_str(&text)
            .map_err(|e| DomainError::malformed_response("http", format!("body is not JSON: {}", e)))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// A captured outbound call
    #[derive(Debug, Clone)]
    pub struct RecordedCall {
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: serde_json::Value,
    }

    #[derive(Debug)]
    enum Reply {
        Json(serde_json::Value),
        Error(fn() -> DomainError),
    }

    /// Replies the same way to every call and records what was sent
    #[derive(Debug)]
    pub struct MockHttpClient {
        reply: Reply,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockHttpClient {
        pub fn with_response(response: serde_json::Value) -> Self {
            Self {
                reply: Reply::Json(response),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(error: fn() -> DomainError) -> Self {
            Self {
                reply: Reply::Error(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn last_call(&self) -> RecordedCall {
            self.calls().pop().expect("no call recorded")
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn post_json(
            &self,
            url: &str,
            headers: Vec<(&str, &str)>,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value, DomainError> {
            self.calls.lock().unwrap().push(RecordedCall {
                url: url.to_string(),
                headers: headers
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body: body.clone(),
            });

            match &self.reply {
                Reply::Json(value) => Ok(value.clone()),
                Reply::Error(make) => Err(make()),
            }
        }
    }
}
