use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ChatRequest, ChatResult, DomainError, GatewayClient};
use crate::infrastructure::truncate_for_log;

const GATEWAY: &str = "Gateway";

/// Talks to a deployed gateway handler over HTTP
#[derive(Debug, Clone)]
pub struct HttpGatewayClient {
    client: reqwest::Client,
    url: String,
}

impl HttpGatewayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResult, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&request.to_json())
            .send()
            .await
            .map_err(|e| DomainError::transport(GATEWAY, e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::transport(GATEWAY, e.without_url().to_string()))?;

        debug!(
            provider = %request.provider,
            status = status.as_u16(),
            "Gateway responded"
        );

        match serde_json::from_str::<ChatResult>(&text) {
            Ok(result @ ChatResult::Failure { .. }) => Ok(result),
            Ok(result @ ChatResult::Success { success: true, .. }) if status.is_success() => {
                Ok(result)
            }
            _ => Err(DomainError::transport(
                GATEWAY,
                format!(
                    "HTTP {} with unrecognized body: {}",
                    status.as_u16(),
                    truncate_for_log(&text, 200)
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Message, ProviderId};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ChatRequest {
        ChatRequest::new(
            ProviderId::OpenAi,
            vec![Message::system("s"), Message::user("u")],
        )
    }

    async fn serve(template: ResponseTemplate) -> (MockServer, HttpGatewayClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(template)
            .mount(&server)
            .await;

        let client = HttpGatewayClient::new(format!("{}/api/chat", server.uri()));
        (server, client)
    }

    #[tokio::test]
    async fn test_posts_wire_shape_and_parses_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({
                "provider": "openai",
                "messages": [
                    {"role": "system", "content": "s"},
                    {"role": "user", "content": "u"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "provider": "openai",
                "content": "hello"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpGatewayClient::new(format!("{}/api/chat", server.uri()));
        let result = client.send(&request()).await.unwrap();

        assert_eq!(result, ChatResult::success(ProviderId::OpenAi, "hello"));
    }

    #[tokio::test]
    async fn test_fallback_body_on_500_is_a_result() {
        let (_server, client) = serve(ResponseTemplate::new(500).set_body_json(json!({
            "error": "OpenAI API error: 503",
            "shouldFallback": true
        })))
        .await;

        let result = client.send(&request()).await.unwrap();
        assert!(result.should_fallback());
    }

    #[tokio::test]
    async fn test_client_error_body_on_400_is_a_result() {
        let (_server, client) = serve(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid request format"})),
        )
        .await;

        let result = client.send(&request()).await.unwrap();
        assert!(!result.should_fallback());
        assert_eq!(result.error(), Some("Invalid request format"));
    }

    #[tokio::test]
    async fn test_success_false_is_not_a_delivery() {
        let (_server, client) = serve(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "provider": "openai",
            "content": "looks like an answer"
        })))
        .await;

        let err = client.send(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Transport { .. }));
        assert!(err.to_string().contains("HTTP 200"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let (_server, client) =
            serve(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>")).await;

        let err = client.send(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Transport { .. }));
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_transport_error() {
        let client = HttpGatewayClient::new("http://127.0.0.1:1/api/chat");

        let err = client.send(&request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Transport { .. }));
    }
}
