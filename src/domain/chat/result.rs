use serde::{Deserialize, Serialize};

use crate::domain::ProviderId;

/// Normalized gateway outcome, as carried on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResult {
    Success {
        success: bool,
        provider: ProviderId,
        content: String,
    },
    Failure {
        error: String,
        #[serde(
            rename = "shouldFallback",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        should_fallback: Option<bool>,
    },
}

impl ChatResult {
    pub fn success(provider: ProviderId, content: impl Into<String>) -> Self {
        Self::Success {
            success: true,
            provider,
            content: content.into(),
        }
    }

    /// Terminal failure: the caller must not retry elsewhere
    pub fn client_error(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            should_fallback: None,
        }
    }

    /// Failure that another provider may be able to serve
    pub fn fallback(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            should_fallback: Some(true),
        }
    }

    pub fn should_fallback(&self) -> bool {
        matches!(
            self,
            Self::Failure {
                should_fallback: Some(true),
                ..
            }
        )
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Success { content, .. } => Some(content),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization() {
        let result = ChatResult::success(ProviderId::Groq, "Hello");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"success": true, "provider": "groq", "content": "Hello"})
        );
    }

    #[test]
    fn test_client_error_omits_should_fallback() {
        let json = serde_json::to_string(&ChatResult::client_error("Invalid provider")).unwrap();
        assert_eq!(json, r#"{"error":"Invalid provider"}"#);
    }

    #[test]
    fn test_fallback_serialization() {
        let json = serde_json::to_string(&ChatResult::fallback("Groq API error: 503")).unwrap();
        assert_eq!(json, r#"{"error":"Groq API error: 503","shouldFallback":true}"#);
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let ok: ChatResult = serde_json::from_str(
            r#"{"success":true,"provider":"openai","content":"hi"}"#,
        )
        .unwrap();
        assert_eq!(ok.content(), Some("hi"));
        assert!(!ok.should_fallback());

        let retry: ChatResult =
            serde_json::from_str(r#"{"error":"boom","shouldFallback":true}"#).unwrap();
        assert!(retry.should_fallback());

        let terminal: ChatResult = serde_json::from_str(r#"{"error":"bad"}"#).unwrap();
        assert!(!terminal.should_fallback());
        assert_eq!(terminal.error(), Some("bad"));

        let explicit_false: ChatResult =
            serde_json::from_str(r#"{"error":"bad","shouldFallback":false}"#).unwrap();
        assert!(!explicit_false.should_fallback());
    }

    #[test]
    fn test_unrecognized_shape_is_rejected() {
        assert!(serde_json::from_str::<ChatResult>(r#"{"status":"ok"}"#).is_err());
    }
}
