//! Conversation state for one chat widget

use tracing::{debug, error};

use crate::domain::fallback::{FallbackOrchestrator, GatewayClient};
use crate::domain::knowledge::{ContextRetriever, PROFILE};
use crate::domain::llm::{Message, MessageRole};
use crate::domain::ProviderId;

/// Shown in place of an answer when every attempt failed
pub fn friendly_failure_message() -> String {
    format!(
        "I'm having trouble connecting right now. Please try again in a moment, \
         or reach out directly via email at {}",
        PROFILE.email
    )
}

/// Persona preamble plus the retrieved context
pub fn build_system_prompt(context: &str) -> String {
    format!(
        "You are {name}'s AI assistant. Answer questions about {name} based ONLY on the \
         provided context below. Be conversational, helpful, and concise.\n\
         \n\
         Important guidelines:\n\
         - Only use information from the context provided\n\
         - If asked about contact info, provide: Email ({email}), Phone ({phone}), LinkedIn ({linkedin})\n\
         - If information isn't in the context, politely say you don't have that specific information\n\
         - Be friendly and professional\n\
         - Keep responses under 200 words\n\
         \n\
         Context about {name}:\n\
         {context}",
        name = PROFILE.name,
        email = PROFILE.email,
        phone = PROFILE.phone,
        linkedin = PROFILE.linkedin,
        context = context,
    )
}

/// What happened to one call to [`ChatSession::send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input or a send already in flight
    Ignored,
    Answered { provider: ProviderId },
    Failed,
}

/// Clears the loading flag when the send finishes or is dropped mid-flight
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// A running conversation with a user-selected starting provider
pub struct ChatSession<G: GatewayClient> {
    orchestrator: FallbackOrchestrator<G>,
    retriever: ContextRetriever,
    current_provider: ProviderId,
    messages: Vec<Message>,
    is_loading: bool,
}

impl<G: GatewayClient> ChatSession<G> {
    pub fn new(orchestrator: FallbackOrchestrator<G>) -> Self {
        Self {
            orchestrator,
            retriever: ContextRetriever::new(),
            current_provider: ProviderId::Groq,
            messages: Vec::new(),
            is_loading: false,
        }
    }

    pub fn with_provider(mut self, provider: ProviderId) -> Self {
        self.current_provider = provider;
        self
    }

    pub fn current_provider(&self) -> ProviderId {
        self.current_provider
    }

    /// Change where future sends start; a fallback never changes this
    pub fn select_provider(&mut self, provider: ProviderId) {
        self.current_provider = provider;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Latest assistant reply, if any
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
    }

    /// Dropping the returned future abandons the call and re-enables sending.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() || self.is_loading {
            return SendOutcome::Ignored;
        }

        let _loading = LoadingGuard::engage(&mut self.is_loading);
        self.messages.push(Message::user(text));

        let context = self.retriever.retrieve(text);
        debug!(sections = ?context.sections, "Built prompt context");
        let system_prompt = build_system_prompt(&context.text);

        match self
            .orchestrator
            .deliver(self.current_provider, &system_prompt, text)
            .await
        {
            Ok(delivery) => {
                self.messages.push(Message::assistant(delivery.content));
                SendOutcome::Answered {
                    provider: delivery.provider,
                }
            }
            Err(e) => {
                error!(error = %e, "Chat send failed");
                self.messages
                    .push(Message::assistant(friendly_failure_message()));
                SendOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::ChatResult;
    use crate::domain::fallback::MockGatewayClient;
    use crate::domain::{ChatRequest, DomainError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn session_with(client: MockGatewayClient) -> ChatSession<MockGatewayClient> {
        ChatSession::new(FallbackOrchestrator::new(client))
    }

    #[test]
    fn test_system_prompt_embeds_context_last() {
        let prompt = build_system_prompt("## Profile Information\n{}");

        assert!(prompt.starts_with("You are Alex Rivera's AI assistant."));
        assert!(prompt.contains("Keep responses under 200 words"));
        assert!(prompt.ends_with("Context about Alex Rivera:\n## Profile Information\n{}"));
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut client = MockGatewayClient::new();
        client.expect_send().never();
        let mut session = session_with(client);

        assert_eq!(session.send("   \n").await, SendOutcome::Ignored);
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_appends_user_and_answer() {
        let mut client = MockGatewayClient::new();
        client
            .expect_send()
            .withf(|r| {
                r.provider == ProviderId::Gemini
                    && r.messages[0].content.contains("## Education")
                    && r.messages[1].content == "Where did you study?"
            })
            .times(1)
            .returning(|r| Ok(ChatResult::success(r.provider, "At Lakeside Institute.")));

        let mut session = session_with(client).with_provider(ProviderId::Gemini);
        let outcome = session.send("  Where did you study?  ").await;

        assert_eq!(
            outcome,
            SendOutcome::Answered {
                provider: ProviderId::Gemini
            }
        );
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0], Message::user("Where did you study?"));
        assert_eq!(session.last_reply(), Some("At Lakeside Institute."));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_fallback_keeps_selected_provider() {
        let mut client = MockGatewayClient::new();
        client.expect_send().returning(|r| match r.provider {
            ProviderId::Groq => Ok(ChatResult::fallback("Groq API error: 503")),
            p => Ok(ChatResult::success(p, "answer")),
        });

        let mut session = session_with(client);
        let outcome = session.send("hello").await;

        assert_eq!(
            outcome,
            SendOutcome::Answered {
                provider: ProviderId::OpenAi
            }
        );
        assert_eq!(session.current_provider(), ProviderId::Groq);
    }

    #[tokio::test]
    async fn test_failure_appends_friendly_message() {
        let mut client = MockGatewayClient::new();
        client
            .expect_send()
            .times(3)
            .returning(|_| Err(DomainError::transport("gateway", "connection refused")));

        let mut session = session_with(client);
        let outcome = session.send("hello").await;

        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(session.last_reply(), Some(friendly_failure_message().as_str()));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_rejected_request_also_shows_friendly_message() {
        let mut client = MockGatewayClient::new();
        client
            .expect_send()
            .times(1)
            .returning(|_| Ok(ChatResult::client_error("Invalid request format")));

        let mut session = session_with(client);

        assert_eq!(session.send("hello").await, SendOutcome::Failed);
        assert_eq!(session.messages().len(), 2);
    }

    /// Never answers its first call; answers every later one
    #[derive(Debug, Default)]
    struct StallsOnceClient {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl GatewayClient for StallsOnceClient {
        async fn send(&self, request: &ChatRequest) -> Result<ChatResult, DomainError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                std::future::pending::<()>().await;
            }
            Ok(ChatResult::success(request.provider, "back online"))
        }
    }

    #[tokio::test]
    async fn test_abandoned_send_does_not_block_the_next_one() {
        let mut session = ChatSession::new(FallbackOrchestrator::new(StallsOnceClient::default()));

        let abandoned = tokio::time::timeout(Duration::from_millis(50), session.send("hello")).await;
        assert!(abandoned.is_err());
        assert!(!session.is_loading());

        let outcome = session.send("hello again").await;

        assert_eq!(
            outcome,
            SendOutcome::Answered {
                provider: ProviderId::Groq
            }
        );
        assert_eq!(session.last_reply(), Some("back online"));
    }
}
