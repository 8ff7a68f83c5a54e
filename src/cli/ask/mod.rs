//! Ask command - one question through the gateway with provider fallback

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{ChatSession, FallbackOrchestrator, ProviderId, SendOutcome};
use crate::infrastructure::HttpGatewayClient;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Provider to try first (groq, openai, gemini)
    #[arg(long)]
    pub provider: Option<ProviderId>,

    /// Gateway endpoint, e.g. http://127.0.0.1:8080/api/chat
    #[arg(long)]
    pub gateway_url: Option<String>,

    /// The question to ask
    pub message: String,
}

pub async fn run(config: AppConfig, args: AskArgs) -> anyhow::Result<()> {
    let gateway_url = args
        .gateway_url
        .unwrap_or_else(|| config.client.gateway_url.clone());
    let provider = args.provider.unwrap_or(config.client.start_provider);

    info!(gateway_url = %gateway_url, provider = %provider, "Sending question");

    let orchestrator = FallbackOrchestrator::new(HttpGatewayClient::new(gateway_url))
        .with_max_retries(config.client.max_retries)
        .with_attempt_timeout(config.client.attempt_timeout());
    let mut session = ChatSession::new(orchestrator).with_provider(provider);

    let outcome = session.send(&args.message).await;
    if let Some(reply) = session.last_reply() {
        println!("{}", reply);
    }

    match outcome {
        SendOutcome::Answered { provider } => {
            info!(provider = %provider, "Answered");
            Ok(())
        }
        SendOutcome::Failed => anyhow::bail!("No provider could answer"),
        SendOutcome::Ignored => anyhow::bail!("Message is empty"),
    }
}
