//! CLI module for the folio chat gateway
//!
//! - `serve`: run the gateway HTTP server
//! - `ask`: send one question through a running gateway with provider fallback
//! - `context`: show which knowledge sections a question retrieves

pub mod ask;
pub mod context;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::init_logging;

/// Portfolio chat gateway with LLM provider fallback
#[derive(Parser)]
#[command(name = "folio-chat-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway server
    Serve,

    /// Ask a question through a running gateway
    Ask(ask::AskArgs),

    /// Print the knowledge context retrieved for a question
    Context(context::ContextArgs),
}

/// Load `.env`, then layered config, then install logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    });
    init_logging(&config.logging);

    config
}
