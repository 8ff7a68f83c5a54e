use clap::Parser;
use folio_chat_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run(cli::bootstrap()).await,
        Command::Ask(args) => cli::ask::run(cli::bootstrap(), args).await,
        Command::Context(args) => cli::context::run(args),
    }
}
