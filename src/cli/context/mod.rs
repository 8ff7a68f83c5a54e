//! Context command - inspect retrieval for a question

use clap::Args;

use crate::domain::{build_system_prompt, ContextRetriever};

#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Print the full system prompt instead of the bare context
    #[arg(long)]
    pub prompt: bool,

    /// The question to retrieve context for
    pub query: String,
}

pub fn run(args: ContextArgs) -> anyhow::Result<()> {
    let context = ContextRetriever::new().retrieve(&args.query);

    let titles: Vec<&str> = context.sections.iter().map(|s| s.title()).collect();
    eprintln!("sections: {}", titles.join(", "));

    if args.prompt {
        println!("{}", build_system_prompt(&context.text));
    } else {
        println!("{}", context.text);
    }

    Ok(())
}
