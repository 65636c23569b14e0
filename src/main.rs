use clap::Parser;
use magedin_chatgpt::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Query(args) => cli::query::run(args).await,
        Command::Status(args) => cli::status::run(args).await,
        Command::Models => cli::models::run().await,
        Command::Encrypt(args) => cli::encrypt::run(args).await,
    }
}
