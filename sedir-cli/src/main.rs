//! Sedir CLI - Command-line interface
//!
//! Serves the directory homepage and builds shareable search links.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sedir")]
#[command(about = "Ottawa's social enterprise directory")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle_command(cli.command).await
}
