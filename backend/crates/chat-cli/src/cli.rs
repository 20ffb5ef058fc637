use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chat")]
#[command(about = "Command-line client for the chat server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the address in the local chat config)
    #[arg(long, global = true, env = "CHAT_SERVER_URL")]
    pub(crate) server: Option<String>,

    /// Session token from `chat login`
    #[arg(long, global = true, env = "CHAT_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
