//! chat - command-line client for the chat server
//!
//! # Examples
//!
//! ```bash
//! # Ask without an account
//! chat ask "What is a closure?"
//!
//! # Sign in, then keep history
//! export CHAT_TOKEN=$(chat login --email a@b.c --password secret | jq -r .token)
//! chat ask "And a future?"
//! chat history --pretty
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use chat_cli::{CliClientResult, Client};
use chat_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = match cli.server {
        Some(url) => url,
        None => match default_server_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Specify a server URL explicitly:");
                eprintln!("  chat --server http://127.0.0.1:8000 <command>");
                return ExitCode::FAILURE;
            }
        },
    };

    let client = Client::new(&server_url, cli.token.as_deref());

    let result: CliClientResult<Value> = match cli.command {
        Commands::Ask { message } => match client.ask(&message).await {
            Ok(outcome) => serde_json::to_value(outcome).map_err(Into::into),
            Err(e) => Err(e),
        },
        Commands::History => client.list_conversation().await,
        Commands::Clear => client.clear_conversation().await,
        Commands::Signup {
            email,
            password,
            name,
        } => client.signup(&email, &password, name.as_deref()).await,
        Commands::Login { email, password } => client.login(&email, &password).await,
        Commands::Profile => client.profile().await,
        Commands::Rename { name } => client.rename(name.as_deref()).await,
        Commands::DeleteAccount => client.delete_account().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Address the server binds to according to the local chat config
fn default_server_url() -> Result<String, chat_config::ConfigError> {
    let config = Config::load()?;
    Ok(format!("http://{}", config.bind_addr()))
}
