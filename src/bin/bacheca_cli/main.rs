//! bacheca-cli: command-line client for the messages API.
//! Reuses infra http models for request/response shapes.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;

use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::messages;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;

    match cli.command {
        Commands::Messages(cmd) => messages::handle(&ctx, cmd.action).await?,
    }

    Ok(())
}
