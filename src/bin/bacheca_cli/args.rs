//! Command-line surface for `bacheca-cli`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bacheca-cli", version, about = "Bacheca messages API CLI", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. <http://127.0.0.1:3000>
    #[arg(long, env = "BACHECA_SITE_URL")]
    pub site: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Message management (list/get/create)
    Messages(MessagesArgs),
}

#[derive(Parser, Debug)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub action: MessagesCmd,
}

#[derive(Subcommand, Debug)]
pub enum MessagesCmd {
    /// List all messages
    List,
    /// Fetch a single message by id
    Get {
        #[arg(value_name = "ID")]
        id: i64,
    },
    /// Create a message from inline text or a file
    Create {
        /// Message content
        #[arg(long)]
        content: Option<String>,
        /// Read message content from file
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,
    },
}
