use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fireside", about = "Conversation-record chat core (CLI)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a message to another user
    Send {
        /// Sending user
        #[arg(long)]
        from: String,
        /// Receiving user
        #[arg(long)]
        to: String,
        /// Message body
        text: String,
    },
    /// Open a conversation: print the thread and mark it read
    Open {
        #[arg(long)]
        user: String,
        #[arg(long)]
        peer: String,
    },
    /// Delete a message from both sides of a conversation
    Delete {
        #[arg(long)]
        user: String,
        #[arg(long)]
        peer: String,
        /// Author of the message to delete
        #[arg(long)]
        sender: String,
        /// Body of the message to delete
        #[arg(long)]
        text: String,
        /// Timestamp (epoch ms) of the message to delete
        #[arg(long)]
        timestamp: i64,
    },
    /// List conversation partners with unread state
    Contacts {
        #[arg(long)]
        user: String,
    },
}
