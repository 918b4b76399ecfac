//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI arguments
//! - [`Command`] - the `formats`, `detect` and `parse` subcommands
//!
//! # Example
//!
//! ```rust
//! use chatimport::cli::{Args, Command};
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatimport", "detect", "chat.txt"]);
//! assert!(matches!(args.command, Command::Detect { .. }));
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Detect and normalize chat exports (ChatLab JSON, QQ exporter JSON,
/// QQ desktop TXT).
#[derive(Parser, Debug, Clone)]
#[command(name = "chatimport")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatimport formats
    chatimport detect group.chatlab.json
    chatimport parse 聊天记录.txt --pretty
    chatimport parse export.json -o normalized.json

Set RUST_LOG=chatimport=debug to see which format was selected.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List supported formats in detection order
    Formats,

    /// Print the format a file is recognized as
    Detect {
        /// Path to the chat export
        file: PathBuf,
    },

    /// Parse a file and print the normalized result as JSON
    Parse {
        /// Path to the chat export
        file: PathBuf,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
