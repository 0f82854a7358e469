//! CLI definitions for ChronoLog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chronolog_config::DEFAULT_CONFIG_PATH;

/// ChronoLog CLI.
#[derive(Parser)]
#[command(name = "chronolog")]
#[command(about = "Markdown memo notes with YAML preambles")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path, relative to the working directory
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Working directory (workspace root)
    #[arg(short, long, global = true)]
    pub work_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the workspace data directories
    Init,

    /// Save a new memo
    New {
        /// Markdown file to read (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Replace the body of an existing memo
    Edit {
        /// Memo ID
        id: String,

        /// Markdown file to read (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print a memo
    Show {
        /// Memo ID
        id: String,

        /// Print the stored file, preamble included
        #[arg(long)]
        raw: bool,
    },

    /// List the most recently modified memos
    List {
        /// Maximum number of memos (default: from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Decode a timeline document into records
    Timeline {
        /// Path to the timeline document
        path: PathBuf,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
