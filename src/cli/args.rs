use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::config::DEFAULT_SESSION_NAME_SUFFIX;

/// Command line arguments for unsuspend
#[derive(Parser, Debug)]
#[command(
    name = "unsuspend",
    version = env!("CARGO_PKG_VERSION"),
    about = "Repair session exports from tab-suspension browser extensions",
    long_about = "Rewrites every suspended-tab placeholder entry of a session export back to its original URL and title, then renames the session. Entries that cannot be restored are kept unmodified."
)]
pub struct Args {
    /// Session export to repair. May be relative to the current directory
    #[arg(long)]
    pub in_file: PathBuf,

    /// Destination for the repaired session. May be relative to the current directory
    #[arg(long)]
    pub out_file: PathBuf,

    /// Suffix appended to the session title
    #[arg(long, default_value = DEFAULT_SESSION_NAME_SUFFIX)]
    pub session_name_suffix: String,

    /// Extension id to match by literal prefix; without it, any lowercase id is recognized
    #[arg(long)]
    pub extension_id: Option<String>,

    /// Log every skipped and unrestorable entry
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the summary
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl From<&Args> for crate::domain::config::RestoreConfig {
    fn from(args: &Args) -> Self {
        Self {
            session_name_suffix: args.session_name_suffix.clone(),
            extension_id: args.extension_id.clone(),
            verbose: args.verbose,
        }
    }
}
