use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "view-helpers")]
#[command(about = "Display formatting helpers for error-tracking views")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Abbreviate a count, e.g. 1500 -> 1.5k
    Count { value: i64 },

    /// Format a duration given in milliseconds
    Duration { millis: f64 },

    /// Relative time for an RFC 3339 timestamp
    Since {
        timestamp: Option<String>,

        /// Reference time (defaults to the current time)
        #[arg(long)]
        now: Option<String>,
    },

    /// Format a timestamp in the configured timezone
    Date {
        timestamp: String,

        #[arg(long)]
        format: Option<String>,
    },

    /// Insert soft-wrap markers into a long string
    Wrap {
        text: String,

        #[arg(long, default_value = "10")]
        every: usize,
    },

    /// Truncate text to a maximum number of characters
    Truncate { text: String, length: usize },

    /// Integer percentage of value over total
    Percent { value: u64, total: u64 },

    /// Percent-encode a value for use in a URL
    Quote {
        value: String,

        #[arg(long, default_value = "")]
        safe: String,
    },

    /// Last segment of a path
    Basename { path: String },

    /// Gravatar URL for an email address
    Gravatar {
        email: String,

        #[arg(long)]
        size: Option<u32>,

        #[arg(long)]
        default: Option<String>,
    },

    /// Check whether a newer release is available
    Version {
        current: String,

        #[arg(long)]
        latest: Option<String>,
    },
}
