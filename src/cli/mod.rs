//! CLI definitions.

pub mod check;
pub mod fetch;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bawi")]
#[command(version)]
#[command(about = "Unified task dashboard: Slack + Gmail + Calendar + AI summaries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one provider and print the raw JSON payload to stdout
    Fetch {
        provider: Provider,
        /// Slack channel id (defaults to SLACK_CHANNEL / settings / C123456)
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Summarize text read from stdin
    Summarize,
    /// Report which providers are configured
    Check,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Provider {
    Slack,
    Emails,
    Calendar,
}
