// src/config.rs

use crate::core::upload::parse_field;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal console for the PrivGuard document analysis service", long_about = None)]
/// Command-line arguments
pub struct Cli {
    /// Base URL of the analysis service.
    #[arg(long, env = "PRIVGUARD_SERVER", default_value = DEFAULT_SERVER, global = true)]
    pub server: Url,

    /// Seconds between dashboard refreshes.
    #[arg(
        long,
        env = "PRIVGUARD_POLL_INTERVAL",
        default_value_t = DEFAULT_POLL_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub interval_secs: u64,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[arg(long, env = "PRIVGUARD_TIMEOUT", global = true)]
    pub timeout_secs: Option<u64>,

    /// Extra form field sent with every upload, as key=value. Repeatable.
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field, global = true)]
    pub fields: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive console (default).
    Tui,
    /// Upload one document and print the findings.
    Analyze {
        /// Document to analyze (png, jpg, jpeg, pdf or txt).
        file: PathBuf,
    },
    /// Print dashboard snapshots as they are polled.
    Dashboard {
        /// Print the first snapshot and exit.
        #[arg(long)]
        once: bool,
    },
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server: Url,
    pub poll_interval: Duration,
    pub request_timeout: Option<Duration>,
    pub extra_fields: Vec<(String, String)>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            server: cli.server.clone(),
            poll_interval: Duration::from_secs(cli.interval_secs),
            request_timeout: cli.timeout_secs.map(Duration::from_secs),
            extra_fields: cli.fields.clone(),
        }
    }
}
