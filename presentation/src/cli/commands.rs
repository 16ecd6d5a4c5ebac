//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for translated messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable summary
    Pretty,
    /// The raw response payload as JSON
    Json,
}

/// CLI arguments for nlq
#[derive(Parser, Debug)]
#[command(name = "nlq")]
#[command(author, version, about = "Natural-language queries against a federated GraphQL gateway")]
#[command(long_about = r#"
nlq turns free-text requests ("show me electronics products", "orders for
Alice") into GraphQL operations against a federated gateway.

Each message is classified into one of a fixed set of tools, either by an AI
classifier or by keyword rules, rendered into a parameterized GraphQL
document, executed, and returned as a uniform JSON payload.

Configuration files are loaded from (in priority order):
1. NLQ_* environment variables (e.g. NLQ_GATEWAY__URL)
2. --config <path>     Explicit config file
3. ./nlq.toml          Project-level config
4. ~/.config/nlq/config.toml   Global config

Example:
  nlq serve --port 5001
  nlq ask "show me electronics products"
  nlq -o json ask "orders for Alice"
  nlq tools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (/api/chat, /api/health, /api/tools)
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Translate and execute a single message
    Ask {
        /// The message, e.g. "list gold customers"
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// List the supported tools
    Tools,
}

impl Command {
    /// The message for `ask`, with its words joined
    pub fn message(&self) -> Option<String> {
        match self {
            Command::Ask { message } => Some(message.join(" ")),
            _ => None,
        }
    }
}

/// Map `-v` occurrences to a tracing filter directive.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
