//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for wifi-chat
#[derive(Parser, Debug)]
#[command(name = "wifi-chat")]
#[command(author, version, about = "Ask the campus WiFi assistant from the terminal")]
#[command(long_about = r#"
wifi-chat sends your question to the assistant's chat endpoint and prints
the answer.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./wifi-chat.toml    Project-level config
3. ~/.config/wifi-chat/config.toml   Global config

Example:
  wifi-chat "Quin és l'AP amb menys intensitat de camp?"
  wifi-chat --endpoint http://10.0.0.5:8000/api/chat --chat
  wifi-chat --check
"#)]
pub struct Cli {
    /// The question to send (omit to start interactive chat)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Chat endpoint URL (overrides config)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides config; default waits indefinitely)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Probe the backend's /health route and exit
    #[arg(long)]
    pub check: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the busy spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Interactive mode is the default when no question is given
    pub fn is_interactive(&self) -> bool {
        self.chat || self.question.is_none()
    }
}
