//! Configuration file loading for wifi-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./wifi-chat.toml` or `./.wifi-chat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/wifi-chat/config.toml`
//! 4. Fallback: `~/.config/wifi-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileChatConfig, FileConfig};
pub use loader::ConfigLoader;
