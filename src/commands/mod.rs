//! Command modules for the waymark CLI
//!
//! Each module implements one top-level command:
//! - `resolve` - Resolve a query to a path (the default action)
//! - `list` - Show every shortcut
//! - `edit` - add / remove / rename / copy on the flat registry
//! - `tree` - insert / lookup / remove / show on nested keys
//! - `config` - Manage the configuration file
//!
//! Handlers take their `Args` from `cli.rs` and a shared `CommandContext`
//! and return a `Report`: the text to print plus the status that decides
//! the exit code. Mutating handlers persist the registry themselves.

pub mod config;
pub mod edit;
pub mod list;
pub mod resolve;
pub mod tree;

pub use config::run_config;
pub use edit::{run_add, run_copy, run_remove, run_rename};
pub use list::run_list;
pub use resolve::run_resolve;
pub use tree::run_tree;

use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::OutputFormat;
use crate::config::WaymarkConfig;
use crate::env::{expand_home, Environment, SystemEnvironment};
use crate::storage::{JsonFileStore, RegistryStore};

/// Shared context passed to all command handlers
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Loaded configuration
    pub config: WaymarkConfig,
    /// Where the configuration lives
    pub config_path: PathBuf,
    /// Registry persistence
    pub store: Box<dyn RegistryStore>,
    /// Home and working directory
    pub env: Box<dyn Environment>,
}

impl CommandContext {
    /// Context backed by the real environment and a JSON registry file
    pub fn new(
        format: OutputFormat,
        config: WaymarkConfig,
        config_path: PathBuf,
        registry_path: PathBuf,
    ) -> Self {
        Self {
            format,
            config,
            config_path,
            store: Box::new(JsonFileStore::new(registry_path)),
            env: Box::new(SystemEnvironment),
        }
    }

    /// Expand `~` for printing a path the caller will navigate to
    pub fn expand(&self, path: &str) -> String {
        let home = self.env.home_dir();
        expand_home(path, home.as_deref())
    }

    /// Render a JSON value or fall back to the text form
    fn render(&self, json_value: serde_json::Value, text: String) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&json_value).unwrap_or_default() + "\n"
            }
            OutputFormat::Text => text,
        }
    }
}

/// What a command did, for choosing the exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A path to navigate to was printed
    Resolved,
    /// Informational listing printed instead of a path
    Listing,
    /// The registry was (possibly) changed
    Updated,
    /// Anything else that succeeded
    Done,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Resolved | Self::Done => ExitCode::SUCCESS,
            Self::Listing => ExitCode::from(1),
            Self::Updated => ExitCode::from(2),
        }
    }
}

/// Output of a command handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub status: Status,
}

impl Report {
    pub fn new(output: String, status: Status) -> Self {
        Self { output, status }
    }
}
