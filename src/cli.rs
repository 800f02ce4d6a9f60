//! CLI argument definitions using clap
//!
//! `waymark <query>` resolves a shortcut; everything else is a subcommand.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Use and manage filesystem shortcuts
#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(about = "Use and manage filesystem shortcuts")]
#[command(version)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Shortcut name or unambiguous prefix to resolve
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registry file (overrides the config file)
    #[arg(long, value_name = "FILE", env = "WAYMARK_REGISTRY", global = true)]
    pub registry: Option<PathBuf>,

    /// Config file
    #[arg(long, value_name = "FILE", env = "WAYMARK_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands for waymark
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a shortcut (overwrites an existing one)
    #[command(visible_aliases = ["new", "a"])]
    Add(AddArgs),

    /// Remove a shortcut
    #[command(visible_aliases = ["delete", "x"])]
    Remove(RemoveArgs),

    /// Rename a shortcut
    #[command(visible_alias = "r")]
    Rename(PairArgs),

    /// Copy a shortcut under a new name
    #[command(visible_aliases = ["duplicate", "cp"])]
    Copy(PairArgs),

    /// List all shortcuts
    #[command(visible_alias = "ls")]
    List,

    /// Work with nested shortcut keys (e.g. labs/ai)
    Tree(TreeArgs),

    /// Manage waymark configuration
    Config(ConfigArgs),
}

// ============================================
// Flat Registry Subcommands
// ============================================

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Shortcut name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Target path (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Shortcut name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Only remove if the shortcut points at this path
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for rename and copy
#[derive(Args, Debug)]
pub struct PairArgs {
    /// Existing shortcut name
    #[arg(value_name = "OLD")]
    pub old_name: String,

    /// New shortcut name
    #[arg(value_name = "NEW")]
    pub new_name: String,
}

// ============================================
// Tree Subcommand
// ============================================

/// Arguments for the tree command
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(subcommand)]
    pub operation: TreeOperation,
}

/// Operations on hierarchical keys
#[derive(Subcommand, Debug)]
pub enum TreeOperation {
    /// Insert a nested shortcut; fails if the key already has a path
    Insert {
        /// Key such as labs/ai
        #[arg(value_name = "KEY")]
        key: String,

        /// Target path (defaults to the current directory)
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },

    /// Look up the exact key
    Lookup {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Remove the path at a key, keeping nested shortcuts
    Remove {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Show the shortcut tree
    Show {
        /// Only show the subtree under this key
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
}

// ============================================
// Config Subcommand
// ============================================

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

/// Config operations
#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Show current configuration
    Show,

    /// Print one configuration value
    Get {
        /// Configuration key (e.g., display.min_prefix_len)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., display.min_prefix_len)
        key: String,
        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset,

    /// Print the config file location
    Path,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}
