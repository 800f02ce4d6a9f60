//! Waymark: a personal registry of filesystem shortcuts
//!
//! Short names are assigned to paths and later resolved from a possibly
//! abbreviated query. The library holds the resolution engine:
//!
//! - [`store`] - hierarchical shortcut tree (`labs/ai`) with persistent updates
//! - [`registry`] - flat name -> path view over the tree
//! - [`resolver`] - prefix matching with ambiguity detection, and the flat
//!   add / remove / rename / duplicate operations
//! - [`display`] - listings that shorten paths nested under other shortcuts
//!
//! Around it sit the collaborators the CLI uses: [`storage`] for the
//! registry file, [`env`] for home and working directory, and [`config`].
//!
//! # Example
//!
//! ```
//! use waymark::env::FixedEnvironment;
//! use waymark::paths::PathSpec;
//! use waymark::resolver::{self, MatchResult, NameAndPath};
//! use waymark::Registry;
//!
//! let env = FixedEnvironment::new("/home/u", "/home/u");
//! let registry = resolver::add(
//!     &Registry::new(),
//!     &NameAndPath::new("labs", PathSpec::Given("/home/u/labs".into())),
//!     &env,
//! )?;
//!
//! match resolver::navigate(&registry, "la") {
//!     MatchResult::Resolved { path, .. } => assert_eq!(path, "~/labs"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! # Ok::<(), waymark::WaymarkError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod env;
pub mod error;
pub mod fs_utils;
pub mod key;
pub mod paths;
pub mod registry;
pub mod resolver;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::WaymarkConfig;
pub use error::{Result, WaymarkError};
pub use key::Key;
pub use registry::Registry;
pub use resolver::{navigate, resolve, MatchResult, NameAndPath, RenamePair};
pub use storage::{JsonFileStore, RegistryStore};
pub use store::{NodeState, Store};
