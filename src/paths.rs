//! Resolution of user-supplied paths before they enter the registry.
//!
//! Shortcuts always store absolute paths (or `~`-relative ones); anything
//! relative on the command line is anchored at the caller's working
//! directory first.

use std::path::{Component, Path, PathBuf};

use crate::env::{contract_home, Environment, HOME_MARKER};
use crate::error::Result;

/// Where a new shortcut should point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// The caller's current working directory at execution time
    Default,
    /// An explicit path, absolute or relative to the working directory
    Given(String),
}

impl PathSpec {
    pub fn from_arg(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::Given(p.to_string()),
            None => Self::Default,
        }
    }
}

/// Resolve a [`PathSpec`] to the form stored in the registry:
/// absolute, lexically normalized and with the home directory contracted
/// to `~`.
///
/// # Examples
///
/// ```
/// use waymark::env::FixedEnvironment;
/// use waymark::paths::{resolve_for_storage, PathSpec};
///
/// let env = FixedEnvironment::new("/home/u", "/home/u/work");
/// let stored = resolve_for_storage(&PathSpec::Given("../labs".into()), &env)?;
/// assert_eq!(stored, "~/labs");
/// # Ok::<(), waymark::WaymarkError>(())
/// ```
pub fn resolve_for_storage(spec: &PathSpec, env: &dyn Environment) -> Result<String> {
    let absolute = match spec {
        PathSpec::Default => env.current_dir()?,
        PathSpec::Given(p) => resolve_path_or_cwd(p, env)?,
    };
    let normalized = normalize(Path::new(&absolute));
    let home = env.home_dir();
    Ok(contract_home(
        &normalized.to_string_lossy(),
        home.as_deref(),
    ))
}

/// Resolve a path string, treating relative paths as relative to the
/// environment's working directory.
///
/// - Absolute paths and `~`-paths are returned as-is
/// - Relative paths are joined with the working directory
pub fn resolve_path_or_cwd(path: &str, env: &dyn Environment) -> Result<String> {
    if path == HOME_MARKER || path.starts_with("~/") {
        let home = env.home_dir();
        return Ok(crate::env::expand_home(path, home.as_deref()));
    }
    let p = Path::new(path);
    if p.is_absolute() {
        Ok(path.to_string())
    } else {
        let cwd = env.current_dir()?;
        Ok(Path::new(&cwd).join(p).to_string_lossy().to_string())
    }
}

/// Lexically drop `.` components, fold `..` into the parent and strip
/// trailing separators. Does not touch the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
