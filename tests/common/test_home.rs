//! Isolated environment for running the waymark binary
//!
//! Every `TestHome` owns a temp directory laid out as:
//!
//! ```text
//! <tmp>/home/          HOME for the child process
//! <tmp>/home/work/     working directory for the child process
//! <tmp>/shortcuts.json registry (WAYMARK_REGISTRY)
//! <tmp>/config.toml    config (WAYMARK_CONFIG)
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestHome {
    dir: TempDir,
    root: PathBuf,
}

impl TestHome {
    /// Create an empty environment with no registry file yet
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // The child's cwd comes back canonical, so HOME must be too
        let root = dir.path().canonicalize().expect("Failed to canonicalize temp dir");
        fs::create_dir_all(root.join("home/work")).expect("Failed to create home");
        Self { dir, root }
    }

    /// Environment seeded with the given registry entries
    pub fn with_shortcuts(entries: &[(&str, &str)]) -> Self {
        let home = Self::new();
        let map: BTreeMap<&str, &str> = entries.iter().copied().collect();
        fs::write(
            home.registry_path(),
            serde_json::to_string_pretty(&map).expect("Failed to encode registry"),
        )
        .expect("Failed to write registry");
        home
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn home_str(&self) -> String {
        self.home().to_string_lossy().to_string()
    }

    pub fn work(&self) -> PathBuf {
        self.home().join("work")
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root.join("shortcuts.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Write the config file
    pub fn write_config(&self, content: &str) -> &Self {
        fs::write(self.config_path(), content).expect("Failed to write config");
        self
    }

    /// Registry file contents as a map (empty if the file does not exist)
    pub fn shortcuts(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(self.registry_path()) {
            Ok(content) => serde_json::from_str(&content).expect("Registry is not valid JSON"),
            Err(_) => BTreeMap::new(),
        }
    }

    /// Run the waymark binary in this environment
    pub fn run_cli(&self, args: &[&str]) -> Output {
        self.run_cli_in(&self.work(), args)
    }

    /// Run the waymark binary from a specific working directory
    pub fn run_cli_in(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_waymark"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home())
            .env("WAYMARK_REGISTRY", self.registry_path())
            .env("WAYMARK_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run waymark")
    }

    /// Run and expect the given exit code, return stdout
    pub fn run_cli_code(&self, args: &[&str], code: i32) -> String {
        let output = self.run_cli(args);
        assert_eq!(
            output.status.code(),
            Some(code),
            "waymark {:?} exited with {:?}\nstdout:\n{}\nstderr:\n{}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run and expect failure with the given exit code, return stderr
    pub fn run_cli_failure(&self, args: &[&str], code: i32) -> String {
        let output = self.run_cli(args);
        assert_eq!(
            output.status.code(),
            Some(code),
            "waymark {:?} should have failed with {}\nstderr:\n{}",
            args,
            code,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
