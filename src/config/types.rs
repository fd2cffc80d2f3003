//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policies::DebouncePolicy;
use crate::error::RldResult;

use super::loader::{self, ConfigWarning};

/// Watch configuration: what to watch and how to debounce it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period a burst of writes must be followed by before restarting
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Upper bound on how long a burst may postpone a restart (0 = unbounded)
    #[serde(default)]
    pub max_wait_ms: u64,

    /// File that must exist in a project root
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Extensions (without the dot) that count as source files
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Files whose name contains this marker are never watched
    #[serde(default = "default_test_marker")]
    pub test_marker: String,

    /// Gitignore-style patterns for directories to skip
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_wait_ms: 0,
            manifest: default_manifest(),
            extensions: default_extensions(),
            test_marker: default_test_marker(),
            skip: default_skip(),
        }
    }
}

impl WatchConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Debounce policy derived from `max_wait_ms`.
    pub fn debounce_policy(&self) -> DebouncePolicy {
        if self.max_wait_ms == 0 {
            DebouncePolicy::Trailing
        } else {
            DebouncePolicy::MaxWait(Duration::from_millis(self.max_wait_ms))
        }
    }

    /// Check whether `path` has one of the configured source extensions.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }

    /// Check whether a file name carries the test marker.
    pub fn is_test_file(&self, path: &Path) -> bool {
        if self.test_marker.is_empty() {
            return false;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.contains(&self.test_marker))
            .unwrap_or(false)
    }

    /// Human-readable list of accepted extensions, e.g. `.go`.
    pub fn extension_list(&self) -> String {
        self.extensions
            .iter()
            .map(|e| format!(".{}", e))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_manifest() -> String {
    "go.mod".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_test_marker() -> String {
    "_test".to_string()
}

fn default_skip() -> Vec<String> {
    vec!["vendor".to_string()]
}

/// Run configuration: how each generation is launched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the target
    #[serde(default = "default_run_args")]
    pub args: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_run_args(),
        }
    }
}

fn default_program() -> String {
    "go".to_string()
}

fn default_run_args() -> Vec<String> {
    vec!["run".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Resolve config for a session rooted at `root`.
    ///
    /// An explicit file must load; the implicit project and user files are
    /// optional. Environment overrides are applied on top.
    pub fn resolve(
        explicit: Option<&Path>,
        root: &Path,
    ) -> RldResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, root)
    }
}
