//! Configuration module for rld
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (RLD_*)
//! 3. `--config <file>` or project config (`<root>/.rld.toml`)
//! 4. User config (`<config dir>/rld/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, RunConfig, WatchConfig};
