//! rld - watch a Go project and restart it on change
//!
//! Write bursts are debounced into a single restart; each restart kills the
//! previous program's whole process group before launching the next one.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{SessionEvent, WatchOptions, WatchUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::value_objects::{LaunchCommand, WatchTarget};
pub use error::{RldError, RldResult};
