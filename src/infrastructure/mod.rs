//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Watch-set enumeration
//! - `input/` - Event-loop producers (notify, stdin, signals)
//! - `process/` - Process-group launcher

pub mod fs;
pub mod input;
pub mod process;

// Re-export for convenience
pub use fs::{scan_tree, ScanReport};
pub use input::{install_termination_handler, spawn_stdin_trigger, ChangeSource};
pub use process::ProcessGroupLauncher;
