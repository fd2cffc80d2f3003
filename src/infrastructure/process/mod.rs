//! Process Launching
//!
//! Concrete implementations of the TreeLauncher port.

mod group;

pub use group::{GroupHandle, ProcessGroupLauncher};
