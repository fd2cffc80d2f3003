//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod process_tree;

pub use process_tree::{TreeHandle, TreeLauncher};
