//! File System
//!
//! Enumeration of the watch set from a project root.

mod scan;

pub use scan::{scan_tree, ScanReport};
