//! Common test utilities for rld CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus a runner for the binary
//! - `Session`: A live `rld` process with line-by-line access to its stdout

#![allow(dead_code)]

pub mod env;

pub use env::*;
