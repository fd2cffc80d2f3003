//! Domain Layer
//!
//! Core types and rules of a watch session.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (WatchTarget, ChangeEvent, LoopInput)
//! - `policies/` - Decision rules (Debouncer)
//! - `ports/` - Interface definitions for infrastructure (TreeLauncher)

pub mod policies;
pub mod ports;
pub mod value_objects;
