//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change;
mod input;
mod skip_patterns;
mod watch_target;

pub use change::{ChangeEvent, ChangeKind};
pub use input::LoopInput;
pub use skip_patterns::{SkipPatterns, SKIP_FILE};
pub use watch_target::{LaunchCommand, WatchTarget};
