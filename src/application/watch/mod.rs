//! Watch Use Case
//!
//! Watches a Go project (or a single file), debounces write bursts and keeps
//! exactly one child generation running, restarting it after each burst.
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Validates the target, builds the watch set, wires producers
//! - `EventLoop` - Single owner of the debouncer and the supervisor
//! - `Supervisor` - Launches and kills child generations through a `TreeLauncher`
//! - `SessionEvent` - Everything the session reports, rendered by the binary
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(WatchOptions { target, config });
//! use_case.start(|event| println!("{}", event.to_json()))?;
//! ```

mod event;
mod event_loop;
mod supervisor;
mod use_case;


pub use event::{EventLevel, SessionEvent, WatchMode};
pub use event_loop::{EventLoop, Flow, LoopState};
pub use supervisor::Supervisor;
pub use use_case::{WatchOptions, WatchPlan, WatchUseCase};
