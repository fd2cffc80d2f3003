//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (policies, ports, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Watches a target and supervises the restarted child

pub mod watch;

pub use watch::{
    EventLevel, EventLoop, Flow, LoopState, SessionEvent, Supervisor, WatchMode, WatchOptions,
    WatchPlan, WatchUseCase,
};
