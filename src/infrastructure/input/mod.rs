//! Event-loop producers
//!
//! Each producer runs on its own thread and only ever sends `LoopInput`s.

mod change_source;
mod manual_trigger;
mod signals;

pub use change_source::ChangeSource;
pub use manual_trigger::{spawn_manual_trigger, spawn_stdin_trigger, RESTART_COMMAND};
pub use signals::install_termination_handler;
