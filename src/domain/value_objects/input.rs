//! Messages posted into the event loop by its producers

use super::change::ChangeEvent;

/// Everything the event loop reacts to arrives as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopInput {
    /// The change source saw a path change
    Change(ChangeEvent),
    /// The change source failed
    WatchError(String),
    /// Operator asked for an immediate restart
    ManualRestart,
    /// SIGINT/SIGTERM
    Terminate,
}
