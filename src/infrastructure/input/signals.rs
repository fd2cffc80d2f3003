//! SIGINT/SIGTERM handling
//!
//! `ctrlc` runs the handler on its own thread; the handler only posts
//! `Terminate` into the loop, which kills the child before returning.

use std::sync::mpsc::Sender;

use crate::domain::value_objects::LoopInput;
use crate::error::{RldError, RldResult};

/// Install the process-wide termination handler. Can only succeed once.
pub fn install_termination_handler(tx: Sender<LoopInput>) -> RldResult<()> {
    ctrlc::set_handler(move || {
        let _ = tx.send(LoopInput::Terminate);
    })
    .map_err(|e| RldError::SignalHandler {
        message: e.to_string(),
    })
}
