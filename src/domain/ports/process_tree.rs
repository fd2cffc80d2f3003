//! Process tree port - "can isolate and terminate a process tree"
//!
//! The supervisor only needs to launch a command so that it and everything
//! it spawns can be killed as one unit. Process groups, job objects or
//! cgroups all satisfy this; tests use an in-memory recorder.

use std::io;

use crate::domain::value_objects::LaunchCommand;

/// Handle to one launched, isolated process tree.
pub trait TreeHandle {
    /// OS identifier shown to the user (pid of the group leader).
    fn id(&self) -> u32;
}

/// Launches commands as isolated process trees and kills them as a whole.
pub trait TreeLauncher {
    type Handle: TreeHandle;

    /// Start `command` with inherited stdout/stderr in its own tree.
    ///
    /// Must return as soon as the process is spawned.
    fn launch(&mut self, command: &LaunchCommand) -> io::Result<Self::Handle>;

    /// Forcefully kill every process in the tree.
    ///
    /// A tree that has already exited is not an error. Implementations must
    /// not wait for the processes to exit.
    fn terminate(&mut self, handle: Self::Handle) -> io::Result<()>;
}
