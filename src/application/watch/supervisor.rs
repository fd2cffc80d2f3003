//! Child generation supervisor

use crate::domain::ports::{TreeHandle, TreeLauncher};
use crate::domain::value_objects::LaunchCommand;
use crate::error::{RldError, RldResult};

use super::event::SessionEvent;

struct Generation<H> {
    number: u64,
    handle: H,
}

/// Owns the current child generation. At most one is ever live.
pub struct Supervisor<L: TreeLauncher> {
    launcher: L,
    current: Option<Generation<L::Handle>>,
    launched: u64,
}

impl<L: TreeLauncher> Supervisor<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            current: None,
            launched: 0,
        }
    }

    /// Launch a new generation, stopping the current one first.
    ///
    /// Returns the new generation number. A failed launch leaves no
    /// generation recorded.
    pub fn start<F>(&mut self, command: &LaunchCommand, on_event: &F) -> RldResult<u64>
    where
        F: Fn(&SessionEvent),
    {
        self.stop(on_event);

        on_event(&SessionEvent::Launching {
            cmdline: command.to_string(),
        });

        match self.launcher.launch(command) {
            Ok(handle) => {
                self.launched += 1;
                let number = self.launched;
                on_event(&SessionEvent::Launched {
                    pid: handle.id(),
                    generation: number,
                });
                self.current = Some(Generation { number, handle });
                Ok(number)
            }
            Err(source) => {
                on_event(&SessionEvent::LaunchFailed {
                    cmdline: command.to_string(),
                    message: source.to_string(),
                });
                Err(RldError::Launch {
                    command: command.to_string(),
                    source,
                })
            }
        }
    }

    /// Kill the current generation's tree, if any. Never waits for exit.
    pub fn stop<F>(&mut self, on_event: &F)
    where
        F: Fn(&SessionEvent),
    {
        let Some(Generation { number, handle }) = self.current.take() else {
            return;
        };
        let pid = handle.id();
        on_event(&SessionEvent::Stopping {
            pid,
            generation: number,
        });
        if let Err(err) = self.launcher.terminate(handle) {
            on_event(&SessionEvent::StopFailed {
                pid,
                message: err.to_string(),
            });
        }
    }

    pub fn restart<F>(&mut self, command: &LaunchCommand, on_event: &F) -> RldResult<u64>
    where
        F: Fn(&SessionEvent),
    {
        self.stop(on_event);
        self.start(command, on_event)
    }

    pub fn current_generation(&self) -> Option<u64> {
        self.current.as_ref().map(|g| g.number)
    }

    pub fn current_pid(&self) -> Option<u32> {
        self.current.as_ref().map(|g| g.handle.id())
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
