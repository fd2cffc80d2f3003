//! The single-threaded event loop
//!
//! Owns the debouncer and the supervisor. Producers only post `LoopInput`s;
//! every state change happens here, in arrival order.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use crate::config::WatchConfig;
use crate::domain::policies::{Armed, Debouncer, Settle};
use crate::domain::ports::TreeLauncher;
use crate::domain::value_objects::{ChangeEvent, ChangeKind, LaunchCommand, LoopInput};
use crate::error::{RldError, RldResult};

use super::event::SessionEvent;
use super::supervisor::Supervisor;

/// Observable loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Debouncing,
    ShuttingDown,
}

/// Whether the loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct EventLoop<L: TreeLauncher> {
    supervisor: Supervisor<L>,
    debouncer: Debouncer,
    command: LaunchCommand,
    shutting_down: bool,
}

impl<L: TreeLauncher> EventLoop<L> {
    pub fn new(launcher: L, watch: &WatchConfig, command: LaunchCommand) -> Self {
        Self {
            supervisor: Supervisor::new(launcher),
            debouncer: Debouncer::new(watch.quiet_period(), watch.debounce_policy()),
            command,
            shutting_down: false,
        }
    }

    pub fn state(&self) -> LoopState {
        if self.shutting_down {
            LoopState::ShuttingDown
        } else if self.debouncer.is_pending() {
            LoopState::Debouncing
        } else {
            LoopState::Idle
        }
    }

    pub fn supervisor(&self) -> &Supervisor<L> {
        &self.supervisor
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Launch generation 1. A failure is reported but does not end the session.
    pub fn launch_initial<F>(&mut self, on_event: &F) -> RldResult<u64>
    where
        F: Fn(&SessionEvent),
    {
        self.supervisor.start(&self.command, on_event)
    }

    /// Block on `rx` until termination, a watch error, or every producer is gone.
    pub fn run<F>(&mut self, rx: &Receiver<LoopInput>, on_event: &F) -> RldResult<()>
    where
        F: Fn(&SessionEvent),
    {
        loop {
            let input = match self.debouncer.deadline() {
                None => match rx.recv() {
                    Ok(input) => Some(input),
                    Err(_) => break,
                },
                Some(deadline) => {
                    let timeout = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(timeout) {
                        Ok(input) => Some(input),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            };

            if self.step(input, Instant::now(), on_event)? == Flow::Exit {
                return Ok(());
            }
        }

        self.shutdown(on_event);
        Ok(())
    }

    /// Apply one wake-up at `now`.
    ///
    /// An expired deadline settles before `input` is applied, so an input
    /// arriving exactly at the deadline opens a new burst. `None` is a plain
    /// timer wake-up.
    pub fn step<F>(&mut self, input: Option<LoopInput>, now: Instant, on_event: &F) -> RldResult<Flow>
    where
        F: Fn(&SessionEvent),
    {
        if self.shutting_down {
            return Ok(Flow::Exit);
        }

        if let Some(settle) = self.debouncer.fire(now) {
            self.settle(settle, on_event);
        }

        match input {
            None => {}
            Some(LoopInput::Change(change)) => self.change(change, now, on_event),
            Some(LoopInput::ManualRestart) => {
                on_event(&SessionEvent::ManualRestart);
                self.debouncer.absorb();
                self.relaunch(on_event);
            }
            Some(LoopInput::Terminate) => {
                self.shutdown(on_event);
                return Ok(Flow::Exit);
            }
            Some(LoopInput::WatchError(message)) => {
                on_event(&SessionEvent::WatchError {
                    message: message.clone(),
                });
                self.shutdown(on_event);
                return Err(RldError::Watch { message });
            }
        }

        Ok(Flow::Continue)
    }

    fn change<F>(&mut self, change: ChangeEvent, now: Instant, on_event: &F)
    where
        F: Fn(&SessionEvent),
    {
        let path = change.path.display().to_string();
        match change.kind {
            ChangeKind::WriteLike => {}
            ChangeKind::Removed => {
                on_event(&SessionEvent::WatchLost { path });
                return;
            }
            ChangeKind::Other => {
                on_event(&SessionEvent::ChangeIgnored { path });
                return;
            }
        }

        match self.debouncer.arm(now) {
            Armed::Started => on_event(&SessionEvent::ChangeDetected {
                path,
                quiet_ms: self.debouncer.quiet_period().as_millis() as u64,
            }),
            Armed::Extended => on_event(&SessionEvent::BurstExtended { path }),
        }
    }

    fn settle<F>(&mut self, settle: Settle, on_event: &F)
    where
        F: Fn(&SessionEvent),
    {
        if settle.should_restart() {
            on_event(&SessionEvent::Settled {
                events: settle.events,
            });
            self.relaunch(on_event);
        } else {
            on_event(&SessionEvent::SettleAbsorbed {
                events: settle.events,
            });
        }
    }

    fn relaunch<F>(&mut self, on_event: &F)
    where
        F: Fn(&SessionEvent),
    {
        // Failures surface as LaunchFailed; the next settle or `rst` retries.
        let _ = self.supervisor.restart(&self.command, on_event);
    }

    fn shutdown<F>(&mut self, on_event: &F)
    where
        F: Fn(&SessionEvent),
    {
        if self.shutting_down {
            return;
        }
        self.shutting_down = true;
        self.debouncer.cancel();
        self.supervisor.stop(on_event);
        on_event(&SessionEvent::Shutdown);
    }
}
