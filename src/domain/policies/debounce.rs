//! Debounce policy
//!
//! Coalesces a burst of write notifications into one settle. The debouncer
//! owns no timer thread: the event loop asks for [`Debouncer::deadline`]
//! before it blocks and calls [`Debouncer::fire`] after it wakes. `fire` only
//! settles against the *current* deadline, so a wake-up computed from a
//! deadline that was re-armed in the meantime is discarded instead of
//! producing a second restart.

use std::time::{Duration, Instant};

/// When a pending burst is allowed to settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebouncePolicy {
    /// Re-arm on every write; a file that never stops changing never settles.
    #[default]
    Trailing,
    /// Like `Trailing`, but a burst settles at most this long after it began.
    MaxWait(Duration),
}

/// Outcome of arming the debouncer with a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Armed {
    /// First write of a new burst
    Started,
    /// Write extended a pending burst
    Extended,
}

/// A burst that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    /// Number of writes coalesced into this burst
    pub events: usize,
    /// A manual restart already covered this burst; no restart is due
    pub absorbed: bool,
}

impl Settle {
    pub fn should_restart(&self) -> bool {
        !self.absorbed
    }
}

#[derive(Debug, Clone, Copy)]
struct Burst {
    started: Instant,
    deadline: Instant,
    events: usize,
    absorbed: bool,
}

/// Single-owner debounce state: idle, or one pending burst with a deadline.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    policy: DebouncePolicy,
    pending: Option<Burst>,
}

impl Debouncer {
    pub fn new(quiet: Duration, policy: DebouncePolicy) -> Self {
        Self {
            quiet,
            policy,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Record a write at `now`, starting or extending the pending burst.
    pub fn arm(&mut self, now: Instant) -> Armed {
        match self.pending.as_mut() {
            Some(burst) => {
                burst.events += 1;
                // Content written after a manual restart was not seen by it.
                burst.absorbed = false;
                burst.deadline = next_deadline(self.policy, burst.started, now + self.quiet);
                Armed::Extended
            }
            None => {
                self.pending = Some(Burst {
                    started: now,
                    deadline: next_deadline(self.policy, now, now + self.quiet),
                    events: 1,
                    absorbed: false,
                });
                Armed::Started
            }
        }
    }

    /// Drop the pending burst without settling it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Mark the pending burst as already handled by a manual restart.
    ///
    /// The burst stays pending so further writes keep extending it, but its
    /// settle will not ask for another restart.
    pub fn absorb(&mut self) {
        if let Some(burst) = self.pending.as_mut() {
            burst.absorbed = true;
        }
    }

    /// Deadline of the pending burst, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|burst| burst.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Settle the pending burst if its deadline has been reached.
    ///
    /// Reaching the deadline exactly counts as settled.
    pub fn fire(&mut self, now: Instant) -> Option<Settle> {
        let burst = self.pending?;
        if now < burst.deadline {
            return None;
        }
        self.pending = None;
        Some(Settle {
            events: burst.events,
            absorbed: burst.absorbed,
        })
    }
}

fn next_deadline(policy: DebouncePolicy, started: Instant, trailing: Instant) -> Instant {
    match policy {
        DebouncePolicy::Trailing => trailing,
        DebouncePolicy::MaxWait(max_wait) => trailing.min(started + max_wait),
    }
}
