//! Property tests for the debouncer.

use std::cell::Cell;
use std::io;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use rld::application::{EventLoop, SessionEvent};
use rld::config::WatchConfig;
use rld::domain::policies::{DebouncePolicy, Debouncer};
use rld::domain::ports::{TreeHandle, TreeLauncher};
use rld::domain::value_objects::{ChangeEvent, LaunchCommand, LoopInput};

const QUIET_MS: u64 = 500;

struct NullHandle;

impl TreeHandle for NullHandle {
    fn id(&self) -> u32 {
        0
    }
}

/// Launcher that never starts anything.
struct NullLauncher;

impl TreeLauncher for NullLauncher {
    type Handle = NullHandle;

    fn launch(&mut self, _command: &LaunchCommand) -> io::Result<NullHandle> {
        Ok(NullHandle)
    }

    fn terminate(&mut self, _handle: NullHandle) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Write,
    Other,
}

/// Feed writes at the given offsets and let the loop wake up at every
/// deadline in between, the way the event loop does. Returns settle times.
fn settle_times(offsets: &[u64], policy: DebouncePolicy) -> Vec<u64> {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(QUIET_MS), policy);
    let mut settles = Vec::new();

    for &at in offsets {
        let now = t0 + Duration::from_millis(at);
        if let Some(deadline) = debouncer.deadline() {
            if deadline <= now && debouncer.fire(deadline).is_some() {
                settles.push((deadline - t0).as_millis() as u64);
            }
        }
        debouncer.arm(now);
    }

    if let Some(deadline) = debouncer.deadline() {
        if debouncer.fire(deadline).is_some() {
            settles.push((deadline - t0).as_millis() as u64);
        }
    }
    settles
}

fn offsets_from_gaps(gaps: &[u64]) -> Vec<u64> {
    let mut at = 0;
    gaps.iter()
        .map(|gap| {
            at += gap;
            at
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: writes spaced closer than the quiet period settle exactly once,
    /// one quiet period after the last write.
    #[test]
    fn property_close_writes_settle_once(
        gaps in proptest::collection::vec(0u64..QUIET_MS, 1..40)
    ) {
        let offsets = offsets_from_gaps(&gaps);
        let settles = settle_times(&offsets, DebouncePolicy::Trailing);

        prop_assert_eq!(settles, vec![offsets[offsets.len() - 1] + QUIET_MS]);
    }

    /// PROPERTY: writes spaced further apart than the quiet period each settle.
    #[test]
    fn property_spread_writes_settle_each(
        gaps in proptest::collection::vec((QUIET_MS + 1)..5_000u64, 1..40)
    ) {
        let offsets = offsets_from_gaps(&gaps);
        let settles = settle_times(&offsets, DebouncePolicy::Trailing);

        let expected: Vec<u64> = offsets.iter().map(|at| at + QUIET_MS).collect();
        prop_assert_eq!(settles, expected);
    }

    /// PROPERTY: under a max-wait cap no burst lasts longer than the cap.
    #[test]
    fn property_max_wait_bounds_every_burst(
        gaps in proptest::collection::vec(0u64..QUIET_MS, 1..60),
        max_wait in QUIET_MS..3_000u64,
    ) {
        let offsets = offsets_from_gaps(&gaps);
        let settles = settle_times(&offsets, DebouncePolicy::MaxWait(Duration::from_millis(max_wait)));

        let mut burst_start = offsets[0];
        for settle in &settles {
            prop_assert!(*settle <= burst_start + max_wait);
            // The next burst starts at the first write at or after this settle.
            if let Some(next) = offsets.iter().find(|at| **at >= *settle) {
                burst_start = *next;
            }
        }
        prop_assert!(!settles.is_empty());
    }

    /// PROPERTY: non-write notifications never move the deadline or settle.
    ///
    /// The same timeline is replayed twice through the event loop: once with
    /// the non-write notifications and once with plain timer wake-ups in their
    /// place.
    #[test]
    fn property_other_events_are_inert(
        steps in proptest::collection::vec(
            (prop_oneof![Just(Step::Write), Just(Step::Other)], 0u64..2_000),
            1..50,
        )
    ) {
        let t0 = Instant::now();
        let with_others = Cell::new(0usize);
        let writes_only = Cell::new(0usize);
        let on_with_others = |event: &SessionEvent| {
            if matches!(event, SessionEvent::Settled { .. }) {
                with_others.set(with_others.get() + 1);
            }
        };
        let on_writes_only = |event: &SessionEvent| {
            if matches!(event, SessionEvent::Settled { .. }) {
                writes_only.set(writes_only.get() + 1);
            }
        };

        let mut a = EventLoop::new(NullLauncher, &WatchConfig::default(), LaunchCommand::new("go"));
        let mut b = EventLoop::new(NullLauncher, &WatchConfig::default(), LaunchCommand::new("go"));
        let mut at = 0;

        for (step, gap) in steps {
            at += gap;
            let now = t0 + Duration::from_millis(at);
            match step {
                Step::Write => {
                    let change = LoopInput::Change(ChangeEvent::write("main.go"));
                    a.step(Some(change.clone()), now, &on_with_others).unwrap();
                    b.step(Some(change), now, &on_writes_only).unwrap();
                }
                Step::Other => {
                    let change = LoopInput::Change(ChangeEvent::other("main.go"));
                    a.step(Some(change), now, &on_with_others).unwrap();
                    b.step(None, now, &on_writes_only).unwrap();
                }
            }
            prop_assert_eq!(a.debouncer().deadline(), b.debouncer().deadline());
            prop_assert_eq!(with_others.get(), writes_only.get());
        }
    }
}
