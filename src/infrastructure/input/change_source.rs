//! Filesystem change source backed by `notify`
//!
//! Every path is registered once, non-recursively, before the event loop
//! starts. Notifications are forwarded as-is; classification happens here so
//! the loop only sees write-like vs other.

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::value_objects::{ChangeEvent, ChangeKind, LoopInput};
use crate::error::RldResult;

/// Live registration of the watch set. Dropping it releases every watch.
pub struct ChangeSource {
    _watcher: RecommendedWatcher,
}

impl ChangeSource {
    /// Register `paths` and start posting their changes to `tx`.
    pub fn start(paths: &[PathBuf], tx: Sender<LoopInput>) -> RldResult<Self> {
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| forward(res, &tx),
            Config::default(),
        )?;

        for path in paths {
            watcher.watch(path, RecursiveMode::NonRecursive)?;
        }

        Ok(Self { _watcher: watcher })
    }
}

fn forward(res: Result<Event, notify::Error>, tx: &Sender<LoopInput>) {
    match res {
        Ok(event) => {
            let kind = ChangeKind::classify(&event.kind);
            for path in event.paths {
                // A closed receiver means the loop is gone; nothing to do.
                let _ = tx.send(LoopInput::Change(ChangeEvent::new(path, kind)));
            }
        }
        Err(err) => {
            let _ = tx.send(LoopInput::WatchError(err.to_string()));
        }
    }
}
