//! Change notifications
//!
//! Only content writes count toward a restart. A removal (or a rename away)
//! of a watched file is kept apart as `Removed`: the per-file watch dies with
//! it, which is worth reporting. Everything else is `Other`.

use std::path::PathBuf;

use notify::event::{EventKind, ModifyKind, RenameMode};
use serde::Serialize;

/// Classification of a raw change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The file's content was written
    WriteLike,
    /// The file was removed or renamed away; its watch is gone
    Removed,
    /// Anything else; never arms the debouncer
    Other,
}

impl ChangeKind {
    /// Classify a `notify` event kind.
    ///
    /// Backends that cannot tell what was modified report `Modify(Any)`,
    /// which is treated as a write.
    pub fn classify(kind: &EventKind) -> Self {
        match kind {
            EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any) => {
                ChangeKind::WriteLike
            }
            EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
                ChangeKind::Removed
            }
            _ => ChangeKind::Other,
        }
    }

    pub fn is_write_like(&self) -> bool {
        matches!(self, ChangeKind::WriteLike)
    }
}

/// A single path-changed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::WriteLike)
    }

    pub fn other(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Other)
    }

    pub fn removed(path: impl Into<PathBuf>) -> Self {
        Self::new(path, ChangeKind::Removed)
    }
}
