//! Session event types

use serde::Serialize;

/// Which kind of target a session watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchMode {
    Directory,
    File,
}

/// How loud an event is; `Debug` events need `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventLevel {
    Normal,
    Debug,
}

/// Everything a watch session reports, in order, through its callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Target classified
    WatchStarted { path: String, mode: WatchMode },
    /// Trailing arguments given for a directory target
    ArgsIgnored { args: Vec<String> },
    /// Directory not entered during enumeration
    DirectorySkipped { path: String },
    /// File registered with the change source
    Watching { path: String },
    /// File enumerated but not registered
    NotWatched { path: String },
    /// First write of a burst
    ChangeDetected { path: String, quiet_ms: u64 },
    /// Write that re-armed a pending burst
    BurstExtended { path: String },
    /// Non-write notification
    ChangeIgnored { path: String },
    /// A watched file was removed or replaced; it is no longer watched
    WatchLost { path: String },
    /// Burst settled; a restart follows
    Settled { events: usize },
    /// Burst settled but a manual restart already covered it
    SettleAbsorbed { events: usize },
    /// Operator typed `rst`
    ManualRestart,
    /// Killing a generation's process group
    Stopping { pid: u32, generation: u64 },
    /// Kill failed for a reason other than the group being gone
    StopFailed { pid: u32, message: String },
    /// About to spawn a generation
    Launching { cmdline: String },
    /// Generation spawned
    Launched { pid: u32, generation: u64 },
    /// Spawn failed; the session keeps watching
    LaunchFailed { cmdline: String, message: String },
    /// The change source failed; the session ends
    WatchError { message: String },
    /// Session over
    Shutdown,
}

impl SessionEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            SessionEvent::NotWatched { .. }
            | SessionEvent::BurstExtended { .. }
            | SessionEvent::ChangeIgnored { .. }
            | SessionEvent::WatchLost { .. }
            | SessionEvent::SettleAbsorbed { .. }
            | SessionEvent::StopFailed { .. }
            | SessionEvent::Launched { .. } => EventLevel::Debug,
            _ => EventLevel::Normal,
        }
    }

    /// Events that belong on stderr.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            SessionEvent::LaunchFailed { .. }
                | SessionEvent::WatchError { .. }
                | SessionEvent::StopFailed { .. }
        )
    }

    /// Convert to a JSON string with a `"command": "rld"` field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("rld"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
