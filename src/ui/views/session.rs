use crossterm::style::Color;
use rld::application::{EventLevel, SessionEvent, WatchMode};

use crate::ui::theme::{colors, paint, TAG};

/// Render one event as a single `[rld]` line, without the trailing newline.
pub fn render_session_event(
    timestamp: Option<&str>,
    event: &SessionEvent,
    supports_color: bool,
) -> String {
    let tag = paint(TAG, tag_color(event), supports_color);
    let message = message(event);
    match timestamp {
        Some(ts) => format!(
            "{} {} {}",
            tag,
            paint(ts, colors::DIM, supports_color),
            message
        ),
        None => format!("{} {}", tag, message),
    }
}

fn tag_color(event: &SessionEvent) -> Color {
    if event.is_error() {
        return colors::ERROR;
    }
    match event {
        SessionEvent::ArgsIgnored { .. } => colors::WARNING,
        SessionEvent::Settled { .. } | SessionEvent::ManualRestart => colors::SUCCESS,
        _ if event.level() == EventLevel::Debug => colors::DIM,
        _ => colors::TAG,
    }
}

fn message(event: &SessionEvent) -> String {
    match event {
        SessionEvent::WatchStarted {
            path,
            mode: WatchMode::Directory,
        } => format!("directory detected: {}", path),
        SessionEvent::WatchStarted {
            path,
            mode: WatchMode::File,
        } => format!("file detected: {}", path),
        SessionEvent::ArgsIgnored { args } => {
            format!("ignoring arguments in directory mode: {}", args.join(" "))
        }
        SessionEvent::DirectorySkipped { path } => format!("skipping dir {}", path),
        SessionEvent::Watching { path } => format!("watching changes for {}", path),
        SessionEvent::NotWatched { path } => format!("not watching {}", path),
        SessionEvent::ChangeDetected { path, quiet_ms } => format!(
            "detected change in {}, waiting for {}ms to verify file closure",
            path, quiet_ms
        ),
        SessionEvent::BurstExtended { path } => format!("{} changed again, waiting", path),
        SessionEvent::ChangeIgnored { path } => format!("ignoring non-write change to {}", path),
        SessionEvent::WatchLost { path } => {
            format!("{} was removed or replaced, no longer watching it", path)
        }
        SessionEvent::Settled { .. } => "no further change detected, restarting...".to_string(),
        SessionEvent::SettleAbsorbed { events } => format!(
            "{} change(s) already picked up by manual restart",
            events
        ),
        SessionEvent::ManualRestart => "manual input requested, restarting...".to_string(),
        SessionEvent::Stopping { pid, .. } => format!("killing previous process: {}", pid),
        SessionEvent::StopFailed { pid, message } => {
            format!("failed to kill process {}: {}", pid, message)
        }
        SessionEvent::Launching { cmdline } => format!("exec: {}", cmdline),
        SessionEvent::Launched { pid, generation } => {
            format!("started process {} (generation {})", pid, generation)
        }
        SessionEvent::LaunchFailed { cmdline, message } => {
            format!("failed to launch '{}': {}", cmdline, message)
        }
        SessionEvent::WatchError { message } => format!("watch error: {}", message),
        SessionEvent::Shutdown => "stopped".to_string(),
    }
}
