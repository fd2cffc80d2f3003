use rld::application::{EventLevel, SessionEvent};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// How session output is rendered for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, no_color: bool) -> Self {
        Self::from_caps(json, verbose, no_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        no_color: bool,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = !json && !no_color && caps.supports_color && !caps.is_ci;
        Self {
            json,
            verbose,
            caps,
            color,
        }
    }

    /// Debug events need `-v`; JSON output carries everything.
    pub fn shows(&self, event: &SessionEvent) -> bool {
        self.json || self.verbose > 0 || event.level() == EventLevel::Normal
    }

    /// `-vv` adds a wall-clock timestamp to human lines.
    pub fn timestamps(&self) -> bool {
        !self.json && self.verbose > 1
    }
}
