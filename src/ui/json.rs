use std::io::{self, Write};

use rld::application::SessionEvent;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &SessionEvent) -> io::Result<()> {
    out.write_all(event.to_json().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write an ad-hoc NDJSON object, for output that is not a session event.
pub fn write_value(out: &mut impl Write, value: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &SessionEvent) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

pub fn emit_value(value: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_value(&mut out, &value)
}
