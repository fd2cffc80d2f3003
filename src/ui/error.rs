use rld::RldError;

use crate::ui::theme::{colors, paint, TAG};

pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let tag = paint(TAG, colors::ERROR, supports_color);
    let mut text = format!("{} error: {}", tag, err);

    // Launch errors already carry their io cause in the message.
    if !matches!(err.downcast_ref::<RldError>(), Some(RldError::Launch { .. })) {
        for cause in err.chain().skip(1) {
            text.push_str(&format!("\n{}   caused by: {}", tag, cause));
        }
    }
    text
}

pub fn error_kind(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<RldError>() {
        Some(e) if e.is_configuration() => "configuration",
        Some(RldError::Watch { .. }) => "watch",
        Some(RldError::SignalHandler { .. }) => "signal",
        _ => "runtime",
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "rld",
            "kind": error_kind(err),
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit_value(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let supports_color = caps.stderr_tty && caps.supports_color;
    eprintln!("{}", format_error(err, supports_color));
}
