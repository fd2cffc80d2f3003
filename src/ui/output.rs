use rld::config::ConfigWarning;

use crate::ui::theme::{colors, paint, TAG};

pub fn format_config_warning(warning: &ConfigWarning, supports_color: bool) -> String {
    let tag = paint(TAG, colors::WARNING, supports_color);
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut text = format!("{} unknown config key '{}' in {}", tag, warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        text.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    text
}

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool, supports_color: bool) {
    for w in warnings {
        if json {
            let _ = crate::ui::json::emit_value(serde_json::json!({
                "event": "config_warning",
                "command": "rld",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        } else {
            eprintln!("{}", format_config_warning(w, supports_color));
        }
    }
}
