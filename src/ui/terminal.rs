use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub supports_color: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stderr_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        stdout_tty,
        stderr_tty,
        supports_color: stdout_tty && !term_is_dumb && !no_color,
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn tty_supports_color() {
        let caps = detect_capabilities_impl(env(&[("TERM", "xterm-256color")]), true, true);
        assert!(caps.supports_color);
        assert!(!caps.is_ci);
    }

    #[test]
    fn no_color_disables_color() {
        let caps = detect_capabilities_impl(env(&[("NO_COLOR", "1")]), true, true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn dumb_term_disables_color() {
        let caps = detect_capabilities_impl(env(&[("TERM", "dumb")]), true, true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn pipe_disables_color() {
        let caps = detect_capabilities_impl(env(&[]), false, true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn ci_is_detected() {
        let caps = detect_capabilities_impl(env(&[("GITHUB_ACTIONS", "true")]), false, false);
        assert!(caps.is_ci);
    }
}
