use std::path::{Path, PathBuf};

use anyhow::Result;
use rld::application::{SessionEvent, WatchOptions, WatchUseCase};
use rld::config::Config;
use rld::domain::value_objects::WatchTarget;

use crate::cli::Cli;
use crate::ui::context::UiContext;

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.no_color);

    let target = WatchTarget::resolve(&cli.path(), cli.program_args())?;
    let (mut config, warnings) = Config::resolve(cli.config.as_deref(), &config_root(&target))?;
    crate::ui::output::print_config_warnings(&warnings, ui.json, ui.color);
    apply_cli_overrides(&mut config, cli);

    let use_case = WatchUseCase::new(WatchOptions { target, config });
    use_case.start(|event| render(&ui, event))?;

    Ok(())
}

/// Directory where the project config file is looked up.
fn config_root(target: &WatchTarget) -> PathBuf {
    match target {
        WatchTarget::Directory { root, .. } => root.clone(),
        WatchTarget::File { path, .. } => match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

/// CLI flags sit on top of env, file and defaults.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ms) = cli.debounce_ms {
        config.watch.debounce_ms = ms;
    }
    if let Some(ms) = cli.max_wait_ms {
        config.watch.max_wait_ms = ms;
    }
    config.watch.skip.extend(cli.skip.iter().cloned());
}

fn render(ui: &UiContext, event: &SessionEvent) {
    if !ui.shows(event) {
        return;
    }

    if ui.json {
        let _ = crate::ui::json::emit(event);
        return;
    }

    let timestamp = ui
        .timestamps()
        .then(|| chrono::Local::now().format("%H:%M:%S").to_string());
    let rendered =
        crate::ui::views::session::render_session_event(timestamp.as_deref(), event, ui.color);

    if event.is_error() {
        eprintln!("{rendered}");
    } else {
        println!("{rendered}");
    }
}
