//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::mpsc::channel;

use crate::config::Config;
use crate::domain::value_objects::{LaunchCommand, SkipPatterns, WatchTarget};
use crate::error::{RldError, RldResult};
use crate::infrastructure::{
    install_termination_handler, scan_tree, spawn_stdin_trigger, ChangeSource,
    ProcessGroupLauncher,
};

use super::event::{SessionEvent, WatchMode};
use super::event_loop::EventLoop;

/// Options for a watch session
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub target: WatchTarget,
    pub config: Config,
}

/// Everything resolved before the first launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchPlan {
    /// Paths registered with the change source
    pub paths: Vec<PathBuf>,
    /// Command every generation runs
    pub command: LaunchCommand,
}

/// Watch Use Case
///
/// Validates the target, builds the watch set, then supervises the child
/// until a termination signal or a watch error.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    /// Validate the target and enumerate the watch set.
    ///
    /// Nothing is launched or registered here; every configuration error
    /// surfaces before the first generation.
    pub fn prepare<F>(&self, on_event: &F) -> RldResult<WatchPlan>
    where
        F: Fn(&SessionEvent),
    {
        let WatchOptions { target, config } = &self.options;

        let paths = match target {
            WatchTarget::Directory { root, ignored_args } => {
                let manifest = root.join(&config.watch.manifest);
                if !manifest.is_file() {
                    return Err(RldError::MissingManifest {
                        root: root.clone(),
                        manifest: config.watch.manifest.clone(),
                    });
                }

                on_event(&SessionEvent::WatchStarted {
                    path: root.display().to_string(),
                    mode: WatchMode::Directory,
                });
                if !ignored_args.is_empty() {
                    on_event(&SessionEvent::ArgsIgnored {
                        args: ignored_args.clone(),
                    });
                }

                let skip = SkipPatterns::load(root, &config.watch.skip)?;
                let report = scan_tree(root, &config.watch, &skip)?;

                for dir in &report.skipped_dirs {
                    on_event(&SessionEvent::DirectorySkipped {
                        path: dir.display().to_string(),
                    });
                }
                for file in &report.unwatched {
                    on_event(&SessionEvent::NotWatched {
                        path: file.display().to_string(),
                    });
                }
                for file in &report.watch {
                    on_event(&SessionEvent::Watching {
                        path: file.display().to_string(),
                    });
                }
                report.watch
            }
            WatchTarget::File { path, .. } => {
                if !config.watch.is_source_file(path) {
                    return Err(RldError::NotSourceFile {
                        path: path.clone(),
                        expected: config.watch.extension_list(),
                    });
                }

                on_event(&SessionEvent::WatchStarted {
                    path: path.display().to_string(),
                    mode: WatchMode::File,
                });
                on_event(&SessionEvent::Watching {
                    path: path.display().to_string(),
                });
                vec![path.clone()]
            }
        };

        Ok(WatchPlan {
            paths,
            command: target.launch_command(&config.run),
        })
    }

    /// Start watching (blocking)
    ///
    /// Returns `Ok` after a termination signal, `Err` on any configuration or
    /// watch-source error. The child's process group is always killed before
    /// this returns.
    pub fn start<F>(&self, on_event: F) -> RldResult<()>
    where
        F: Fn(&SessionEvent),
    {
        let plan = self.prepare(&on_event)?;

        let (tx, rx) = channel();
        install_termination_handler(tx.clone())?;
        let source = ChangeSource::start(&plan.paths, tx.clone())?;
        spawn_stdin_trigger(tx)?;

        let mut event_loop = EventLoop::new(
            ProcessGroupLauncher::new(),
            &self.options.config.watch,
            plan.command,
        );
        // Reported as LaunchFailed; the session keeps watching.
        let _ = event_loop.launch_initial(&on_event);
        let result = event_loop.run(&rx, &on_event);

        drop(source);
        result
    }
}
