//! What a session watches and what it (re)launches

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::error::{RldError, RldResult};

/// The watched root, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchTarget {
    /// A single source file; `args` are passed through to every launch
    File { path: PathBuf, args: Vec<String> },
    /// A buildable project root; trailing CLI arguments are not used
    Directory {
        root: PathBuf,
        ignored_args: Vec<String>,
    },
}

impl WatchTarget {
    /// Classify `path` by what it is on disk.
    pub fn resolve(path: &Path, args: Vec<String>) -> RldResult<Self> {
        let metadata = fs::metadata(path).map_err(|_| RldError::PathNotFound {
            path: path.to_path_buf(),
        })?;

        if metadata.is_dir() {
            Ok(WatchTarget::Directory {
                root: path.to_path_buf(),
                ignored_args: args,
            })
        } else {
            Ok(WatchTarget::File {
                path: path.to_path_buf(),
                args,
            })
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, WatchTarget::Directory { .. })
    }

    /// Path shown to the user: the file, or the project root.
    pub fn path(&self) -> &Path {
        match self {
            WatchTarget::File { path, .. } => path,
            WatchTarget::Directory { root, .. } => root,
        }
    }

    /// Build the command every generation is launched with.
    ///
    /// File mode runs `<program> <run args> <file> <args...>` from the current
    /// directory; directory mode runs `<program> <run args> .` inside the root.
    pub fn launch_command(&self, run: &RunConfig) -> LaunchCommand {
        let mut args = run.args.clone();
        match self {
            WatchTarget::File { path, args: extra } => {
                args.push(path.display().to_string());
                args.extend(extra.iter().cloned());
                LaunchCommand {
                    program: run.program.clone(),
                    args,
                    cwd: None,
                }
            }
            WatchTarget::Directory { root, .. } => {
                args.push(".".to_string());
                LaunchCommand {
                    program: run.program.clone(),
                    args,
                    cwd: Some(root.clone()),
                }
            }
        }
    }
}

/// A fully resolved command line for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits ours
    pub cwd: Option<PathBuf>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
