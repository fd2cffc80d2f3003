//! Skip patterns value object
//!
//! Directories excluded from the watch set, matched with gitignore semantics.
//! Patterns come from `watch.skip` and from an optional `.rldignore` file in
//! the project root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::path::Path;

use crate::error::{RldError, RldResult};

/// Name of the optional per-project skip file
pub const SKIP_FILE: &str = ".rldignore";

/// Maximum size for `.rldignore` (64KB)
const MAX_FILE_SIZE: u64 = 65536;

/// Compiled skip list.
#[derive(Debug)]
pub struct SkipPatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl SkipPatterns {
    /// Compile patterns relative to `root`.
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> RldResult<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, pattern)
                .map_err(|e| RldError::InvalidSkipPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        let matcher = builder.build().map_err(|e| RldError::InvalidSkipPattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Compile configured patterns plus the root's `.rldignore`, if present.
    pub fn load<S: AsRef<str>>(root: &Path, configured: &[S]) -> RldResult<Self> {
        let mut patterns: Vec<String> = configured
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        let skip_file = root.join(SKIP_FILE);
        if skip_file.is_file() {
            let size = fs::metadata(&skip_file)?.len();
            if size > MAX_FILE_SIZE {
                return Err(RldError::InvalidSkipPattern {
                    pattern: skip_file.display().to_string(),
                    message: format!("file exceeds {}KB limit", MAX_FILE_SIZE / 1024),
                });
            }
            let content = fs::read_to_string(&skip_file)?;
            patterns.extend(content.lines().map(str::to_string));
        }

        Self::new(root, &patterns)
    }

    /// Check whether a directory, given relative to the root, is skipped.
    pub fn skips_dir(&self, rel_path: &Path) -> bool {
        if self.pattern_count == 0 || rel_path.as_os_str().is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, true)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}
