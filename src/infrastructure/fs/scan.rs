//! Watch-set enumeration
//!
//! Walks a project root and decides which files get a watch. Hidden
//! directories (other than the root) and skipped directories are not entered.
//! Every other file is enumerated; only non-test source files are watched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WatchConfig;
use crate::domain::value_objects::SkipPatterns;
use crate::error::RldResult;

/// Result of walking a project root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Files to register with the change source
    pub watch: Vec<PathBuf>,
    /// Directories that were not entered
    pub skipped_dirs: Vec<PathBuf>,
    /// Files that were seen but are not watched (wrong extension or tests)
    pub unwatched: Vec<PathBuf>,
}

/// Walk `root` and classify every entry.
pub fn scan_tree(root: &Path, config: &WatchConfig, skip: &SkipPatterns) -> RldResult<ScanReport> {
    let mut report = ScanReport::default();
    scan_recursive(root, root, config, skip, &mut report)?;
    Ok(report)
}

fn scan_recursive(
    root: &Path,
    current: &Path,
    config: &WatchConfig,
    skip: &SkipPatterns,
    report: &mut ScanReport,
) -> RldResult<()> {
    let mut entries = fs::read_dir(current)?.collect::<Result<Vec<_>, _>>()?;
    // Deterministic order
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        // Symlinks are not followed.
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            if is_hidden(&path) || skip.skips_dir(rel) {
                report.skipped_dirs.push(path);
                continue;
            }
            scan_recursive(root, &path, config, skip, report)?;
        } else if config.is_source_file(&path) && !config.is_test_file(&path) {
            report.watch.push(path);
        } else {
            report.unwatched.push(path);
        }
    }

    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package main\n").unwrap();
    }

    fn rel(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().display().to_string())
            .collect()
    }

    #[test]
    fn registers_source_files_and_skips_the_rest() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "go.mod");
        touch(root, "main.go");
        touch(root, "main_test.go");
        touch(root, "internal/db/db.go");
        touch(root, "internal/db/README.md");
        touch(root, "vendor/lib/lib.go");
        touch(root, ".git/hooks/pre-commit.go");

        let config = WatchConfig::default();
        let skip = SkipPatterns::new(root, &config.skip).unwrap();
        let report = scan_tree(root, &config, &skip).unwrap();

        assert_eq!(rel(root, &report.watch), vec!["internal/db/db.go", "main.go"]);
        assert_eq!(rel(root, &report.skipped_dirs), vec![".git", "vendor"]);
        assert_eq!(
            rel(root, &report.unwatched),
            vec!["go.mod", "internal/db/README.md", "main_test.go"]
        );
    }

    #[test]
    fn hidden_root_is_still_scanned() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(".workspace");
        touch(&root, "main.go");

        let config = WatchConfig::default();
        let skip = SkipPatterns::new(&root, &config.skip).unwrap();
        let report = scan_tree(&root, &config, &skip).unwrap();

        assert_eq!(report.watch, vec![root.join("main.go")]);
    }

    #[test]
    fn nested_skip_dirs_are_not_entered() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "cmd/tool/main.go");
        touch(root, "cmd/tool/vendor/x.go");
        touch(root, "cmd/.cache/y.go");

        let config = WatchConfig::default();
        let skip = SkipPatterns::new(root, &config.skip).unwrap();
        let report = scan_tree(root, &config, &skip).unwrap();

        assert_eq!(rel(root, &report.watch), vec!["cmd/tool/main.go"]);
        assert_eq!(
            rel(root, &report.skipped_dirs),
            vec!["cmd/.cache", "cmd/tool/vendor"]
        );
    }

    #[test]
    fn custom_extensions_and_marker() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "src/lib.rs");
        touch(root, "src/lib.spec.rs");
        touch(root, "src/main.go");

        let config = WatchConfig {
            extensions: vec!["rs".to_string()],
            test_marker: ".spec".to_string(),
            ..WatchConfig::default()
        };
        let skip = SkipPatterns::new(root, &config.skip).unwrap();
        let report = scan_tree(root, &config, &skip).unwrap();

        assert_eq!(rel(root, &report.watch), vec!["src/lib.rs"]);
    }
}
