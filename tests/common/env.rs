//! Test environment for isolated rld runs.
//!
//! Every run gets its own project directory and HOME so no user config or
//! `RLD_*` variable from the outer environment leaks in.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Output, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

const RLD_VARS: &[&str] = &[
    "RLD_DEBOUNCE_MS",
    "RLD_MAX_WAIT_MS",
    "RLD_PROGRAM",
    "RLD_SKIP",
];

/// Result of running rld to completion
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated project + home directory pair.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
        }
    }

    /// A project with a manifest and one source file.
    pub fn go_project() -> Self {
        let env = Self::new();
        env.write_project_file("go.mod", "module example.com/app\n\ngo 1.22\n");
        env.write_project_file("main.go", "package main\n\nfunc main() {}\n");
        env
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rld"));
        cmd.current_dir(self.root())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for var in RLD_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run rld to completion with stdin closed.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute rld");
        TestResult::from_output(output)
    }

    /// Start a long-running session with piped stdin and stdout.
    pub fn spawn(&self, args: &[&str]) -> Session {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .expect("Failed to spawn rld");

        let stdout = child.stdout.take().expect("stdout is piped");
        let (tx, lines) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        let stdin = child.stdin.take();
        Session {
            child,
            stdin,
            lines,
            seen: Vec::new(),
        }
    }
}

/// A running rld process.
pub struct Session {
    child: Child,
    stdin: Option<ChildStdin>,
    lines: Receiver<String>,
    pub seen: Vec<String>,
}

impl Session {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Wait for a stdout line containing `needle`; panics after `timeout`.
    pub fn expect_line(&mut self, needle: &str, timeout: Duration) -> String {
        self.expect_matching(needle, timeout, |line| line.contains(needle))
    }

    /// Wait for a stdout line equal to `expected`, e.g. output of the program itself.
    pub fn expect_exact(&mut self, expected: &str, timeout: Duration) -> String {
        self.expect_matching(expected, timeout, |line| line == expected)
    }

    fn expect_matching(
        &mut self,
        needle: &str,
        timeout: Duration,
        matches: impl Fn(&str) -> bool,
    ) -> String {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(remaining) {
                Ok(line) => {
                    self.seen.push(line.clone());
                    if matches(&line) {
                        return line;
                    }
                }
                Err(_) => panic!(
                    "timed out waiting for {:?}; output so far:\n{}",
                    needle,
                    self.seen.join("\n")
                ),
            }
        }
    }

    pub fn send_line(&mut self, line: &str) {
        let stdin = self.stdin.as_mut().expect("stdin is open");
        writeln!(stdin, "{}", line).expect("Failed to write to rld stdin");
        stdin.flush().expect("Failed to flush rld stdin");
    }

    /// Wait for exit, killing the process if it does not stop in time.
    pub fn wait_for_exit(&mut self, timeout: Duration) -> Option<i32> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(status) = self.child.try_wait().expect("Failed to poll rld") {
                return status.code();
            }
            thread::sleep(Duration::from_millis(20));
        }
        let _ = self.child.kill();
        let _ = self.child.wait();
        panic!("rld did not exit; output:\n{}", self.seen.join("\n"));
    }

    /// Count of lines seen so far containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.seen.iter().filter(|l| l.contains(needle)).count()
    }

    /// Count of lines seen so far equal to `expected`.
    pub fn count_exact(&self, expected: &str) -> usize {
        self.seen.iter().filter(|l| *l == expected).count()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
