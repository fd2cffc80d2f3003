//! Process-group launcher
//!
//! Each generation is started as the leader of a fresh process group so the
//! whole tree (e.g. `go run` and the binary it builds) dies with one
//! `killpg(SIGKILL)`.

use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;

use crate::domain::ports::{TreeHandle, TreeLauncher};
use crate::domain::value_objects::LaunchCommand;

/// Launches each command in its own process group.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessGroupLauncher;

impl ProcessGroupLauncher {
    pub fn new() -> Self {
        Self
    }
}

/// A running process group, identified by its leader.
#[derive(Debug)]
pub struct GroupHandle {
    child: Child,
}

impl TreeHandle for GroupHandle {
    fn id(&self) -> u32 {
        self.child.id()
    }
}

impl TreeLauncher for ProcessGroupLauncher {
    type Handle = GroupHandle;

    fn launch(&mut self, command: &LaunchCommand) -> io::Result<GroupHandle> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            // stdin belongs to the manual trigger
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }
        isolate(&mut cmd);

        let child = cmd.spawn()?;
        Ok(GroupHandle { child })
    }

    fn terminate(&mut self, handle: GroupHandle) -> io::Result<()> {
        let GroupHandle { mut child } = handle;
        let result = kill_tree(&mut child);
        reap(child);
        result
    }
}

#[cfg(unix)]
fn isolate(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(not(unix))]
fn isolate(_cmd: &mut Command) {}

#[cfg(unix)]
fn kill_tree(child: &mut Child) -> io::Result<()> {
    let pgid = child.id() as libc::pid_t;
    // SAFETY: killpg takes plain integers and touches no memory we own.
    let rc = unsafe { libc::killpg(pgid, libc::SIGKILL) };
    if rc == 0 {
        return Ok(());
    }
    let err = io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::ESRCH) {
        // Group already gone
        Ok(())
    } else {
        Err(err)
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) -> io::Result<()> {
    match child.kill() {
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => Ok(()),
        other => other,
    }
}

/// Collect the exit status off-thread so killed leaders do not linger as
/// zombies and the caller never blocks on exit.
fn reap(mut child: Child) {
    thread::spawn(move || {
        let _ = child.wait();
    });
}
