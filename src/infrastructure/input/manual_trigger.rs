//! Manual restart trigger read from stdin

use std::io::{self, BufRead, BufReader};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crate::domain::value_objects::LoopInput;

/// The one recognised operator command
pub const RESTART_COMMAND: &str = "rst";

/// Read `reader` line by line on a dedicated thread, posting a manual restart
/// for every `rst` line. Other lines are discarded.
///
/// The thread ends at EOF, on a read error, or once the loop has gone away.
pub fn spawn_manual_trigger<R>(reader: R, tx: Sender<LoopInput>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("rld-stdin".to_string())
        .spawn(move || read_commands(reader, &tx))
}

/// Spawn the trigger on the process's stdin.
pub fn spawn_stdin_trigger(tx: Sender<LoopInput>) -> io::Result<JoinHandle<()>> {
    spawn_manual_trigger(BufReader::new(io::stdin()), tx)
}

fn read_commands<R: BufRead>(reader: R, tx: &Sender<LoopInput>) {
    for line in reader.lines() {
        let Ok(line) = line else { break };
        if line.trim() == RESTART_COMMAND && tx.send(LoopInput::ManualRestart).is_err() {
            break;
        }
    }
}
