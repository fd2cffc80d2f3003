//! rld CLI - restart a Go program whenever its sources change
//!
//! Usage: rld [OPTIONS] [PATH] [ARGS]...
//!
//! PATH is a project directory (runs `go run .` inside it) or a single
//! source file (runs `go run <file> ARGS...`). Type `rst` on stdin to
//! restart by hand; Ctrl+C kills the program and exits.

mod cli;
mod commands;
mod ui;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = commands::watch::cmd_watch(&cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}
