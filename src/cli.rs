use std::path::PathBuf;

use clap::Parser;

/// rld - restart a Go program whenever its sources change
#[derive(Parser, Debug)]
#[command(name = "rld")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Options go before PATH; everything after PATH is passed to the program.\n\
Type 'rst' and press Enter to restart the program by hand.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v shows debug events, -vv adds timestamps)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: <root>/.rld.toml, then the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet period a burst of writes must be followed by
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Restart at most this long after a burst began (0 = never forced)
    #[arg(long, value_name = "MS")]
    pub max_wait_ms: Option<u64>,

    /// Extra directory pattern to skip (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub skip: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Project directory or single source file (default: .), then arguments
    /// for the program (single-file mode only)
    #[arg(value_name = "PATH", trailing_var_arg = true, allow_hyphen_values = true)]
    pub target: Vec<String>,
}

impl Cli {
    /// Watched path; the first positional.
    pub fn path(&self) -> PathBuf {
        self.target
            .first()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Everything after the path, verbatim.
    pub fn program_args(&self) -> Vec<String> {
        self.target.iter().skip(1).cloned().collect()
    }
}
