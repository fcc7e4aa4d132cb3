use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

pub const DEFAULT_OUTPUT: &str = "out.txt";

/// Concatenate files into one output file, then print it.
#[derive(Debug, Parser)]
#[command(name = "filecat", version, about)]
pub struct Cli {
    /// Input file to append; repeat to add more, in order
    #[arg(short = 'f', long = "file", visible_alias = "collect", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Output file the inputs are appended to
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Only build the output file, do not print it
    #[arg(long)]
    pub no_emit: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Settings for one run, independent of how they were parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub emit: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            emit: true,
            verbosity: 0,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            inputs: cli.files,
            output: cli.output,
            emit: !cli.no_emit,
            verbosity: cli.verbose,
        }
    }
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Logs go to stderr so they never mix with emitted bytes. `RUST_LOG`
/// overrides the level picked from `-v`.
pub fn init_logger(config: &Config) {
    let _ = env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}
