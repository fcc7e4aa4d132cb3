use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use filecat::cli::{self, Cli, Config};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    cli::init_logger(&config);

    let stdout = io::stdout();
    match filecat::run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
