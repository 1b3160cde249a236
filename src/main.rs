// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use manga_volumes::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    if let Err(e) = logging::init(config.verbosity) {
        eprintln!("Warning: {e}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match app::run(&args.command, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
