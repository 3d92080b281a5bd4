// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use project_radar::{bootstrap, cli::Args};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    bootstrap::init_logging(args.verbose);

    match bootstrap::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
