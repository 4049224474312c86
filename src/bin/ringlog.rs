//! `ringlog log <priority> <message...>` appends one record to the configured
//! file set; `ringlog stats` lists the set's files.

use clap::Parser;
use ringlog::cli::{Cli, Command, cmd_log, cmd_stats};
use ringlog::config::Config;
use ringlog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Log { priority, message } => cmd_log(priority, &message, &config),
        Command::Stats { dir, name } => cmd_stats(dir, name.as_deref(), &config),
    }
}
