//! Command-line front end: write one record into a file set, or describe what
//! a file set currently holds on disk.

pub mod commands;

use crate::level::Priority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ringlog - priority-filtered logging into a ring of files.
#[derive(Parser)]
#[command(name = "ringlog", version, about = "Log into a rotating file set")]
pub struct Cli {
    /// Config file (defaults to <config dir>/ringlog/ringlog.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log a message at the given priority.
    Log {
        /// emergency, alert, critical, error, warning, notice, info or debug
        priority: Priority,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Show the files of a rotating set.
    Stats {
        /// Directory of the set (defaults to the configured one)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Base name of the set (defaults to the configured one)
        #[arg(short, long)]
        name: Option<String>,
    },
}

pub use commands::{cmd_log, cmd_stats};
