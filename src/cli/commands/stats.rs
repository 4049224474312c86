use crate::config::Config;
use crate::inventory;
use crate::path;
use std::path::PathBuf;
use std::process::ExitCode;

/// Handles `ringlog stats [--dir D] [--name N]`.
#[must_use]
pub fn cmd_stats(dir: Option<PathBuf>, name: Option<&str>, config: &Config) -> ExitCode {
    let dir = dir.unwrap_or_else(|| PathBuf::from(config.resolved_dir()));
    let name = name.unwrap_or(&config.file.name);

    match inventory::scan(&dir, name) {
        Ok(set) if set.count() == 0 => {
            println!("No {name}-N.log files in {}", path::normalize_dir(&dir.to_string_lossy()));
            ExitCode::SUCCESS
        }
        Ok(set) => {
            print!("{set}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ringlog: {e}");
            ExitCode::FAILURE
        }
    }
}
