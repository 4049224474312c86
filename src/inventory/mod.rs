//! What a rotating file set currently holds on disk: which indices exist, how
//! big they are and which one was written last.

mod size;

pub use size::{format_size, parse_size};

use crate::internal;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One `{name}-{index}.log` file.
#[derive(Debug, Clone)]
pub struct LogFileInfo {
    pub index: usize,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Files of one set, sorted by index.
#[derive(Debug, Clone, Default)]
pub struct RotationInventory {
    pub files: Vec<LogFileInfo>,
}

impl RotationInventory {
    #[must_use]
    pub fn count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogFileInfo> {
        self.files.iter().find(|f| f.index == index)
    }

    /// Most recently modified file, i.e. the one a writer was last appending to.
    #[must_use]
    pub fn newest(&self) -> Option<&LogFileInfo> {
        self.files
            .iter()
            .filter(|f| f.modified.is_some())
            .max_by_key(|f| f.modified)
    }
}

impl fmt::Display for RotationInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files:      {}", self.count())?;
        writeln!(f, "Total size: {}", format_size(self.total_size()))?;
        if let Some(newest) = self.newest() {
            writeln!(f, "Active:     {}", newest.path.display())?;
        }
        for file in &self.files {
            let modified = file.modified.map_or_else(
                || "unknown".to_string(),
                |m| DateTime::<Local>::from(m).format("%Y-%m-%d %H:%M:%S").to_string(),
            );
            writeln!(
                f,
                "  [{}] {} ({}, {modified})",
                file.index,
                file.path.display(),
                format_size(file.size)
            )?;
        }
        Ok(())
    }
}

/// Lists the `{name}-{index}.log` files in `dir`. A missing directory is an empty set.
///
/// # Errors
/// I/O errors while reading the directory.
pub fn scan(dir: &Path, name: &str) -> Result<RotationInventory, crate::Error> {
    internal::debug(
        "INVENTORY",
        &format!("Scanning {} for {name}-N.log", dir.display()),
    );
    let mut inventory = RotationInventory::default();
    if !dir.is_dir() {
        return Ok(inventory);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(index) = entry
            .file_name()
            .to_str()
            .and_then(|file_name| rotation_index(file_name, name))
        else {
            continue;
        };
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        inventory.files.push(LogFileInfo {
            index,
            path: entry.path(),
            size: meta.len(),
            modified: meta.modified().ok(),
        });
    }

    inventory.files.sort_by_key(|f| f.index);
    Ok(inventory)
}

/// `Some(i)` iff `file_name` is exactly `{name}-{i}.log`.
fn rotation_index(file_name: &str, name: &str) -> Option<usize> {
    let digits = file_name
        .strip_prefix(name)?
        .strip_prefix('-')?
        .strip_suffix(".log")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
