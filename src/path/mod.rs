//! Filesystem queries and recursive directory creation used while a writer
//! opens its file set.

use crate::internal;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// `true` iff `path` exists and is a directory.
#[must_use]
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Rewrites `X\Y\Z` or `X/Y/Z` to `X/Y/Z/`. An empty path stays empty.
#[must_use]
pub fn normalize_dir(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut normalized = path.replace('\\', "/");
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Creates every missing component of `dir`, walking from the root.
///
/// Directories created before a failure are left in place. Re-running on an
/// existing path is a no-op.
///
/// # Errors
/// [`crate::Error::CreateDir`] for the first component that could not be created.
pub fn create_recursion_dir(dir: &str) -> Result<(), crate::Error> {
    let normalized = normalize_dir(dir);

    for (pos, _) in normalized.match_indices('/') {
        let component = &normalized[..pos];
        if component.is_empty() || is_directory(component) {
            continue;
        }
        match fs::create_dir(component) {
            Ok(()) => internal::debug("PATH", &format!("Created directory: {component}")),
            // Another thread or process may have won the race.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && is_directory(component) => {}
            Err(source) => {
                internal::error(
                    "PATH",
                    &format!("Failed to create directory {component}: {source}"),
                );
                return Err(crate::Error::CreateDir {
                    path: PathBuf::from(component),
                    source,
                });
            }
        }
    }

    Ok(())
}

/// `true` iff `path` names an existing regular file.
#[must_use]
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// Size in bytes, or 0 when the file cannot be inspected.
#[must_use]
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path).map_or(0, |meta| meta.len())
}
