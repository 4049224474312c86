//! Size- and count-bounded file set `{dir}/{name}-{index}.log`, reused as a ring.
//!
//! A write is counted before it lands. When the running count passes
//! `max_file_size` the writer moves to the next index (wrapping to 0 after the
//! last slot without looking at file ages), truncates that file and writes the
//! entry there. An entry larger than the limit still lands whole in a fresh
//! file, which is then over the limit until the next write rotates away.

use super::{LogRecord, Output};
use crate::internal;
use crate::path;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Used when `max_file_size` is 0.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Used when `max_file_count` is 0.
pub const DEFAULT_MAX_FILE_COUNT: usize = 10;

/// Mutable part of the writer; only touched with the lock held.
#[derive(Debug)]
struct RotationState {
    file: Option<File>,
    current_bytes: u64,
    index: usize,
}

#[derive(Debug)]
pub struct RotatingFileWriter {
    /// Forward slashes, trailing `/`.
    dir: String,
    name: String,
    max_file_size: u64,
    max_file_count: usize,
    append: bool,
    state: Mutex<RotationState>,
}

impl RotatingFileWriter {
    /// Creates the directory if needed and opens the file to continue in.
    ///
    /// With `append`, the writer resumes in the highest existing index of the
    /// set, counting its current size. When every slot is already taken it
    /// starts over at index 0 with that file truncated. Without `append`,
    /// index 0 is truncated.
    ///
    /// # Errors
    /// [`crate::Error::CreateDir`] or [`crate::Error::Open`].
    pub fn open(
        dir: &str,
        name: &str,
        max_file_size: u64,
        max_file_count: usize,
        append: bool,
    ) -> Result<Self, crate::Error> {
        let mut writer = Self {
            dir: path::normalize_dir(dir),
            name: name.to_string(),
            max_file_size: if max_file_size == 0 {
                DEFAULT_MAX_FILE_SIZE
            } else {
                max_file_size
            },
            max_file_count: if max_file_count == 0 {
                DEFAULT_MAX_FILE_COUNT
            } else {
                max_file_count
            },
            append,
            state: Mutex::new(RotationState {
                file: None,
                current_bytes: 0,
                index: 0,
            }),
        };

        if !path::is_directory(dir) {
            path::create_recursion_dir(dir)?;
        }

        let (index, current_bytes) = if append {
            writer.resume_point()?
        } else {
            (0, 0)
        };

        let file_path = writer.path_for(index);
        let file = open_file(&file_path, append)?;
        internal::debug(
            "ROTATE",
            &format!(
                "Opened {} at {current_bytes} bytes ({})",
                file_path.display(),
                if append { "append" } else { "truncate" }
            ),
        );

        let state = writer
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        state.file = Some(file);
        state.index = index;
        state.current_bytes = current_bytes;

        Ok(writer)
    }

    /// Finds the last existing file of the set, or wraps to a truncated index 0.
    fn resume_point(&self) -> Result<(usize, u64), crate::Error> {
        let first_missing =
            (0..self.max_file_count).find(|&index| !path::file_exists(self.path_for(index)));

        if let Some(missing) = first_missing {
            let index = missing.saturating_sub(1);
            return Ok((index, path::file_size(self.path_for(index))));
        }

        let first = self.path_for(0);
        internal::info(
            "ROTATE",
            &format!(
                "All {} files present, overwriting {}",
                self.max_file_count,
                first.display()
            ),
        );
        open_file(&first, false)?;
        Ok((0, 0))
    }

    /// `{dir}{name}-{index}.log`
    #[must_use]
    pub fn path_for(&self, index: usize) -> PathBuf {
        PathBuf::from(format!("{}{}-{index}.log", self.dir, self.name))
    }

    /// Appends `bytes`, rotating first when the running count passes the limit.
    ///
    /// # Errors
    /// [`crate::Error::Open`] when the next file cannot be opened; the writer
    /// then has no handle until a later rotation succeeds, and writes in the
    /// meantime fail with [`crate::Error::NoActiveFile`]. I/O errors from the
    /// write or flush are returned as [`crate::Error::Io`].
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<(), crate::Error> {
        let mut state = self.lock();
        let len = bytes.len() as u64;

        state.current_bytes += len;
        if state.current_bytes > self.max_file_size {
            state.file = None;
            state.index = (state.index + 1) % self.max_file_count;

            let next = self.path_for(state.index);
            internal::debug("ROTATE", &format!("Rotating to {}", next.display()));
            state.file = Some(open_file(&next, false)?);
            state.current_bytes = len;
        }

        let file = state.file.as_mut().ok_or(crate::Error::NoActiveFile)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    /// Drops the file handle. Later writes fail until a rotation reopens one.
    pub fn close(&self) {
        self.lock().file = None;
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.lock().index
    }

    #[must_use]
    pub fn current_bytes(&self) -> u64 {
        self.lock().current_bytes
    }

    #[must_use]
    pub fn current_path(&self) -> PathBuf {
        self.path_for(self.current_index())
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().file.is_some()
    }

    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    #[must_use]
    pub const fn max_file_count(&self) -> usize {
        self.max_file_count
    }

    #[must_use]
    pub const fn append(&self) -> bool {
        self.append
    }

    /// A panic while holding the lock leaves the state consistent enough to keep logging.
    fn lock(&self) -> MutexGuard<'_, RotationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn open_file(path: &Path, append: bool) -> Result<File, crate::Error> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path).map_err(|source| {
        internal::error(
            "ROTATE",
            &format!("Failed to open {}: {source}", path.display()),
        );
        crate::Error::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl Output for RotatingFileWriter {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        self.write_bytes(record.text.as_bytes())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let Some(file) = self.lock().file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
