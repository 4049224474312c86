//! Stepwise construction: logger-wide settings on [`LoggerBuilder`], file-set
//! parameters on the [`FileBuilder`] sub-builder.

use super::{Handler, LogHandler, Logger};
use crate::fmt::{CallSite, HeaderMask, MAX_ENTRY_SIZE, MaskingMode};
use crate::internal;
use crate::level::Priority;
use crate::output::{
    ConsoleOutput, DEFAULT_MAX_FILE_COUNT, DEFAULT_MAX_FILE_SIZE, Output, RotatingFileWriter,
};
use std::fmt;
use std::sync::{Arc, RwLock};

/// File-set parameters collected by [`FileBuilder`].
#[derive(Debug, Clone)]
struct FileParams {
    dir: String,
    name: String,
    max_file_size: u64,
    max_file_count: usize,
    append: bool,
}

pub struct LoggerBuilder {
    threshold: Priority,
    header: HeaderMask,
    masking: MaskingMode,
    max_entry_size: usize,
    console: bool,
    file: Option<FileParams>,
    outputs: Vec<Box<dyn Output>>,
    handler: Option<Handler>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info threshold, default header, no outputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Priority::Info,
            header: HeaderMask::DEFAULT,
            masking: MaskingMode::Complete,
            max_entry_size: MAX_ENTRY_SIZE,
            console: false,
            file: None,
            outputs: Vec::new(),
            handler: None,
        }
    }

    /// Least severe priority still written.
    #[must_use]
    pub const fn threshold(mut self, threshold: Priority) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn header(mut self, header: HeaderMask) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub const fn masking(mut self, masking: MaskingMode) -> Self {
        self.masking = masking;
        self
    }

    /// Records longer than this fail with [`crate::Error::EntryTooLarge`].
    #[must_use]
    pub const fn max_entry_size(mut self, max: usize) -> Self {
        self.max_entry_size = max;
        self
    }

    /// Mirror every record to stdout.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Rotating file set parameters live on their own sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            params: FileParams {
                dir: String::new(),
                name: String::new(),
                max_file_size: DEFAULT_MAX_FILE_SIZE,
                max_file_count: DEFAULT_MAX_FILE_COUNT,
                append: true,
            },
        }
    }

    /// Adds a host-provided destination after the built-in ones.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    /// Installs a handler that replaces filtering, formatting and all outputs.
    #[must_use]
    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&CallSite<'_>, Priority, fmt::Arguments<'_>) -> Result<(), crate::Error>
            + Send
            + Sync
            + 'static,
    {
        self.log_handler(handler)
    }

    /// Same as [`LoggerBuilder::handler`] for any [`LogHandler`] implementor.
    #[must_use]
    pub fn log_handler(mut self, handler: impl LogHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Opens the file set, if one was configured.
    ///
    /// # Errors
    /// Invalid file parameters, or the writer's directory/open failure.
    pub fn build(self) -> Result<Logger, crate::Error> {
        internal::init();

        if self.max_entry_size == 0 {
            return Err(crate::Error::InvalidConfig(
                "max_entry_size must be positive".to_string(),
            ));
        }

        let mut outputs: Vec<Box<dyn Output>> = Vec::with_capacity(self.outputs.len() + 2);
        if self.console {
            outputs.push(Box::new(ConsoleOutput::new()));
        }

        let writer = match self.file {
            Some(params) => {
                if params.dir.is_empty() || params.name.is_empty() {
                    return Err(crate::Error::InvalidConfig(
                        "file output needs a directory and a name".to_string(),
                    ));
                }
                let writer = Arc::new(RotatingFileWriter::open(
                    &params.dir,
                    &params.name,
                    params.max_file_size,
                    params.max_file_count,
                    params.append,
                )?);
                outputs.push(Box::new(Arc::clone(&writer)));
                Some(writer)
            }
            None => None,
        };

        outputs.extend(self.outputs);

        if outputs.is_empty() {
            internal::warn("LOGGER", "No outputs enabled");
        }

        Ok(Logger {
            threshold: self.threshold,
            header: self.header,
            masking: self.masking,
            max_entry_size: self.max_entry_size,
            outputs,
            writer,
            handler: RwLock::new(self.handler),
        })
    }
}

/// Parameters of the rotating file set.
pub struct FileBuilder {
    parent: LoggerBuilder,
    params: FileParams,
}

impl FileBuilder {
    /// Created recursively if missing.
    #[must_use]
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.params.dir = dir.into();
        self
    }

    /// Base name; files are `{name}-{index}.log`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.name = name.into();
        self
    }

    #[must_use]
    pub const fn max_file_size(mut self, bytes: u64) -> Self {
        self.params.max_file_size = bytes;
        self
    }

    #[must_use]
    pub const fn max_file_count(mut self, count: usize) -> Self {
        self.params.max_file_count = count;
        self
    }

    /// Resume in the last file of an existing set instead of truncating index 0.
    #[must_use]
    pub const fn append(mut self, append: bool) -> Self {
        self.params.append = append;
        self
    }

    /// Sub-builder consumes self, so there must be a way back.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.file = Some(self.params);
        self.parent
    }
}
