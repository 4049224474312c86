//! The logger facade: filters by priority, formats one line per record and
//! fans it out to every configured output.

mod builder;
mod from_config;
mod handler;
mod settings;

pub use builder::{FileBuilder, LoggerBuilder};
pub use handler::{Handler, LogHandler};
pub use settings::{OutputMode, Settings};

use crate::fmt::{CallSite, HeaderMask, MaskingMode, format_record};
use crate::internal;
use crate::level::Priority;
use crate::output::{LogRecord, Output, RotatingFileWriter};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Settings are fixed after build; only the external handler can be swapped.
pub struct Logger {
    threshold: Priority,
    header: HeaderMask,
    masking: MaskingMode,
    max_entry_size: usize,
    outputs: Vec<Box<dyn Output>>,
    writer: Option<Arc<RotatingFileWriter>>,
    handler: RwLock<Option<Handler>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Opens a logger from a complete parameter set.
    ///
    /// # Errors
    /// Invalid settings, or the rotating writer failing to create its
    /// directory or open its file.
    pub fn open(settings: &Settings) -> Result<Self, crate::Error> {
        settings.validate()?;

        let mut builder = Self::builder()
            .threshold(settings.threshold)
            .header(settings.header)
            .masking(settings.masking)
            .max_entry_size(settings.max_entry_size)
            .console(settings.output.console);

        if settings.output.file {
            builder = builder
                .file()
                .dir(&settings.dir)
                .name(&settings.name)
                .max_file_size(settings.max_file_size)
                .max_file_count(settings.max_file_count)
                .append(settings.append)
                .done();
        }

        builder.build()
    }

    /// Core dispatch.
    ///
    /// A record below the threshold is dropped and counts as success. Every
    /// output is attempted even if an earlier one fails; the first failure is
    /// returned.
    ///
    /// # Errors
    /// [`crate::Error::EntryTooLarge`] when the line exceeds the entry cap
    /// (nothing is written), the handler's error, or the first output error.
    pub fn emit(
        &self,
        site: CallSite<'_>,
        priority: Priority,
        args: fmt::Arguments<'_>,
    ) -> Result<(), crate::Error> {
        if let Some(handler) = self.handler() {
            return handler.handle(&site, priority, args);
        }

        if !priority.admitted_by(self.threshold) {
            return Ok(());
        }

        let text = format_record(self.header, &site, priority, args, self.max_entry_size)
            .inspect_err(|e| internal::warn("LOGGER", &format!("Record dropped: {e}")))?;
        let record = LogRecord::new(priority, &text);

        let mut result = Ok(());
        for output in &self.outputs {
            if let Err(e) = output.write(&record)
                && result.is_ok()
            {
                result = Err(e);
            }
        }
        result
    }

    /// Logs a plain message, taking the call site from the caller.
    ///
    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn log(&self, priority: Priority, msg: &str) -> Result<(), crate::Error> {
        self.emit(CallSite::caller(), priority, format_args!("{msg}"))
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn emerg(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Emergency, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn alert(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Alert, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn crit(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Critical, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn error(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Error, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn warn(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Warning, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn notice(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Notice, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn info(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Info, msg)
    }

    /// # Errors
    /// See [`Logger::emit`].
    #[track_caller]
    pub fn debug(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Priority::Debug, msg)
    }

    /// Routes every later record to the closure `handler` instead of the outputs.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&CallSite<'_>, Priority, fmt::Arguments<'_>) -> Result<(), crate::Error>
            + Send
            + Sync
            + 'static,
    {
        self.set_log_handler(handler);
    }

    /// Same as [`Logger::set_handler`] for any [`LogHandler`] implementor.
    pub fn set_log_handler(&self, handler: impl LogHandler + 'static) {
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(handler));
        internal::debug("LOGGER", "External handler installed");
    }

    pub fn clear_handler(&self) {
        *self.handler.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The lock is released before the handler runs, so a handler may swap itself.
    fn handler(&self) -> Option<Handler> {
        self.handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn threshold(&self) -> Priority {
        self.threshold
    }

    #[must_use]
    pub const fn header(&self) -> HeaderMask {
        self.header
    }

    #[must_use]
    pub const fn masking(&self) -> MaskingMode {
        self.masking
    }

    #[must_use]
    pub const fn max_entry_size(&self) -> usize {
        self.max_entry_size
    }

    /// The rotating file set, when file output is enabled.
    #[must_use]
    pub fn writer(&self) -> Option<&RotatingFileWriter> {
        self.writer.as_deref()
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
