//! Destinations for formatted records. The two built-ins (console, rotating
//! file) cover the common cases; the `Output` trait lets hosts plug in their own.

mod console;
mod rotating;

pub use console::ConsoleOutput;
pub use rotating::{DEFAULT_MAX_FILE_COUNT, DEFAULT_MAX_FILE_SIZE, RotatingFileWriter};

use crate::level::Priority;
use std::sync::Arc;

/// One fully formatted line, newline included, borrowed for the duration of a dispatch.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub priority: Priority,
    pub text: &'a str,
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub const fn new(priority: Priority, text: &'a str) -> Self {
        Self { priority, text }
    }
}

/// `Send + Sync` lets one logger be shared by every thread; implementations
/// that hold mutable state must lock internally.
pub trait Output: Send + Sync {
    /// Writes the record's bytes as-is.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Lets the logger keep a typed handle to an output it also dispatches to.
impl<T: Output + ?Sized> Output for Arc<T> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        (**self).write(record)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
