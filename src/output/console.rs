//! Passthrough to stdout. Records are already formatted, so there is nothing
//! to render here beyond writing the bytes in one call.

use super::{LogRecord, Output};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        // Locking stdout keeps one record from interleaving with another thread's.
        let mut stdout = io::stdout().lock();
        stdout.write_all(record.text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
