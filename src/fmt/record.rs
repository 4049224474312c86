//! Builds one log line into a caller-owned, capacity-checked buffer.
//!
//! Each emitting thread formats into its own buffer before any output lock is
//! taken, so formatting is never serialized across threads.

use super::HeaderMask;
use crate::level::Priority;
use chrono::{DateTime, Local, Timelike};
use std::fmt::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

/// Hard cap on a single record, trailing newline included.
pub const MAX_ENTRY_SIZE: usize = 4096;

/// Source location of an emit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

impl CallSite<'static> {
    /// Location of whoever called the `#[track_caller]` function that calls this.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// String buffer that refuses to grow past `max` bytes.
///
/// Overflowing writes are counted but not stored, so the reported length is
/// the size the full record would have had.
#[derive(Debug)]
pub struct RecordBuffer {
    text: String,
    max: usize,
    wanted: usize,
}

impl RecordBuffer {
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            text: String::with_capacity(max.min(MAX_ENTRY_SIZE)),
            max,
            wanted: 0,
        }
    }

    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.wanted > self.max
    }

    /// Returns the finished text, or the overflow as an error.
    ///
    /// # Errors
    /// [`crate::Error::EntryTooLarge`] when the record exceeded the capacity.
    pub fn finish(self) -> Result<String, crate::Error> {
        if self.overflowed() {
            return Err(crate::Error::EntryTooLarge {
                len: self.wanted,
                max: self.max,
            });
        }
        Ok(self.text)
    }
}

impl Write for RecordBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.wanted += s.len();
        if !self.overflowed() {
            self.text.push_str(s);
        }
        Ok(())
    }
}

/// Formats a record stamped with the current local time.
///
/// # Errors
/// [`crate::Error::EntryTooLarge`] when the line does not fit `max`.
pub fn format_record(
    header: HeaderMask,
    site: &CallSite<'_>,
    priority: Priority,
    args: fmt::Arguments<'_>,
    max: usize,
) -> Result<String, crate::Error> {
    format_record_at(header, site, priority, args, max, &Local::now())
}

/// Same as [`format_record`] with an explicit timestamp.
///
/// # Errors
/// [`crate::Error::EntryTooLarge`] when the line does not fit `max`.
pub fn format_record_at(
    header: HeaderMask,
    site: &CallSite<'_>,
    priority: Priority,
    args: fmt::Arguments<'_>,
    max: usize,
    now: &DateTime<Local>,
) -> Result<String, crate::Error> {
    let mut buf = RecordBuffer::new(max);
    write_record(&mut buf, header, site, priority, args, now).map_err(|_| {
        crate::Error::Io(std::io::Error::other("a Display implementation returned an error"))
    })?;
    buf.finish()
}

fn write_record(
    buf: &mut RecordBuffer,
    header: HeaderMask,
    site: &CallSite<'_>,
    priority: Priority,
    args: fmt::Arguments<'_>,
    now: &DateTime<Local>,
) -> fmt::Result {
    if header.contains(HeaderMask::DATE) {
        write!(buf, "{} ", now.format("%Y-%m-%d"))?;
    }
    if header.contains(HeaderMask::TIME) {
        write!(
            buf,
            "{}:{:06} ",
            now.format("%H:%M:%S"),
            now.nanosecond() / 1_000 % 1_000_000
        )?;
    }
    if header.contains(HeaderMask::MARK) {
        write!(buf, "{}:{:03} ", site.file, site.line)?;
    }
    if header.contains(HeaderMask::THREAD) {
        write!(buf, "{:05} ", thread_number())?;
    }
    if header.contains(HeaderMask::PRIORITY) {
        buf.write_str(priority.label())?;
    }
    buf.write_fmt(args)?;
    buf.write_char('\n')
}

static NEXT_THREAD_NUMBER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_NUMBER: u64 = NEXT_THREAD_NUMBER.fetch_add(1, Ordering::Relaxed);
}

/// Small per-process number assigned to a thread on its first record.
fn thread_number() -> u64 {
    THREAD_NUMBER.with(|n| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .single()
            .unwrap()
            + chrono::Duration::microseconds(42)
    }

    #[test]
    fn thread_number_is_stable_and_distinct() {
        let here = thread_number();
        assert!(here > 0);
        assert_eq!(thread_number(), here);

        let other = std::thread::spawn(thread_number).join().unwrap();
        assert_ne!(other, here);
    }

    #[test]
    fn full_header_layout() {
        let site = CallSite::new("src/main.rs", 7);
        let line = format_record_at(
            HeaderMask::DEFAULT,
            &site,
            Priority::Error,
            format_args!("disk {} full", "sda"),
            MAX_ENTRY_SIZE,
            &fixed_time(),
        )
        .unwrap();
        assert_eq!(
            line,
            "2024-03-07 09:05:02:000042 src/main.rs:007 [ERROR]  disk sda full\n"
        );
    }

    #[test]
    fn empty_mask_is_message_only() {
        let site = CallSite::new("a.rs", 1);
        let line = format_record_at(
            HeaderMask::NONE,
            &site,
            Priority::Info,
            format_args!("plain"),
            MAX_ENTRY_SIZE,
            &fixed_time(),
        )
        .unwrap();
        assert_eq!(line, "plain\n");
    }

    #[test]
    fn thread_field_is_padded() {
        let site = CallSite::new("a.rs", 1);
        let line = format_record_at(
            HeaderMask::THREAD,
            &site,
            Priority::Info,
            format_args!("x"),
            MAX_ENTRY_SIZE,
            &fixed_time(),
        )
        .unwrap();
        let (id, rest) = line.split_once(' ').unwrap();
        assert!(id.len() >= 5);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "x\n");
    }

    #[test]
    fn exact_capacity_fits() {
        let site = CallSite::new("a.rs", 1);
        let body = "a".repeat(9);
        let line = format_record_at(
            HeaderMask::NONE,
            &site,
            Priority::Info,
            format_args!("{body}"),
            10,
            &fixed_time(),
        )
        .unwrap();
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn overflow_reports_full_length() {
        let site = CallSite::new("a.rs", 1);
        let body = "a".repeat(10);
        let err = format_record_at(
            HeaderMask::NONE,
            &site,
            Priority::Info,
            format_args!("{body}"),
            10,
            &fixed_time(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::EntryTooLarge { len: 11, max: 10 }
        ));
    }
}
