//! C-ABI bindings over the process-wide registry so C and C++ hosts can log
//! into the same rotating file set as Rust code.
//!
//! Messages arrive already formatted; the caller supplies its own
//! `__FILE__`/`__LINE__` for the mark field.

#![allow(unsafe_code)]

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_int};
use std::ptr;

use crate::fmt::{CallSite, HeaderMask};
use crate::internal;
use crate::level::Priority;
use crate::logger::{OutputMode, Settings};
use crate::registry;

pub const RINGLOG_PRIORITY_EMERGENCY: c_int = 0;
pub const RINGLOG_PRIORITY_ALERT: c_int = 1;
pub const RINGLOG_PRIORITY_CRITICAL: c_int = 2;
pub const RINGLOG_PRIORITY_ERROR: c_int = 3;
pub const RINGLOG_PRIORITY_WARNING: c_int = 4;
pub const RINGLOG_PRIORITY_NOTICE: c_int = 5;
pub const RINGLOG_PRIORITY_INFO: c_int = 6;
pub const RINGLOG_PRIORITY_DEBUG: c_int = 7;

pub const RINGLOG_HEADER_DATE: c_int = HeaderMask::DATE.bits() as c_int;
pub const RINGLOG_HEADER_TIME: c_int = HeaderMask::TIME.bits() as c_int;
pub const RINGLOG_HEADER_MARK: c_int = HeaderMask::MARK.bits() as c_int;
pub const RINGLOG_HEADER_THREAD: c_int = HeaderMask::THREAD.bits() as c_int;
pub const RINGLOG_HEADER_PRIORITY: c_int = HeaderMask::PRIORITY.bits() as c_int;
pub const RINGLOG_HEADER_ALL: c_int = HeaderMask::ALL.bits() as c_int;
pub const RINGLOG_HEADER_DEFAULT: c_int = HeaderMask::DEFAULT.bits() as c_int;

pub const RINGLOG_OUTPUT_CONSOLE: c_int = 1;
pub const RINGLOG_OUTPUT_FILE: c_int = 2;
pub const RINGLOG_OUTPUT_BOTH: c_int = 3;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(err: &crate::Error) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(err.to_string()));
}

fn clear_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

fn status(result: Result<(), crate::Error>) -> c_int {
    match result {
        Ok(()) => 0,
        Err(e) => {
            set_error(&e);
            -1
        }
    }
}

const fn output_from_int(output: c_int) -> OutputMode {
    OutputMode {
        console: output & RINGLOG_OUTPUT_CONSOLE != 0,
        file: output & RINGLOG_OUTPUT_FILE != 0,
    }
}

fn priority_from_int(priority: c_int) -> Result<Priority, crate::Error> {
    u8::try_from(priority)
        .ok()
        .and_then(Priority::from_index)
        .ok_or_else(|| crate::Error::InvalidPriority(priority.to_string()))
}

/// Borrows a C string; `NULL` reads as empty.
///
/// # Safety
/// `s` must be `NULL` or a valid null-terminated string that outlives `'a`.
unsafe fn borrow_str<'a>(s: *const c_char, what: &str) -> Result<&'a str, crate::Error> {
    if s.is_null() {
        return Ok("");
    }
    // SAFETY: s is non-null and the caller guarantees a valid C string
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map_err(|_| crate::Error::InvalidConfig(format!("{what} is not valid UTF-8")))
}

/// Opens the process-wide logger.
///
/// `max_file_size` and `max_file_count` of 0 select the defaults. `output`
/// is a combination of `RINGLOG_OUTPUT_*`, `header` of `RINGLOG_HEADER_*`.
/// A second call while a logger is live succeeds and changes nothing.
///
/// # Safety
/// `dir` and `name` must be `NULL` or valid null-terminated UTF-8 strings.
///
/// # Returns
/// 0 on success, -1 on failure (see `ringlog_get_last_error`).
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ringlog_create(
    dir: *const c_char,
    name: *const c_char,
    max_file_size: u64,
    max_file_count: usize,
    output: c_int,
    header: c_int,
    threshold: c_int,
    append: c_int,
) -> c_int {
    clear_error();
    let settings = || -> Result<Settings, crate::Error> {
        // SAFETY: forwarded from this function's contract
        let dir = unsafe { borrow_str(dir, "dir") }?;
        // SAFETY: forwarded from this function's contract
        let name = unsafe { borrow_str(name, "name") }?;
        Ok(Settings {
            max_file_size,
            max_file_count,
            output: output_from_int(output),
            header: HeaderMask::from_bits(u8::try_from(header & RINGLOG_HEADER_ALL).unwrap_or(0)),
            threshold: priority_from_int(threshold)?,
            append: append != 0,
            ..Settings::new(dir, name)
        })
    };
    internal::debug("FFI", "Create requested");
    status(settings().and_then(|s| registry::create(&s)))
}

/// Closes the process-wide logger. Safe to call when none exists.
#[unsafe(no_mangle)]
pub extern "C" fn ringlog_destroy() -> c_int {
    clear_error();
    status(registry::destroy())
}

/// Emits one pre-formatted message.
///
/// # Safety
/// `file` must be `NULL` or a valid null-terminated UTF-8 string; `msg` must
/// be a valid null-terminated UTF-8 string.
///
/// # Returns
/// 0 when written or filtered out, -1 on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ringlog_log(
    file: *const c_char,
    line: c_int,
    priority: c_int,
    msg: *const c_char,
) -> c_int {
    clear_error();
    if msg.is_null() {
        set_error(&crate::Error::InvalidConfig("msg is NULL".to_string()));
        return -1;
    }
    let result = (|| {
        // SAFETY: forwarded from this function's contract
        let file = unsafe { borrow_str(file, "file") }?;
        // SAFETY: msg is non-null and the caller guarantees a valid C string
        let msg = unsafe { borrow_str(msg, "msg") }?;
        let priority = priority_from_int(priority)?;
        let site = CallSite::new(file, u32::try_from(line).unwrap_or(0));
        registry::emit(site, priority, format_args!("{msg}"))
    })();
    status(result)
}

/// Flushes every output of the live logger.
///
/// # Returns
/// 0 on success, -1 before `ringlog_create` or on an I/O error.
#[unsafe(no_mangle)]
pub extern "C" fn ringlog_flush() -> c_int {
    clear_error();
    status(registry::flush())
}

/// Copies this thread's last error into a caller-owned buffer.
///
/// # Safety
/// `buffer` must point to a writable buffer of at least `len` bytes.
///
/// # Returns
/// - Length of the message on success
/// - 0 if the last call on this thread succeeded
/// - -1 on invalid arguments or a buffer that is too small
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ringlog_get_last_error(buffer: *mut c_char, len: usize) -> c_int {
    if buffer.is_null() || len == 0 {
        return -1;
    }

    LAST_ERROR.with(|slot| {
        let borrow = slot.borrow();
        let Some(msg) = borrow.as_deref() else {
            // SAFETY: buffer is non-null and has at least 1 byte
            unsafe { *buffer = 0 };
            return 0;
        };

        let bytes = msg.as_bytes();
        if bytes.len() >= len {
            return -1;
        }

        // SAFETY: buffer has at least len bytes and bytes.len() < len
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), buffer.cast::<u8>(), bytes.len());
            *buffer.add(bytes.len()) = 0;
        }

        c_int::try_from(bytes.len()).unwrap_or(-1)
    })
}
