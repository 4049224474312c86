// Forbid unsafe code except when the ffi feature is enabled
#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]

//! `ringlog` - priority-filtered logging into a size- and count-bounded ring of files.
//!
//! - Inverse-ordered severity scale (emergency = 0 … debug = 7) with a threshold
//! - Header fields (date, time with microseconds, `file:line`, thread, priority label)
//!   selected by a bit mask
//! - Rotating file set `{dir}/{name}-{index}.log` that resumes the last file after a restart
//!   and overwrites the oldest slot when the ring is full
//! - Process-wide registry with explicit create/destroy and an external-handler bypass
//! - TOML configuration, optional CLI and C-ABI bindings
//!
//! # Example
//!
//! ```no_run
//! use ringlog::{OutputMode, Priority, Settings};
//!
//! let settings = Settings {
//!     output: OutputMode::BOTH,
//!     threshold: Priority::Notice,
//!     max_file_size: 1024 * 1024,
//!     max_file_count: 5,
//!     ..Settings::new("/var/log/myapp", "myapp")
//! };
//! ringlog::registry::create(&settings).expect("log directory is writable");
//!
//! ringlog::notice!("listening on port {}", 8080);
//! ringlog::debug!("dropped: below the threshold");
//!
//! ringlog::registry::destroy().ok();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `ringlog` command-line tool
//! - `ffi`: C-ABI bindings

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod inventory;
pub mod level;
pub mod logger;
pub mod output;
pub mod path;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use config::Config;
pub use error::Error;
pub use fmt::{CallSite, HeaderMask, MAX_ENTRY_SIZE, MaskingMode};
pub use inventory::{LogFileInfo, RotationInventory, format_size, parse_size};
pub use level::Priority;
pub use logger::{
    FileBuilder, Handler, LogHandler, Logger, LoggerBuilder, OutputMode, Settings,
};
pub use output::{ConsoleOutput, LogRecord, Output, RotatingFileWriter};

#[cfg(feature = "ffi")]
pub use ffi::{
    RINGLOG_HEADER_ALL, RINGLOG_HEADER_DATE, RINGLOG_HEADER_DEFAULT, RINGLOG_HEADER_MARK,
    RINGLOG_HEADER_PRIORITY, RINGLOG_HEADER_THREAD, RINGLOG_HEADER_TIME, RINGLOG_OUTPUT_BOTH,
    RINGLOG_OUTPUT_CONSOLE, RINGLOG_OUTPUT_FILE, RINGLOG_PRIORITY_ALERT,
    RINGLOG_PRIORITY_CRITICAL, RINGLOG_PRIORITY_DEBUG, RINGLOG_PRIORITY_EMERGENCY,
    RINGLOG_PRIORITY_ERROR, RINGLOG_PRIORITY_INFO, RINGLOG_PRIORITY_NOTICE,
    RINGLOG_PRIORITY_WARNING, ringlog_create, ringlog_destroy, ringlog_flush,
    ringlog_get_last_error, ringlog_log,
};
