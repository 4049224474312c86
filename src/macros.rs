//! Call-site macros for the process-wide logger.
//!
//! `emit!` returns the `Result`; the per-priority macros discard it, since a
//! lost log line must never disturb the caller.

/// Logs through the registry at an explicit priority, capturing `file!()` and `line!()`.
///
/// ```no_run
/// use ringlog::Priority;
///
/// if let Err(e) = ringlog::emit!(Priority::Error, "disk {} is full", "/dev/sda1") {
///     eprintln!("log failed: {e}");
/// }
/// ```
#[macro_export]
macro_rules! emit {
    ($priority:expr, $($arg:tt)+) => {
        $crate::registry::emit(
            $crate::CallSite::new(file!(), line!()),
            $priority,
            format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! emerg {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Emergency, $($arg)+);
    }};
}

#[macro_export]
macro_rules! alert {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Alert, $($arg)+);
    }};
}

#[macro_export]
macro_rules! crit {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Critical, $($arg)+);
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Error, $($arg)+);
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Warning, $($arg)+);
    }};
}

#[macro_export]
macro_rules! notice {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Notice, $($arg)+);
    }};
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Info, $($arg)+);
    }};
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {{
        let _ = $crate::emit!($crate::Priority::Debug, $($arg)+);
    }};
}
