use crate::config::Config;
use crate::internal;
use crate::level::Priority;
use crate::registry;
use std::process::ExitCode;

/// Handles `ringlog log <priority> <message...>`.
///
/// Goes through the full registry lifecycle so the file set is resumed and
/// closed exactly as a long-running host would.
#[must_use]
pub fn cmd_log(priority: Priority, message: &[String], config: &Config) -> ExitCode {
    if let Err(e) = registry::create_from_config(config) {
        eprintln!("ringlog: {e}");
        return ExitCode::FAILURE;
    }

    let message = message.join(" ");
    let result = crate::emit!(priority, "{message}").and_then(|()| registry::flush());
    let _ = registry::destroy();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Log failed: {e}"));
            eprintln!("ringlog: {e}");
            ExitCode::FAILURE
        }
    }
}
