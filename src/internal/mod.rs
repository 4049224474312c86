//! ringlog's own diagnostics about directory creation, rotation and config loading.
//!
//! These never go through a [`crate::Logger`]: a logger that reported its own
//! rotations into the file it is rotating would recurse. Diagnostics go to
//! stderr, gated by a threshold fixed once through `OnceLock`.

use crate::config::Config;
use crate::level::Priority;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Environment variable naming the internal threshold (e.g. `debug`).
pub const ENV_VAR: &str = "RINGLOG_INTERNAL";

static INTERNAL_THRESHOLD: OnceLock<Option<Priority>> = OnceLock::new();

/// Reads the threshold from [`ENV_VAR`]; unset or unparsable keeps diagnostics off.
///
/// Only the first initializer takes effect.
pub fn init() {
    INTERNAL_THRESHOLD.get_or_init(threshold_from_env);
}

/// Like [`init`], falling back to `[general] internal` when the variable is unset.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_THRESHOLD.get().is_some();
    INTERNAL_THRESHOLD.get_or_init(|| {
        threshold_from_env().or_else(|| {
            config
                .general
                .internal
                .as_deref()
                .and_then(|s| s.parse().ok())
        })
    });
    if !was_init {
        debug(
            "INTERNAL",
            &format!("Threshold: {}", config.general.threshold),
        );
    }
}

fn threshold_from_env() -> Option<Priority> {
    std::env::var(ENV_VAR).ok().and_then(|s| s.parse().ok())
}

/// Calls before `init` are silently dropped.
fn log(priority: Priority, scope: &str, msg: &str) {
    if let Some(Some(threshold)) = INTERNAL_THRESHOLD.get()
        && priority.admitted_by(*threshold)
    {
        let _ = writeln!(
            io::stderr().lock(),
            "ringlog: {}{scope:<8} {msg}",
            priority.label()
        );
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Priority::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Priority::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Priority::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Priority::Error, scope, msg);
}
