//! Process-wide logger with an explicit create/destroy lifecycle.
//!
//! The slot is an `RwLock<Option<Arc<Logger>>>`. `emit` holds the read lock
//! only long enough to clone the `Arc`, so a `destroy` racing an in-flight
//! emit lets that emit finish against the old logger; the file set is closed
//! when the last clone drops.

use crate::config::Config;
use crate::fmt::CallSite;
use crate::internal;
use crate::level::Priority;
use crate::logger::{LogHandler, Logger, Settings};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

static REGISTRY: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

fn slot() -> RwLockWriteGuard<'static, Option<Arc<Logger>>> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// The live logger, if any.
#[must_use]
pub fn logger() -> Option<Arc<Logger>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[must_use]
pub fn is_created() -> bool {
    logger().is_some()
}

/// Opens and installs the process-wide logger.
///
/// A second call while a logger is live succeeds without reconfiguring it.
/// On failure nothing is installed.
///
/// # Errors
/// [`crate::Error::InvalidConfig`] for an empty directory or name, or the
/// writer's directory/open failure.
pub fn create(settings: &Settings) -> Result<(), crate::Error> {
    install(|| Logger::open(settings))
}

/// [`create`] with settings taken from a loaded config.
///
/// # Errors
/// See [`create`]; also config parse errors.
pub fn create_from_config(config: &Config) -> Result<(), crate::Error> {
    install(|| Logger::from_config(config))
}

fn install(open: impl FnOnce() -> Result<Logger, crate::Error>) -> Result<(), crate::Error> {
    internal::init();
    let mut slot = slot();
    if slot.is_some() {
        internal::debug("REGISTRY", "Already created, keeping existing logger");
        return Ok(());
    }
    let logger = open().inspect_err(|e| {
        internal::error("REGISTRY", &format!("Create failed: {e}"));
    })?;
    *slot = Some(Arc::new(logger));
    internal::debug("REGISTRY", "Logger created");
    Ok(())
}

/// Removes the process-wide logger. Succeeds when there is none.
///
/// # Errors
/// Never fails today; the `Result` keeps the lifecycle calls uniform.
pub fn destroy() -> Result<(), crate::Error> {
    if slot().take().is_some() {
        internal::debug("REGISTRY", "Logger destroyed");
    }
    Ok(())
}

/// Installs a handler that replaces filtering, formatting and rotation.
///
/// The handler belongs to the live logger and goes away with [`destroy`].
///
/// # Errors
/// [`crate::Error::NotInitialized`] before [`create`].
pub fn set_external_handler<F>(handler: F) -> Result<(), crate::Error>
where
    F: Fn(&CallSite<'_>, Priority, fmt::Arguments<'_>) -> Result<(), crate::Error>
        + Send
        + Sync
        + 'static,
{
    set_external_log_handler(handler)
}

/// Same as [`set_external_handler`] for any [`LogHandler`] implementor.
///
/// # Errors
/// [`crate::Error::NotInitialized`] before [`create`].
pub fn set_external_log_handler(handler: impl LogHandler + 'static) -> Result<(), crate::Error> {
    logger()
        .ok_or(crate::Error::NotInitialized)?
        .set_log_handler(handler);
    Ok(())
}

/// # Errors
/// [`crate::Error::NotInitialized`] before [`create`].
pub fn clear_external_handler() -> Result<(), crate::Error> {
    logger().ok_or(crate::Error::NotInitialized)?.clear_handler();
    Ok(())
}

/// Sole entry point for call sites; see [`Logger::emit`].
///
/// # Errors
/// [`crate::Error::NotInitialized`] before [`create`] (nothing is formatted),
/// otherwise whatever [`Logger::emit`] reports.
pub fn emit(
    site: CallSite<'_>,
    priority: Priority,
    args: fmt::Arguments<'_>,
) -> Result<(), crate::Error> {
    logger()
        .ok_or(crate::Error::NotInitialized)?
        .emit(site, priority, args)
}

/// # Errors
/// [`crate::Error::NotInitialized`] before [`create`], or an output's flush error.
pub fn flush() -> Result<(), crate::Error> {
    logger().ok_or(crate::Error::NotInitialized)?.flush()
}
