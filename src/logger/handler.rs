//! Host-installed replacement for the whole emit path.

use crate::fmt::CallSite;
use crate::level::Priority;
use std::fmt;
use std::sync::Arc;

/// Receives every record unfiltered and unformatted once installed; the
/// logger's own filter, formatting and outputs are skipped.
///
/// Closures with the matching signature implement this automatically.
pub trait LogHandler: Send + Sync {
    /// # Errors
    /// Whatever the handler wants the emitting call site to see.
    fn handle(
        &self,
        site: &CallSite<'_>,
        priority: Priority,
        args: fmt::Arguments<'_>,
    ) -> Result<(), crate::Error>;
}

impl<F> LogHandler for F
where
    F: Fn(&CallSite<'_>, Priority, fmt::Arguments<'_>) -> Result<(), crate::Error> + Send + Sync,
{
    fn handle(
        &self,
        site: &CallSite<'_>,
        priority: Priority,
        args: fmt::Arguments<'_>,
    ) -> Result<(), crate::Error> {
        self(site, priority, args)
    }
}

/// Shared handle to an installed handler.
pub type Handler = Arc<dyn LogHandler>;
