//! One file per subcommand; each handler reports its own failures.

mod log;
mod stats;

pub use log::cmd_log;
pub use stats::cmd_stats;
