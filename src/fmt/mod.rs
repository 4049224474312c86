//! Record rendering: the header field set and the capacity-checked line builder.

mod header;
mod record;

pub use header::{HeaderMask, MaskingMode};
pub use record::{CallSite, MAX_ENTRY_SIZE, RecordBuffer, format_record, format_record_at};
