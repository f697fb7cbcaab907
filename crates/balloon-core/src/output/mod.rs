//! Output
//!
//! World snapshots and JSONL record logging.

pub mod snapshot;
pub mod writer;

pub use snapshot::*;
pub use writer::*;
