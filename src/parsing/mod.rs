//! Low-level parsing utilities for exported chat logs.
//!
//! - [`timestamp`] - the bracketed timestamp pattern and calendar parsing
//! - [`author`] - splitting an `Author: ` prefix from a message segment
//!
//! [`ChatParser`](crate::parser::ChatParser) combines both into the full
//! text-to-records pipeline.

pub mod author;
pub mod timestamp;

// Re-export commonly used items
pub use author::{AUTHOR_PATTERN, split_author};
pub use timestamp::{DateOrder, TIMESTAMP_PATTERN, parse_timestamp};
