//! Chat export parser
//!
//! # Error Handling Strategy
//!
//! This module follows the same **graceful degradation** approach as the rest of the crate:
//!
//! - **Individual message failures**: A header whose date does not resolve under any supported
//!   layout drops only that message. The drop is logged at `debug` level with the header text.
//!
//! - **Empty input**: Text with no recognizable header parses to an empty Vec, not an error.
//!   Every analytic has a well-defined empty result for it.
//!
//! - **Structural failures**: Input that is not UTF-8 text, or a file that cannot be opened or
//!   exceeds the size limit, fails the whole parse with an `anyhow` error carrying context.

pub mod chat;
pub mod timestamp;

pub use chat::{RawMessage, parse_chat, parse_chat_bytes, parse_chat_file, segment, split_sender};
pub use timestamp::{
    Clock, FieldOrder, TIMESTAMP_FORMATS, TimestampFormat, YearDigits, resolve_timestamp,
};
