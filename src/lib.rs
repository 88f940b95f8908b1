//! Chatlog Analyzer - Statistics for exported group chat logs
//!
//! This library parses the plain-text chat exports written by mobile messengers and computes
//! descriptive statistics over them. It supports:
//!
//! - Parsing exports in several regional date/time layouts, including multi-line messages
//! - Attributing system notices to a `group_notification` sender
//! - Message, word, media and link counts, per sender or for the whole group
//! - Busiest senders, common words, emoji usage, timelines and weekday/hour activity
//! - Exporting the processed message table as CSV
//!
//! # Example
//!
//! ```
//! use chatlog_analyzer::{ParticipantFilter, StopWords, build_report, parse_chat};
//!
//! let export = "\
//! 1/2/24, 10:00 - Alice: hello world
//! 1/2/24, 10:01 - Bob: <Media omitted>
//! 1/2/24, 10:02 - Alice: see https://example.com
//! ";
//! let records = parse_chat(export);
//! let report = build_report(&records, &ParticipantFilter::All, &StopWords::new());
//!
//! assert_eq!(report.overview.messages, 3);
//! assert_eq!(report.overview.media, 1);
//! assert_eq!(report.overview.links, 1);
//! ```

pub mod analytics;
pub mod cli;
pub mod filters;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use analytics::{StopWords, build_report};
pub use filters::{ParticipantFilter, parse_filter};
pub use models::{MessageRecord, Report};
pub use output::write_csv;
pub use parsers::{parse_chat, parse_chat_file};
