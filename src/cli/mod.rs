//! Command-line interface
//!
//! # Error Handling Strategy
//!
//! - **Input errors**: unreadable, oversized or non-UTF-8 exports, bad `--filter` expressions
//!   and unreadable stop-word lists propagate as `anyhow` errors to `main`, which exits
//!   non-zero with the context chain.
//!
//! - **Unknown senders**: selecting a sender with no messages is not an error. A warning is
//!   logged and the statistics come out empty.
//!
//! - **Output**: every user-controlled string printed in a text table goes through
//!   [`sanitize_cell`](crate::utils::sanitize_cell). JSON and CSV output are left as is.

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, execute, run};
