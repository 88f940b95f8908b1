//! Export of processed records
//!
//! Mirrors the table a spreadsheet user would expect: one row per message with the derived
//! calendar fields alongside the raw timestamp, sender and body.

pub mod csv;

pub use self::csv::{CSV_HEADERS, records_to_csv_string, write_csv, write_csv_file};
