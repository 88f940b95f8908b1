use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use super::timestamp::resolve_timestamp;
use crate::models::{GROUP_NOTIFICATION, MessageRecord};
use crate::utils::{MAX_EXPORT_SIZE_BYTES, validate_file_size};

const UTF8_BOM: &str = "\u{feff}";

/// Message header: `D/D/YY(YY), H:MM[ AM|PM] - `
fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| {
        Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4},\s[0-9]{1,2}:[0-9]{2}(?:\s?[AaPp][Mm])?\s-\s")
            .expect("valid message header regex")
    })
}

/// Sender prefix: the shortest non-empty run of characters followed by `": "`
fn sender_re() -> &'static Regex {
    static SENDER_RE: OnceLock<Regex> = OnceLock::new();
    SENDER_RE.get_or_init(|| Regex::new(r"(?s)^(.+?): ").expect("valid sender regex"))
}

/// A detected message: its header text and everything up to the next header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage<'a> {
    pub header: &'a str,
    pub content: &'a str,
}

/// Split export text into raw messages at each header
///
/// Text before the first header is dropped.
pub fn segment(text: &str) -> Vec<RawMessage<'_>> {
    let headers: Vec<_> = header_re().find_iter(text).collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let end = headers.get(i + 1).map_or(text.len(), |next| next.start());
            RawMessage { header: header.as_str(), content: &text[header.end()..end] }
        })
        .collect()
}

/// Split message content into `(sender, body)` at the first `": "`
///
/// Content without a sender prefix (joins, leaves, security notices) is attributed to
/// [`GROUP_NOTIFICATION`]. Leading whitespace and the trailing line break are removed from the
/// body; line breaks inside it are kept.
pub fn split_sender(content: &str) -> (&str, &str) {
    let split = sender_re().captures(content).and_then(|caps| {
        let sender = caps.get(1)?;
        let prefix = caps.get(0)?;
        (!sender.as_str().trim().is_empty()).then(|| (sender.as_str(), &content[prefix.end()..]))
    });

    match split {
        Some((sender, body)) => (sender, clean_body(body)),
        None => (GROUP_NOTIFICATION, clean_body(content)),
    }
}

fn clean_body(body: &str) -> &str {
    body.trim_start().trim_end_matches(['\r', '\n'])
}

/// Parse chat export text into message records, in source order
///
/// Messages whose header does not resolve under any supported date layout are dropped.
/// Text without any header yields an empty Vec.
///
/// # Examples
///
/// ```
/// use chatlog_analyzer::parse_chat;
///
/// let records = parse_chat("1/1/24, 09:05 - Alice: Hello there\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sender(), "Alice");
/// assert_eq!(records[0].body(), "Hello there");
/// ```
pub fn parse_chat(text: &str) -> Vec<MessageRecord> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let raw = segment(text);

    let parsed: Vec<Option<MessageRecord>> = raw
        .par_iter()
        .map(|message| {
            let Some(timestamp) = resolve_timestamp(message.header) else {
                debug!("Dropping message with unrecognized timestamp: {:?}", message.header);
                return None;
            };
            let (sender, body) = split_sender(message.content);
            Some(MessageRecord::new(timestamp, sender, body))
        })
        .collect();

    let records: Vec<MessageRecord> = parsed.into_iter().flatten().collect();
    let dropped = raw.len() - records.len();
    debug!("Parsed {} messages ({} dropped)", records.len(), dropped);

    records
}

/// Parse undecoded export bytes
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8.
pub fn parse_chat_bytes(bytes: &[u8]) -> Result<Vec<MessageRecord>> {
    let text = std::str::from_utf8(bytes).context("Chat export is not valid UTF-8 text")?;
    Ok(parse_chat(text))
}

/// Read and parse a chat export file
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the export size limit, or is not
/// valid UTF-8.
pub fn parse_chat_file(path: &Path) -> Result<Vec<MessageRecord>> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open chat export: {}", path.display()))?;
    validate_file_size(&file, path, MAX_EXPORT_SIZE_BYTES)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read chat export: {}", path.display()))?;

    parse_chat_bytes(&bytes).with_context(|| format!("Failed to parse {}", path.display()))
}
