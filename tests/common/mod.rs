//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for chat export files in a temp directory
pub struct ChatExportBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl ChatExportBuilder {
    /// Create a new builder with an empty export
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Append one message
    pub fn message(mut self, message: MessageLineBuilder) -> Self {
        self.lines.push(message.to_line());
        self
    }

    /// Append several messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = MessageLineBuilder>) -> Self {
        self.lines.extend(messages.into_iter().map(|m| m.to_line()));
        self
    }

    /// Append a raw line (preamble, continuation line, garbage)
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Export text as the exporter would write it
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Write `chat.txt` and return the temp dir (keep it alive) and the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("chat.txt");
        fs::write(&path, self.text()).expect("Failed to write chat export");
        (self.temp_dir, path)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for ChatExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single `D/M/YY, H:MM - Sender: body` message
pub struct MessageLineBuilder {
    date: String,
    time: String,
    sender: Option<String>,
    body: String,
}

impl MessageLineBuilder {
    /// Message from `sender` on 1 Feb 2024 at 10:00
    pub fn new(sender: &str, body: &str) -> Self {
        Self {
            date: "1/2/24".to_string(),
            time: "10:00".to_string(),
            sender: Some(sender.to_string()),
            body: body.to_string(),
        }
    }

    /// System notice without a sender
    pub fn notice(body: &str) -> Self {
        Self { sender: None, ..Self::new("", body) }
    }

    /// Set the header date as written in the export (e.g. `"10/08/2023"`)
    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Set the header time as written in the export (e.g. `"8:15 pm"`)
    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn to_line(&self) -> String {
        let sender = self.sender.as_ref().map(|s| format!("{}: ", s)).unwrap_or_default();
        format!("{}, {} - {}{}", self.date, self.time, sender, self.body)
    }
}

fn at(date: &str, time: &str, message: MessageLineBuilder) -> MessageLineBuilder {
    message.date(date).time(time)
}

/// A small family group export covering notices, media, links, emoji and multi-line messages
///
/// 9 messages: 2 notices, Mom 3, Dad 2, Priya 2 (one media); 2 links, all in Mom and Dad.
pub fn realistic_chat_export() -> ChatExportBuilder {
    use MessageLineBuilder as M;

    ChatExportBuilder::new()
        .raw("Messages and calls are end-to-end encrypted.")
        .message(at("30/12/23", "9:00", M::notice("Mom created group \"Family\"")))
        .message(at("30/12/23", "9:01", M::new("Mom", "Good morning everyone ☀️")))
        .message(at("30/12/23", "9:15", M::new("Dad", "Tickets booked: https://example.com/trip")))
        .message(at("31/12/23", "23:59", M::new("Priya", "<Media omitted>")))
        .message(at("1/1/24", "0:00", M::new("Priya", "Happy new year!! 🎉🎉")))
        .message(at("1/1/24", "0:05", M::new("Mom", "Happy new year 😂❤️")))
        .message(at("2/1/24", "18:30", M::new("Dad", "Shopping list:")))
        .raw("milk")
        .raw("bread")
        .message(at("3/1/24", "8:00", M::notice("Priya left")))
        .message(at("15/2/24", "12:00", M::new("Mom", "❤️ see www.example.org")))
}
