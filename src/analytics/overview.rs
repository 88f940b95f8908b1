use std::sync::OnceLock;

use regex::Regex;

use crate::filters::ParticipantFilter;
use crate::models::{MessageRecord, Overview};

/// URL-shaped substrings: `http(s)://` or `ftp://` links, and bare `www.` hosts
fn url_re() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"'()\[\]{}]+"#)
            .expect("valid url regex")
    })
}

/// Number of URL-shaped substrings in `text`
pub fn count_links(text: &str) -> usize {
    url_re().find_iter(text).count()
}

/// Message, word, media and link counts for the selected participant
///
/// Words are whitespace-separated tokens of every selected body, media placeholders and
/// group notifications included.
pub fn overview(records: &[MessageRecord], filter: &ParticipantFilter) -> Overview {
    filter.select(records).fold(Overview::default(), |mut acc, record| {
        acc.messages += 1;
        acc.words += record.body().split_whitespace().count();
        acc.media += usize::from(record.is_media());
        acc.links += count_links(record.body());
        acc
    })
}
