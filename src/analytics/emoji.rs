//! Emoji detection and frequency.
//!
//! Detection goes through the [`EmojiClassifier`] trait. The crate ships one implementation,
//! [`UnicodeEmoji`], which reads the Unicode emoji properties compiled into `regex` and
//! recognizes whole emoji sequences, so `👍🏽`, `👨‍👩‍👧` and `🇮🇳` each count as one glyph.

use std::sync::OnceLock;

use regex::Regex;

use super::counter::OrderedCounter;
use crate::filters::ParticipantFilter;
use crate::models::{EmojiCount, MessageRecord};

/// Finds emoji glyphs in text
pub trait EmojiClassifier {
    /// Every emoji glyph in `text`, in order of appearance
    fn find_emojis<'t>(&self, text: &'t str) -> Vec<&'t str>;

    fn is_emoji(&self, glyph: &str) -> bool {
        matches!(self.find_emojis(glyph).as_slice(), [only] if *only == glyph)
    }
}

/// Classifier backed by the Unicode emoji property tables
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

fn emoji_re() -> &'static Regex {
    static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
    EMOJI_RE.get_or_init(|| {
        Regex::new(concat!(
            // Flags: a pair of regional indicators
            r"\p{Regional_Indicator}{2}",
            // Keycaps: 1️⃣ #️⃣
            r"|[#*0-9]\x{FE0F}?\x{20E3}",
            // Pictographs with optional presentation selector or skin tone, joined by ZWJ
            r"|\p{Extended_Pictographic}(?:\x{FE0F}|\p{Emoji_Modifier})?",
            r"(?:\x{200D}\p{Extended_Pictographic}(?:\x{FE0F}|\p{Emoji_Modifier})?)*",
        ))
        .expect("valid emoji regex")
    })
}

impl EmojiClassifier for UnicodeEmoji {
    fn find_emojis<'t>(&self, text: &'t str) -> Vec<&'t str> {
        emoji_re().find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Emoji usage for the selected participant, most used first (ties in first-use order)
pub fn emoji_frequency(records: &[MessageRecord], filter: &ParticipantFilter) -> Vec<EmojiCount> {
    emoji_frequency_with(records, filter, &UnicodeEmoji)
}

/// [`emoji_frequency`] with a caller-supplied classifier
pub fn emoji_frequency_with<C: EmojiClassifier + ?Sized>(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
    classifier: &C,
) -> Vec<EmojiCount> {
    filter
        .select(records)
        .flat_map(|record| classifier.find_emojis(record.body()))
        .collect::<OrderedCounter<&str>>()
        .most_common(None)
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji: emoji.to_string(), count })
        .collect()
}
