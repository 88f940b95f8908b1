use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use super::counter::OrderedCounter;
use crate::filters::ParticipantFilter;
use crate::models::{MessageRecord, WordCloud, WordCount, WordWeight};
use crate::utils::{MAX_WORD_LIST_SIZE_BYTES, read_text_file};

/// Number of entries in the top-words table
pub const TOP_WORDS: usize = 20;

/// Most words a cloud is built from
pub const MAX_CLOUD_WORDS: usize = 200;

/// Lowercase words excluded from word statistics
///
/// Built once by the caller and passed by reference into every word analytic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from whitespace-separated words; words are lowercased
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().map(str::to_lowercase).collect()
    }

    /// Load a whitespace-separated word list
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is larger than 16 MiB, or is not UTF-8.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = read_text_file(path, MAX_WORD_LIST_SIZE_BYTES)?;
        Ok(Self::from_text(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Lowercased tokens of human, non-media messages, minus stop words
fn content_words<'a>(
    records: &'a [MessageRecord],
    filter: &'a ParticipantFilter,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    filter
        .select(records)
        .filter(|record| !record.is_group_notification() && !record.is_media())
        .flat_map(|record| {
            record
                .body()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

/// The [`TOP_WORDS`] most frequent words, ties in first-use order
pub fn top_words(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
    stop_words: &StopWords,
) -> Vec<WordCount> {
    content_words(records, filter, stop_words)
        .collect::<OrderedCounter<String>>()
        .most_common(Some(TOP_WORDS))
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Word cloud input: the filtered corpus and per-word weights
///
/// Weights are frequencies relative to the most frequent word, for at most
/// [`MAX_CLOUD_WORDS`] words.
pub fn word_cloud(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
    stop_words: &StopWords,
) -> WordCloud {
    let words: Vec<String> = content_words(records, filter, stop_words).collect();
    let text = words.join(" ");

    let ranked =
        words.into_iter().collect::<OrderedCounter<String>>().most_common(Some(MAX_CLOUD_WORDS));
    let max = ranked.first().map_or(0, |(_, count)| *count);
    let weights = ranked
        .into_iter()
        .map(|(word, count)| WordWeight { word, weight: count as f64 / max as f64 })
        .collect();

    WordCloud { text, weights }
}
