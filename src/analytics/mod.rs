//! Statistics over parsed chat records
//!
//! Every analytic takes the full record slice plus a [`ParticipantFilter`] and reads only the
//! records the filter selects. Analytics never mutate records and never fail: an empty
//! selection yields zero counts and empty tables.
//!
//! Rankings (`busiest_users`, `top_words`, `emoji_frequency`, `weekday_activity`,
//! `month_activity`) sort by descending count and break ties by first appearance in the
//! chat, via [`OrderedCounter`]. Timelines are chronological.
//!
//! [`build_report`] runs all of them for one selection.
//!
//! [`ParticipantFilter`]: crate::filters::ParticipantFilter

pub mod counter;
pub mod emoji;
pub mod heatmap;
pub mod overview;
pub mod report;
pub mod timeline;
pub mod users;
pub mod words;

pub use counter::OrderedCounter;
pub use emoji::{EmojiClassifier, UnicodeEmoji, emoji_frequency, emoji_frequency_with};
pub use heatmap::activity_heatmap;
pub use overview::{count_links, overview};
pub use report::build_report;
pub use timeline::{daily_timeline, month_activity, monthly_timeline, weekday_activity};
pub use users::{TOP_USERS, busiest_users, participants};
pub use words::{MAX_CLOUD_WORDS, StopWords, TOP_WORDS, top_words, word_cloud};
