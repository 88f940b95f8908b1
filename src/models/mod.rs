//! Data models for parsed chat exports.
//!
//! - [`MessageRecord`] - One timestamped message with derived calendar fields
//! - [`HourBucket`] - One-hour activity window (`"09-10"`, `"23-00"`)
//! - Result types in [`stats`] - Serializable tables produced by the analytics
//!
//! Records are only built through [`MessageRecord::new`], so the derived fields are always
//! present and consistent with the timestamp.

pub mod hour_bucket;
pub mod record;
pub mod stats;

pub use hour_bucket::HourBucket;
pub use record::{
    GROUP_NOTIFICATION, MEDIA_PLACEHOLDER, MessageRecord, is_media_placeholder, month_name,
    weekday_name,
};
pub use stats::{
    ActivityCount, ActivityHeatmap, BusyUsers, DailyPoint, EmojiCount, MonthlyPoint, Overview,
    Report, UserCount, UserShare, WordCloud, WordCount, WordWeight,
};
