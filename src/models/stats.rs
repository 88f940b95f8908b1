use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::hour_bucket::HourBucket;
use super::record::weekday_name;

/// Headline counters for a record selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub messages: usize,
    pub words: usize,
    pub media: usize,
    pub links: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    /// Share of all messages, in percent, rounded to two decimals
    pub percent: f64,
}

/// Most active senders and every sender's share of the conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    pub top: Vec<UserCount>,
    pub shares: Vec<UserShare>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    /// Frequency relative to the most frequent word (which has weight 1.0)
    pub weight: f64,
}

/// Input for a frequency-weighted word cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCloud {
    /// Stop-word filtered tokens joined by single spaces
    pub text: String,
    pub weights: Vec<WordWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    pub count: usize,
    /// `"<Month>-<year>"`, e.g. `"January-2024"`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Message count for one weekday or month name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: &'static str,
    pub count: usize,
}

/// Weekday × hour-bucket message counts
///
/// Always complete: 7 rows (Monday first) by 24 columns (`00-01` .. `23-00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub rows: Vec<&'static str>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Zero-filled heatmap
    pub fn empty() -> Self {
        Self {
            rows: Self::WEEKDAYS.iter().map(|d| weekday_name(*d)).collect(),
            columns: HourBucket::all().map(|b| b.label()).collect(),
            cells: vec![vec![0; HourBucket::COUNT]; Self::WEEKDAYS.len()],
        }
    }

    pub fn increment(&mut self, weekday: Weekday, bucket: HourBucket) {
        self.cells[weekday.num_days_from_monday() as usize][bucket.index()] += 1;
    }

    pub fn get(&self, weekday: Weekday, bucket: HourBucket) -> usize {
        self.cells[weekday.num_days_from_monday() as usize][bucket.index()]
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self::empty()
    }
}

/// Every statistic for one participant selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub participant: Option<String>,
    pub overview: Overview,
    /// Only present for the wildcard selection
    pub busy_users: Option<BusyUsers>,
    pub top_words: Vec<WordCount>,
    pub word_cloud: WordCloud,
    pub emojis: Vec<EmojiCount>,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub weekday_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: ActivityHeatmap,
}
