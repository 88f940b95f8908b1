use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use super::hour_bucket::HourBucket;

/// Sender recorded for system lines (joins, leaves, encryption notices)
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Canonical attachment placeholder written by the exporter
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Returns true when `body` is the media placeholder, ignoring case and surrounding whitespace
pub fn is_media_placeholder(body: &str) -> bool {
    body.trim().eq_ignore_ascii_case(MEDIA_PLACEHOLDER)
}

/// One parsed chat message with its calendar fields
///
/// Serializes with the column layout of the processed chat table:
/// `date, user, message, only_date, year, month_num, month, day, day_name, hour, minute, period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    #[serde(rename = "date")]
    timestamp: NaiveDateTime,
    #[serde(rename = "user")]
    sender: String,
    #[serde(rename = "message")]
    body: String,
    #[serde(rename = "only_date")]
    date: NaiveDate,
    year: i32,
    month_num: u32,
    #[serde(rename = "month")]
    month_name: &'static str,
    day: u32,
    day_name: &'static str,
    hour: u32,
    minute: u32,
    #[serde(rename = "period")]
    hour_bucket: HourBucket,
}

impl MessageRecord {
    /// Build a record, computing every derived calendar field from `timestamp`
    ///
    /// A blank `sender` is replaced by [`GROUP_NOTIFICATION`].
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let sender = sender.into();
        let sender =
            if sender.trim().is_empty() { GROUP_NOTIFICATION.to_string() } else { sender };

        let date = timestamp.date();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender,
            body: body.into(),
            date,
            year: date.year(),
            month_num: date.month(),
            month_name: month_name(date.month()),
            day: date.day(),
            day_name: weekday_name(date.weekday()),
            hour,
            minute: timestamp.minute(),
            hour_bucket: HourBucket::of(&timestamp),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_num(&self) -> u32 {
        self.month_num
    }

    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> chrono::Weekday {
        self.date.weekday()
    }

    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn hour_bucket(&self) -> HourBucket {
        self.hour_bucket
    }

    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    pub fn is_media(&self) -> bool {
        is_media_placeholder(&self.body)
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// English name of a weekday
pub fn weekday_name(weekday: chrono::Weekday) -> &'static str {
    use chrono::Weekday::*;
    match weekday {
        Mon => "Monday",
        Tue => "Tuesday",
        Wed => "Wednesday",
        Thu => "Thursday",
        Fri => "Friday",
        Sat => "Saturday",
        Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let record = MessageRecord::new(at(2024, 1, 1, 9, 5), "Alice", "Hello there");

        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.year(), 2024);
        assert_eq!(record.month_num(), 1);
        assert_eq!(record.month_name(), "January");
        assert_eq!(record.day(), 1);
        assert_eq!(record.day_name(), "Monday");
        assert_eq!(record.hour(), 9);
        assert_eq!(record.minute(), 5);
        assert_eq!(record.hour_bucket().to_string(), "09-10");
    }

    #[test]
    fn test_late_night_bucket_wraps() {
        let record = MessageRecord::new(at(2023, 12, 31, 23, 59), "Bob", "happy new year");
        assert_eq!(record.hour_bucket().to_string(), "23-00");
        assert_eq!(record.day_name(), "Sunday");
        assert_eq!(record.month_name(), "December");
    }

    #[test]
    fn test_blank_sender_becomes_notification() {
        let record = MessageRecord::new(at(2024, 1, 1, 0, 0), "  ", "Alice left");
        assert_eq!(record.sender(), GROUP_NOTIFICATION);
        assert!(record.is_group_notification());
    }

    #[test]
    fn test_media_placeholder_variants() {
        assert!(is_media_placeholder("<Media omitted>"));
        assert!(is_media_placeholder(" <media omitted> "));
        assert!(is_media_placeholder("<MEDIA OMITTED>\n"));
        assert!(!is_media_placeholder("<Media omitted> and a caption"));
        assert!(!is_media_placeholder("image omitted"));
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
        assert_eq!(month_name(5), "May");
    }

    #[test]
    fn test_serialized_columns() {
        let record = MessageRecord::new(at(2024, 3, 2, 18, 30), "Alice", "hi");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["user"], "Alice");
        assert_eq!(value["message"], "hi");
        assert_eq!(value["only_date"], "2024-03-02");
        assert_eq!(value["month"], "March");
        assert_eq!(value["day_name"], "Saturday");
        assert_eq!(value["period"], "18-19");
    }
}
