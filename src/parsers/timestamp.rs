//! Timestamp resolution for chat export message headers.
//!
//! Exporters write the header date in the device locale, so the same file shape can carry
//! `10/08/23, 8:15 pm`, `10/08/2023, 20:15` or `8/10/23, 20:15`. A header is split into its
//! numeric parts once, then tried against [`TIMESTAMP_FORMATS`] in order; the first format
//! that yields a valid date-time wins.
//!
//! # Two-digit years
//!
//! Two-digit years follow the POSIX `%y` pivot: `00`–`68` map to 2000–2068 and `69`–`99`
//! map to 1969–1999. See [`expand_two_digit_year`].

use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Which date component is written first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    DayFirst,
    MonthFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearDigits {
    Two,
    Four,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// `20:15`, no meridiem allowed
    TwentyFourHour,
    /// `8:15 pm`, meridiem required and hour in 1..=12
    TwelveHour,
}

/// One candidate header layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    pub order: FieldOrder,
    pub year: YearDigits,
    pub clock: Clock,
}

impl TimestampFormat {
    pub const fn new(order: FieldOrder, year: YearDigits, clock: Clock) -> Self {
        Self { order, year, clock }
    }

    /// Interpret `parts` under this layout, returning `None` if they don't fit
    pub fn resolve(&self, parts: &TimestampParts<'_>) -> Option<NaiveDateTime> {
        let (day, month) = match self.order {
            FieldOrder::DayFirst => (parts.first, parts.second),
            FieldOrder::MonthFirst => (parts.second, parts.first),
        };
        let day: u32 = day.parse().ok()?;
        let month: u32 = month.parse().ok()?;

        let year: i32 = parts.year.parse().ok()?;
        let year = match (self.year, parts.year.len()) {
            (YearDigits::Two, 2) => expand_two_digit_year(year),
            (YearDigits::Four, 4) => year,
            _ => return None,
        };

        let hour: u32 = parts.hour.parse().ok()?;
        let minute: u32 = parts.minute.parse().ok()?;
        let hour = match (self.clock, parts.meridiem) {
            (Clock::TwentyFourHour, None) => hour,
            (Clock::TwelveHour, Some(meridiem)) => meridiem.to_24_hour(hour)?,
            _ => return None,
        };

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(date.and_time(time))
    }
}

/// Candidate layouts, in the order they are tried
///
/// Day-first layouts come before month-first ones, so `05/06/24` reads as 5 June.
pub const TIMESTAMP_FORMATS: [TimestampFormat; 8] = [
    TimestampFormat::new(FieldOrder::DayFirst, YearDigits::Four, Clock::TwentyFourHour),
    TimestampFormat::new(FieldOrder::DayFirst, YearDigits::Two, Clock::TwentyFourHour),
    TimestampFormat::new(FieldOrder::DayFirst, YearDigits::Four, Clock::TwelveHour),
    TimestampFormat::new(FieldOrder::DayFirst, YearDigits::Two, Clock::TwelveHour),
    TimestampFormat::new(FieldOrder::MonthFirst, YearDigits::Two, Clock::TwentyFourHour),
    TimestampFormat::new(FieldOrder::MonthFirst, YearDigits::Four, Clock::TwentyFourHour),
    TimestampFormat::new(FieldOrder::MonthFirst, YearDigits::Two, Clock::TwelveHour),
    TimestampFormat::new(FieldOrder::MonthFirst, YearDigits::Four, Clock::TwelveHour),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if s.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }

    /// Convert a 12-hour clock hour (1..=12) to 0..=23
    fn to_24_hour(self, hour: u32) -> Option<u32> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        Some(match self {
            Self::Am => hour % 12,
            Self::Pm => hour % 12 + 12,
        })
    }
}

/// Raw numeric fields of a header, before any layout is assumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParts<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub year: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub meridiem: Option<Meridiem>,
}

fn parts_re() -> &'static Regex {
    static PARTS_RE: OnceLock<Regex> = OnceLock::new();
    PARTS_RE.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*([0-9]{1,2})/([0-9]{1,2})/([0-9]{2,4}),\s",
            r"([0-9]{1,2}):([0-9]{2})(?:\s?([AaPp][Mm]))?\s-\s*$",
        ))
        .expect("valid timestamp parts regex")
    })
}

impl<'a> TimestampParts<'a> {
    /// Split a normalized header such as `"10/08/23, 8:15 pm - "` into its fields
    pub fn scan(header: &'a str) -> Option<Self> {
        let caps = parts_re().captures(header)?;
        let field = |i: usize| caps.get(i).map(|m| m.as_str());

        let meridiem = match field(6) {
            Some(m) => Some(Meridiem::parse(m)?),
            None => None,
        };

        Some(Self {
            first: field(1)?,
            second: field(2)?,
            year: field(3)?,
            hour: field(4)?,
            minute: field(5)?,
            meridiem,
        })
    }
}

/// Replace no-break spaces (U+00A0, U+202F) with plain spaces
pub fn normalize_spaces(header: &str) -> Cow<'_, str> {
    if header.contains(['\u{00a0}', '\u{202f}']) {
        Cow::Owned(header.replace(['\u{00a0}', '\u{202f}'], " "))
    } else {
        Cow::Borrowed(header)
    }
}

/// Map a two-digit year onto a full year using the POSIX pivot (00–68 → 20xx, 69–99 → 19xx)
pub fn expand_two_digit_year(year: i32) -> i32 {
    if year <= 68 { 2000 + year } else { 1900 + year }
}

/// Resolve a message header to a date-time using the first matching format
pub fn resolve_timestamp(header: &str) -> Option<NaiveDateTime> {
    resolve_with(header, &TIMESTAMP_FORMATS)
}

/// Resolve a message header against a caller-supplied list of formats
pub fn resolve_with(header: &str, formats: &[TimestampFormat]) -> Option<NaiveDateTime> {
    let normalized = normalize_spaces(header);
    let parts = TimestampParts::scan(&normalized)?;
    formats.iter().find_map(|format| format.resolve(&parts))
}
