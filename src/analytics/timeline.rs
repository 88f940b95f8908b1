use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::counter::OrderedCounter;
use crate::filters::ParticipantFilter;
use crate::models::{ActivityCount, DailyPoint, MessageRecord, MonthlyPoint, month_name};

/// Message counts per calendar month, chronological, months without messages omitted
pub fn monthly_timeline(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filter.select(records) {
        *months.entry((record.year(), record.month_num())).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), count)| {
            let month = month_name(month_num);
            MonthlyPoint { year, month_num, month, count, label: format!("{}-{}", month, year) }
        })
        .collect()
}

/// Message counts per calendar day, chronological, days without messages omitted
pub fn daily_timeline(records: &[MessageRecord], filter: &ParticipantFilter) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter.select(records) {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter().map(|(date, count)| DailyPoint { date, count }).collect()
}

fn activity_by<F>(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
    key: F,
) -> Vec<ActivityCount>
where
    F: Fn(&MessageRecord) -> &'static str,
{
    filter
        .select(records)
        .map(key)
        .collect::<OrderedCounter<&'static str>>()
        .most_common(None)
        .into_iter()
        .map(|(label, count)| ActivityCount { label, count })
        .collect()
}

/// Message counts per weekday name, busiest first; weekdays without messages are absent
pub fn weekday_activity(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
) -> Vec<ActivityCount> {
    activity_by(records, filter, MessageRecord::day_name)
}

/// Message counts per month name across all years, busiest first
pub fn month_activity(records: &[MessageRecord], filter: &ParticipantFilter) -> Vec<ActivityCount> {
    activity_by(records, filter, MessageRecord::month_name)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn sample() -> Vec<MessageRecord> {
        vec![
            MessageRecord::new(at(2024, 2, 3, 9), "Alice", "a"),
            MessageRecord::new(at(2023, 12, 31, 23), "Bob", "b"),
            MessageRecord::new(at(2024, 1, 1, 0), "Alice", "c"),
            MessageRecord::new(at(2024, 1, 1, 8), "Bob", "d"),
            MessageRecord::new(at(2024, 1, 8, 12), "Alice", "e"),
        ]
    }

    #[test]
    fn test_monthly_is_chronological() {
        let points = monthly_timeline(&sample(), &ParticipantFilter::All);
        let labels: Vec<(&str, usize)> =
            points.iter().map(|p| (p.label.as_str(), p.count)).collect();

        assert_eq!(labels, vec![("December-2023", 1), ("January-2024", 3), ("February-2024", 1)]);
        assert_eq!(points[1].month, "January");
        assert_eq!(points[1].month_num, 1);
        assert_eq!(points[1].year, 2024);
    }

    #[test]
    fn test_monthly_filtered() {
        let points = monthly_timeline(&sample(), &ParticipantFilter::sender("Bob"));
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["December-2023", "January-2024"]);
    }

    #[test]
    fn test_daily_is_chronological() {
        let points = daily_timeline(&sample(), &ParticipantFilter::All);
        let days: Vec<(NaiveDate, usize)> = points.iter().map(|p| (p.date, p.count)).collect();

        assert_eq!(
            days,
            vec![
                (NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 1),
                (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 2),
                (NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), 1),
                (NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(), 1),
            ]
        );
    }

    #[test]
    fn test_weekday_activity() {
        // 2024-01-01 and 2024-01-08 are Mondays, 2024-02-03 a Saturday, 2023-12-31 a Sunday
        let counts = weekday_activity(&sample(), &ParticipantFilter::All);
        assert_eq!(
            counts,
            vec![
                ActivityCount { label: "Monday", count: 3 },
                ActivityCount { label: "Saturday", count: 1 },
                ActivityCount { label: "Sunday", count: 1 },
            ]
        );
    }

    #[test]
    fn test_month_activity_merges_years() {
        let mut records = sample();
        records.push(MessageRecord::new(at(2025, 2, 1, 10), "Bob", "f"));

        let counts = month_activity(&records, &ParticipantFilter::All);
        assert_eq!(
            counts,
            vec![
                ActivityCount { label: "January", count: 3 },
                ActivityCount { label: "February", count: 2 },
                ActivityCount { label: "December", count: 1 },
            ]
        );
    }

    #[test]
    fn test_totals_match_selection() {
        let records = sample();
        let filter = ParticipantFilter::sender("Alice");
        let selected = filter.select(&records).count();

        let monthly: usize = monthly_timeline(&records, &filter).iter().map(|p| p.count).sum();
        let daily: usize = daily_timeline(&records, &filter).iter().map(|p| p.count).sum();
        let weekly: usize = weekday_activity(&records, &filter).iter().map(|a| a.count).sum();
        assert_eq!(monthly, selected);
        assert_eq!(daily, selected);
        assert_eq!(weekly, selected);
    }

    #[test]
    fn test_empty() {
        assert!(monthly_timeline(&[], &ParticipantFilter::All).is_empty());
        assert!(daily_timeline(&[], &ParticipantFilter::All).is_empty());
        assert!(weekday_activity(&[], &ParticipantFilter::All).is_empty());
        assert!(month_activity(&[], &ParticipantFilter::sender("x")).is_empty());
    }
}
