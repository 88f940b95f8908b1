//! Integration tests for filter functionality

use chatlog_analyzer::analytics::overview;
use chatlog_analyzer::filters::ParticipantFilter;
use chatlog_analyzer::filters::apply::apply_filters;
use chatlog_analyzer::filters::parser::parse_filter;
use chatlog_analyzer::models::MessageRecord;
use chrono::NaiveDate;

fn create_test_record(sender: &str, day: u32, body: &str) -> MessageRecord {
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_opt(12, 0, 0).unwrap();
    MessageRecord::new(timestamp, sender, body)
}

fn sample() -> Vec<MessageRecord> {
    vec![
        create_test_record("Alice", 1, "one"),
        create_test_record("Bob", 2, "two"),
        create_test_record("Mom Cell", 3, "three"),
        create_test_record("Alice", 4, "four"),
        create_test_record("", 5, "Bob left"),
    ]
}

#[test]
fn test_filter_integration_user() {
    let filter = parse_filter("user:alice").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.sender() == "Alice"));
}

#[test]
fn test_filter_integration_quoted_user() {
    let filter = parse_filter("user:\"Mom Cell\"").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].body(), "three");
}

#[test]
fn test_filter_integration_notifications_by_sentinel() {
    let filter = parse_filter("user:group_notification").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].is_group_notification());
}

#[test]
fn test_filter_integration_date_range() {
    let filter = parse_filter("since:2024-03-02 until:2024-03-04").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    let bodies: Vec<&str> = filtered.iter().map(|r| r.body()).collect();
    assert_eq!(bodies, vec!["two", "three", "four"]);
}

#[test]
fn test_filter_integration_combined() {
    let filter = parse_filter("user:Alice OR user:Bob AND since:2024-03-02").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    let bodies: Vec<&str> = filtered.iter().map(|r| r.body()).collect();
    assert_eq!(bodies, vec!["two", "four"]);
}

#[test]
fn test_filter_integration_then_participant() {
    let filter = parse_filter("since:2024-03-02").expect("Parse filter");
    let filtered = apply_filters(sample(), &filter);

    let alice = overview(&filtered, &ParticipantFilter::sender("Alice"));
    assert_eq!(alice.messages, 1);

    let everyone = overview(&filtered, &ParticipantFilter::from_selection(Some("Overall")));
    assert_eq!(everyone.messages, 4);
}

#[test]
fn test_filter_integration_invalid() {
    assert!(parse_filter("user:Alice AND").is_err());
    assert!(parse_filter("since:yesterday").is_err());
    assert!(parse_filter("type:user").is_err());
}
