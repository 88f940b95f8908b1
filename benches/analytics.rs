use std::hint::black_box;

use chatlog_analyzer::analytics::{
    StopWords, activity_heatmap, build_report, busiest_users, emoji_frequency, top_words,
};
use chatlog_analyzer::filters::ParticipantFilter;
use chatlog_analyzer::models::MessageRecord;
use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate synthetic records spread over a year, one every 17 minutes
fn generate_records(num_records: usize) -> Vec<MessageRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    (0..num_records)
        .map(|i| {
            let timestamp = start + Duration::minutes(17 * i as i64);
            let body = match i % 9 {
                0 => "<Media omitted>".to_string(),
                1 => format!("check https://example.com/{} 🔥", i),
                _ => format!("the quick brown fox {} jumps 😂❤️", i % 100),
            };
            MessageRecord::new(timestamp, format!("user{}", i % 12), body)
        })
        .collect()
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");
    let stop_words = StopWords::from_text("the a an");

    for size in [1_000, 10_000, 50_000].iter() {
        let records = generate_records(*size);
        let overall = ParticipantFilter::All;
        let single = ParticipantFilter::sender("user3");

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("busiest_users", size), size, |b, _| {
            b.iter(|| busiest_users(black_box(&records), true));
        });
        group.bench_with_input(BenchmarkId::new("top_words", size), size, |b, _| {
            b.iter(|| top_words(black_box(&records), &overall, &stop_words));
        });
        group.bench_with_input(BenchmarkId::new("emoji_frequency", size), size, |b, _| {
            b.iter(|| emoji_frequency(black_box(&records), &overall));
        });
        group.bench_with_input(BenchmarkId::new("activity_heatmap", size), size, |b, _| {
            b.iter(|| activity_heatmap(black_box(&records), &single));
        });
        group.bench_with_input(BenchmarkId::new("build_report", size), size, |b, _| {
            b.iter(|| build_report(black_box(&records), &overall, &stop_words));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analytics);
criterion_main!(benches);
