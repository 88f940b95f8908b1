use std::hint::black_box;
use std::io::Write;

use chatlog_analyzer::parsers::{parse_chat, parse_chat_file};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tempfile::NamedTempFile;

/// Generate synthetic export text with N messages, mixing 24h and 12h headers
fn generate_chat_text(num_messages: usize) -> String {
    let mut text = String::from("Messages and calls are end-to-end encrypted.\n");

    for i in 0..num_messages {
        let day = (i % 28) + 1;
        let header = if i % 2 == 0 {
            format!("{}/3/24, {}:{:02} - ", day, i % 24, i % 60)
        } else {
            format!("{}/3/24, {}:{:02} pm - ", day, (i % 12) + 1, i % 60)
        };
        text.push_str(&header);
        if i % 10 == 0 {
            text.push_str("user3 added user4\n");
        } else {
            text.push_str(&format!("user{}: Test message {} 😂\nsecond line\n", i % 7, i));
        }
    }

    text
}

fn bench_parse_chat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chat");

    for size in [100, 1_000, 10_000, 50_000].iter() {
        let text = generate_chat_text(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_chat(black_box(&text)));
        });
    }

    group.finish();
}

fn bench_parse_chat_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_chat_file");

    for size in [1_000, 10_000].iter() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(generate_chat_text(*size).as_bytes()).unwrap();
        file.flush().unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_chat_file(black_box(file.path())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_chat, bench_parse_chat_file);
criterion_main!(benches);
