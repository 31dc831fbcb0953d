use criterion::{Criterion, criterion_group, criterion_main};
use prismlog::fmt::{format_duration, quote};
use prismlog::{Attr, HandlerOptions, Level, Record, TextHandler};
use std::hint::black_box;
use std::time::Duration;

fn options(color: bool) -> HandlerOptions {
    HandlerOptions::new()
        .level(Level::DEBUG)
        .no_color(!color)
        .color_env(None::<String>)
}

fn sample_record() -> Record {
    let mut record = Record::new(Level::INFO, "request handled");
    record.add_attrs([
        Attr::string("path", "/api/v1/users"),
        Attr::int64("status", 200),
        Attr::duration("took", Duration::from_micros(1_234)),
        Attr::bool("cached", false),
        Attr::group("client", vec![Attr::string("ip", "10.0.0.1"), Attr::uint64("port", 51_234)]),
    ]);
    record
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("TextHandler::handle");
    let record = sample_record();

    for (name, color) in [("color", true), ("plain", false)] {
        let handler = TextHandler::new(std::io::sink(), &options(color));
        group.bench_function(name, |b| {
            b.iter(|| handler.handle(black_box(&record)));
        });
    }

    let derived = TextHandler::new(std::io::sink(), &options(true))
        .with_attrs(&[Attr::string("service", "api"), Attr::int64("pid", 4242)])
        .with_group("req");
    group.bench_function("derived", |b| {
        b.iter(|| derived.handle(black_box(&record)));
    });

    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    let handler = TextHandler::new(std::io::sink(), &options(true));
    let attrs = [Attr::string("service", "api"), Attr::int64("pid", 4242)];

    c.bench_function("TextHandler::with_attrs", |b| {
        b.iter(|| handler.with_attrs(black_box(&attrs)));
    });
    c.bench_function("TextHandler::with_group", |b| {
        b.iter(|| handler.with_group(black_box("req")));
    });
}

fn bench_values(c: &mut Criterion) {
    c.bench_function("quote", |b| {
        b.iter(|| quote(black_box("tab\there \"quoted\" and unicode \u{2028}")));
    });
    c.bench_function("format_duration", |b| {
        b.iter(|| format_duration(black_box(Duration::from_millis(5_025_250))));
    });
}

criterion_group!(benches, bench_handle, bench_derive, bench_values);
criterion_main!(benches);
