//! Criterion benchmarks for common_logger

use common_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use std::time::Duration;

fn sink_logger(level: &str) -> Logger {
    Logger::new(Config::default().with_log_level(level).with_writer(SharedWriter::new(io::sink())))
}

// ============================================================================
// Construction & Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.throughput(Throughput::Elements(1));

    let base = sink_logger("info");

    group.bench_function("new", |b| {
        b.iter(|| black_box(sink_logger("info")));
    });

    group.bench_function("with_level", |b| {
        b.iter(|| black_box(base.with_level(black_box("debug"))));
    });

    group.bench_function("with_name", |b| {
        b.iter(|| black_box(base.with_name(black_box("svc"))));
    });

    group.bench_function("with_options", |b| {
        b.iter(|| black_box(base.with_options([LoggerOption::add_caller()])));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger("info");
    let with_caller = logger.with_options([LoggerOption::add_caller()]);
    let with_fields = logger.with_fields([("service", "bench"), ("region", "eu-west-1")]);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("Debug message")));
    });

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("info_with_caller", |b| {
        b.iter(|| with_caller.info(black_box("Info message")));
    });

    group.bench_function("info_with_fields", |b| {
        b.iter(|| {
            with_fields.log_with_fields(
                LogLevel::Info,
                black_box("Request served"),
                &[
                    Field::new("status", 200),
                    Field::new("latency", Duration::from_micros(850)),
                ],
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_logging);
criterion_main!(benches);
