//! Criterion benchmarks for static_logger_system

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use static_logger_system::core::sink;
use static_logger_system::prelude::*;

/// Route emissions into the null writer so benchmarks measure the logging
/// path, not console or disk I/O. First caller wins, which is fine here.
fn use_null_writer() {
    let _ = sink::install(Box::new(NullWriter::new()));
}

// ============================================================================
// Statement Cost Benchmarks
// ============================================================================

fn bench_statement_cost(c: &mut Criterion) {
    use_null_writer();
    let mut group = c.benchmark_group("statement_cost");
    group.throughput(Throughput::Elements(1));

    group.bench_function("suppressed", |b| {
        b.iter(|| {
            drop(
                LogMessage::<{ LogLevel::TRACE.raw() }>::new()
                    .append(black_box("payload "))
                    .append(black_box(42)),
            );
        });
    });

    group.bench_function("enabled", |b| {
        b.iter(|| {
            drop(
                LogMessage::<{ LogLevel::ERROR.raw() }>::new()
                    .append(black_box("payload "))
                    .append(black_box(42)),
            );
        });
    });

    group.bench_function("enabled_tagged", |b| {
        b.iter(|| {
            drop(
                LogMessage::<{ LogLevel::ERROR.raw() }>::tagged(black_box("bench::Source"))
                    .append(black_box("payload")),
            );
        });
    });

    group.finish();
}

// ============================================================================
// Accumulation Benchmarks
// ============================================================================

fn bench_accumulation(c: &mut Criterion) {
    use_null_writer();
    let mut group = c.benchmark_group("accumulation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("eight_fragments_enabled", |b| {
        b.iter(|| {
            drop(
                LogMessage::<{ LogLevel::WARN.raw() }>::new()
                    .append(black_box("alpha "))
                    .append(black_box(1))
                    .append(black_box(" beta "))
                    .append(black_box(2.5_f64))
                    .append(black_box(" gamma "))
                    .append(black_box(3))
                    .append(black_box(" delta "))
                    .append(black_box(4)),
            );
        });
    });

    group.bench_function("eight_fragments_suppressed", |b| {
        b.iter(|| {
            drop(
                LogMessage::<{ LogLevel::DEBUG.raw() }>::new()
                    .append(black_box("alpha "))
                    .append(black_box(1))
                    .append(black_box(" beta "))
                    .append(black_box(2.5_f64))
                    .append(black_box(" gamma "))
                    .append(black_box(3))
                    .append(black_box(" delta "))
                    .append(black_box(4)),
            );
        });
    });

    group.finish();
}

// ============================================================================
// Writer Benchmarks
// ============================================================================

fn bench_file_writer(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_writer");
    group.throughput(Throughput::Elements(1));

    let dir = tempfile::tempdir().expect("temp dir");
    let writer =
        FileWriter::create(dir.path().join("bench.log"), false).expect("create file writer");

    group.bench_function("write_named_level", |b| {
        b.iter(|| {
            writer
                .write(black_box("benchmark line"), black_box(LogLevel::INFO))
                .expect("write");
        });
    });

    group.bench_function("write_custom_level", |b| {
        b.iter(|| {
            writer
                .write(black_box("benchmark line"), black_box(LogLevel::from_raw(42)))
                .expect("write");
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Emission Benchmarks
// ============================================================================

fn bench_concurrent_emission(c: &mut Criterion) {
    use_null_writer();
    let mut group = c.benchmark_group("concurrent_emission");

    group.bench_function("single_thread", |b| {
        b.iter(|| {
            drop(LogMessage::<{ LogLevel::INFO.raw() }>::new().append(black_box("message")));
        });
    });

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    std::thread::spawn(|| {
                        drop(
                            LogMessage::<{ LogLevel::INFO.raw() }>::new()
                                .append(black_box("message")),
                        );
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_statement_cost,
    bench_accumulation,
    bench_file_writer,
    bench_concurrent_emission
);

criterion_main!(benches);
