use criterion::{Criterion, criterion_group, criterion_main};
use gatelog::{Logger, with_file, with_level, with_writer};
use std::hint::black_box;
use std::io;
use tempfile::TempDir;

fn bench_logger_sink(c: &mut Criterion) {
    let logger = Logger::new([with_writer(io::sink())]).expect("logger");

    c.bench_function("Logger::warning (sink)", |b| {
        b.iter(|| logger.warning(format_args!("retry {}", black_box(3))));
    });
}

fn bench_logger_suppressed(c: &mut Criterion) {
    let logger =
        Logger::new([with_level("ERROR"), with_writer(io::sink())]).expect("logger");

    c.bench_function("Logger::debug (suppressed)", |b| {
        b.iter(|| logger.debug(format_args!("retry {}", black_box(3))));
    });
}

fn bench_logger_file(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::new([with_file(tmp.path().join("bench.log"))]).expect("logger");

    c.bench_function("Logger::error (file)", |b| {
        b.iter(|| logger.error(format_args!("write failed: {}", black_box("EIO"))));
    });
}

criterion_group!(
    benches,
    bench_logger_sink,
    bench_logger_suppressed,
    bench_logger_file,
);
criterion_main!(benches);
