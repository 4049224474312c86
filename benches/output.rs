use criterion::{Criterion, criterion_group, criterion_main};
use ringlog::{HeaderMask, Logger, Priority, RotatingFileWriter};
use std::hint::black_box;
use tempfile::TempDir;

const LINE: &[u8] = b"2025-01-15 14:30:00:123456 src/main.rs:042 [INFO]   benchmark record\n";

fn bench_writer_no_rotation(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let writer = RotatingFileWriter::open(&tmp.path().to_string_lossy(), "bench", 0, 0, false)
        .expect("open failed");

    c.bench_function("RotatingFileWriter::write_bytes", |b| {
        b.iter(|| writer.write_bytes(black_box(LINE)).expect("write failed"));
    });
}

fn bench_writer_rotating(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let writer = RotatingFileWriter::open(&tmp.path().to_string_lossy(), "bench", 4096, 4, false)
        .expect("open failed");

    c.bench_function("RotatingFileWriter::write_bytes rotating", |b| {
        b.iter(|| writer.write_bytes(black_box(LINE)).expect("write failed"));
    });
}

fn bench_logger_filtered(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .threshold(Priority::Warning)
        .file()
        .dir(tmp.path().to_string_lossy())
        .name("bench")
        .done()
        .build()
        .expect("build failed");

    c.bench_function("Logger::debug filtered", |b| {
        b.iter(|| logger.debug(black_box("never written")).expect("emit failed"));
    });
}

fn bench_logger_to_file(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .header(HeaderMask::ALL)
        .file()
        .dir(tmp.path().to_string_lossy())
        .name("bench")
        .max_file_size(1024 * 1024)
        .max_file_count(3)
        .done()
        .build()
        .expect("build failed");

    c.bench_function("Logger::info to file", |b| {
        b.iter(|| logger.info(black_box("benchmark record")).expect("emit failed"));
    });
}

criterion_group!(
    benches,
    bench_writer_no_rotation,
    bench_writer_rotating,
    bench_logger_filtered,
    bench_logger_to_file,
);
criterion_main!(benches);
