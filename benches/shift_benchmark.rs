//! Benchmarks for the shifter
//!
//! Measures in-memory stream shifting for typical CD drive offsets and
//! for both padding strategies.

use boffset::{shift_stream, Offset, Padding};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

/// One second of CD audio
const CD_SECOND: usize = 44100 * 4;

fn track(seconds: usize) -> Vec<u8> {
    (0..seconds * CD_SECOND).map(|i| (i % 251) as u8).collect()
}

fn benchmark_drive_offsets(c: &mut Criterion) {
    let data = track(10);
    let mut group = c.benchmark_group("drive_offsets");
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Common read offsets in samples, converted to bytes
    for samples in [6i64, 48, 667, -1164] {
        let offset = Offset::from_cd_samples(samples).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &offset, |b, &offset| {
            b.iter(|| {
                let mut input = Cursor::new(&data[..]);
                let mut output = Cursor::new(Vec::with_capacity(data.len()));
                shift_stream(
                    black_box(offset),
                    &mut input,
                    data.len() as u64,
                    &mut output,
                    Padding::ZeroFill,
                )
                .unwrap();
                black_box(output);
            })
        });
    }
    group.finish();
}

fn benchmark_padding(c: &mut Criterion) {
    let data = track(1);
    let offset = Offset::new(-(CD_SECOND as i64 / 2)).unwrap();

    for (name, padding) in [("zero_fill", Padding::ZeroFill), ("sparse", Padding::Sparse)] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut input = Cursor::new(&data[..]);
                let mut output = Cursor::new(Vec::with_capacity(data.len()));
                shift_stream(offset, &mut input, data.len() as u64, &mut output, padding).unwrap();
                black_box(output);
            })
        });
    }
}

criterion_group!(benches, benchmark_drive_offsets, benchmark_padding);
criterion_main!(benches);
