use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hexpipe_core::codec::{encode_to_vec, Mode};
use hexpipe_core::stream::{run_stream, StreamConfig};

fn bench_stream(c: &mut Criterion) {
    let data: Vec<u8> = (0..=255u8).cycle().take(1 << 20).collect();
    let hex = encode_to_vec(&data);

    let mut group = c.benchmark_group("hex_stream");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk_size in [512usize, 8 * 1024, 64 * 1024] {
        group.bench_with_input(BenchmarkId::new("encode", chunk_size), &chunk_size, |b, &cs| {
            let config = StreamConfig::new(Mode::Encode).with_chunk_size(cs);
            b.iter(|| {
                let mut out = Vec::with_capacity(hex.len());
                run_stream(&mut Cursor::new(black_box(&data)), &mut out, &config).unwrap();
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("decode", chunk_size), &chunk_size, |b, &cs| {
            let config = StreamConfig::new(Mode::Decode).with_chunk_size(cs);
            b.iter(|| {
                let mut out = Vec::with_capacity(data.len());
                run_stream(&mut Cursor::new(black_box(&hex)), &mut out, &config).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stream);
criterion_main!(benches);
