use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gootool_core::codec::codecs::xor_rotate::{decode, encode};
use gootool_core::codec::codecs::XorRotateCodec;
use gootool_core::codec::decode_stream;

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 + 17) as u8).collect()
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_rotate");
    for len in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = payload(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("encode", len), &data, |b, d| {
            b.iter(|| encode(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("decode", len), &data, |b, d| {
            b.iter(|| decode(black_box(d)))
        });
    }
    group.finish();
}

fn bench_streamed(c: &mut Criterion) {
    let data = payload(1024 * 1024);
    let mut group = c.benchmark_group("xor_rotate_stream");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk in [4 * 1024usize, 64 * 1024] {
        group.bench_with_input(BenchmarkId::new("decode", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let iter = decode_stream(Cursor::new(&data[..]), data.len(), chunk, &XorRotateCodec).unwrap();
                iter.map(|c| c.unwrap().len()).sum::<usize>()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_streamed);
criterion_main!(benches);
