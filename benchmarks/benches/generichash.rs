// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use sodalite_hash::{BYTES, BYTES_MAX, GenericHash, HashKey, KEYBYTES, PRIMITIVE};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn benchmark_hash_one_shot(c: &mut Criterion) {
    let hasher = GenericHash::new();

    let mut group = c.benchmark_group(format!("{}_one_shot", PRIMITIVE));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let input = vec![0u8; size];

            b.iter(|| {
                hasher
                    .hash(BYTES, black_box(&input), None)
                    .expect("hash failed")
            });
        });
    }
    group.finish();
}

fn benchmark_hash_streaming(c: &mut Criterion) {
    let hasher = GenericHash::new();

    let mut group = c.benchmark_group(format!("{}_streaming_64b_chunks", PRIMITIVE));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let input = vec![0u8; size];

            b.iter(|| {
                let mut state = hasher.init(None, BYTES).expect("init failed");
                for chunk in input.chunks(64) {
                    state.update(black_box(chunk)).expect("update failed");
                }
                state.finalize(BYTES).expect("finalize failed")
            });
        });
    }
    group.finish();
}

fn benchmark_hash_keyed(c: &mut Criterion) {
    let hasher = GenericHash::new();
    let key = HashKey::new(&[0u8; KEYBYTES]).expect("key failed");

    let mut group = c.benchmark_group(format!("{}_keyed_max_output", PRIMITIVE));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let input = vec![0u8; size];

            b.iter(|| {
                hasher
                    .hash(BYTES_MAX, black_box(&input), Some(&key))
                    .expect("hash failed")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_hash_one_shot,
    benchmark_hash_streaming,
    benchmark_hash_keyed
);
criterion_main!(benches);
