// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use capstan_fold::fold::{max, min, product, sum};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];

fn make_i64(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..len).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn make_f64(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..len).map(|_| rng.gen_range(-1.0e6..1.0e6)).collect()
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));

        let ints = make_i64(len);
        group.bench_with_input(BenchmarkId::new("i64", len), &ints, |b, data| {
            b.iter(|| sum(black_box(data)))
        });

        let floats = make_f64(len);
        group.bench_with_input(BenchmarkId::new("f64", len), &floats, |b, data| {
            b.iter(|| sum(black_box(data)))
        });
    }
    group.finish();
}

fn bench_other_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        let ints = make_i64(len);

        group.bench_with_input(BenchmarkId::new("product/i64", len), &ints, |b, data| {
            b.iter(|| product(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("min/i64", len), &ints, |b, data| {
            b.iter(|| min(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("max/i64", len), &ints, |b, data| {
            b.iter(|| max(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum, bench_other_reductions);
criterion_main!(benches);
