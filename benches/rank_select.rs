use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use alice_bitvec::BitVector;

fn generate_vector(len: usize) -> BitVector {
    let mut bv = BitVector::new(len).unwrap();
    // every 3rd bit set: dense enough to exercise the in-word scans
    let mut i = 0;
    while i < len {
        bv.set(i).unwrap();
        i += 3;
    }
    bv
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for len in [1_000, 100_000, 1_000_000] {
        let bv = generate_vector(len);
        group.bench_with_input(BenchmarkId::new("bits", len), &bv, |b, bv| {
            b.iter(|| bv.rank(black_box(bv.len() - 1)))
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");

    for len in [1_000, 100_000, 1_000_000] {
        let bv = generate_vector(len);
        let last = bv.count_ones() - 1;
        group.bench_with_input(BenchmarkId::new("bits", len), &bv, |b, bv| {
            b.iter(|| bv.select(black_box(last)))
        });
    }
    group.finish();
}

fn bench_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor");

    for len in [1_000, 100_000, 1_000_000] {
        let a = generate_vector(len);
        let b_op = a.complement().unwrap();
        group.bench_with_input(BenchmarkId::new("bits", len), &len, |b, _| {
            b.iter(|| a.xor(black_box(&b_op)).unwrap())
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");

    for len in [1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("grow_shrink", len), &len, |b, &len| {
            let mut bv = generate_vector(len);
            b.iter(|| {
                bv.resize(black_box(len * 2)).unwrap();
                bv.resize(black_box(len)).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rank, bench_select, bench_xor, bench_resize);
criterion_main!(benches);
