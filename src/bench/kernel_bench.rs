use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_locality::{
    BlockSize, FlatMatrix, JaggedMatrix, Matrix, multiply_blocked, multiply_blocked_strided,
    multiply_naive, multiply_transposed_scratch,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: &[usize] = &[64, 128, 256];

fn filled_flat(sz: usize, seed: u64) -> FlatMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = FlatMatrix::zeroed(sz);
    m.fill_random(&mut rng);
    m
}

fn bench_kernels(c: &mut Criterion) {
    let block = BlockSize::default();
    let mut group = c.benchmark_group("square_matmul");

    for &sz in SIZES {
        group.throughput(Throughput::Elements((sz as u64).pow(3)));

        let a = filled_flat(sz, 0xC0FF_EE42 ^ sz as u64);
        let b = filled_flat(sz, 0xBADC_0FFE ^ (sz as u64).rotate_left(17));

        let mut a_jagged = JaggedMatrix::zeroed(sz);
        let mut b_jagged = JaggedMatrix::zeroed(sz);
        a_jagged.copy_from(&a);
        b_jagged.copy_from(&b);

        group.bench_function(BenchmarkId::new("naive", sz), |bench| {
            bench.iter(|| {
                let mut res = FlatMatrix::zeroed(sz);
                multiply_naive(black_box(&a), black_box(&b), &mut res);
                black_box(res.get(sz / 2, sz / 2));
            });
        });

        group.bench_function(BenchmarkId::new("naive_jagged", sz), |bench| {
            bench.iter(|| {
                let mut res = JaggedMatrix::zeroed(sz);
                multiply_naive(black_box(&a_jagged), black_box(&b_jagged), &mut res);
                black_box(res.get(sz / 2, sz / 2));
            });
        });

        group.bench_function(BenchmarkId::new("transposed", sz), |bench| {
            // The scratch variant keeps `b` in its original orientation
            // between iterations.
            let mut scratch = FlatMatrix::zeroed(sz);
            bench.iter(|| {
                let mut res = FlatMatrix::zeroed(sz);
                multiply_transposed_scratch(black_box(&a), black_box(&b), &mut scratch, &mut res);
                black_box(res.get(sz / 2, sz / 2));
            });
        });

        group.bench_function(BenchmarkId::new("blocked", sz), |bench| {
            bench.iter(|| {
                let mut res = FlatMatrix::zeroed(sz);
                multiply_blocked(black_box(&a), black_box(&b), &mut res, block);
                black_box(res.get(sz / 2, sz / 2));
            });
        });

        group.bench_function(BenchmarkId::new("blocked_strided", sz), |bench| {
            bench.iter(|| {
                let mut res = FlatMatrix::zeroed(sz);
                multiply_blocked_strided(black_box(&a), black_box(&b), &mut res, block);
                black_box(res.get(sz / 2, sz / 2));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
