//! Criterion benchmarks comparing loop orders and blocking factors.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blockmul::{block_product_ijk, block_product_ikj, matmul_naive_ijk, matmul_naive_ikj};

fn random_matrix(rng: &mut StdRng, n: usize) -> Vec<i32> {
    (0..n * n).map(|_| rng.gen_range(0..10)).collect()
}

fn bench_matmul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[64usize, 128, 256] {
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);

        let mut group = c.benchmark_group(format!("matmul_{n}x{n}"));

        group.bench_function("naive_ijk", |bench| {
            bench.iter(|| {
                let mut out = vec![0; n * n];
                matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n);
                out
            })
        });

        group.bench_function("naive_ikj", |bench| {
            bench.iter(|| {
                let mut out = vec![0; n * n];
                matmul_naive_ikj(black_box(&a), black_box(&b), &mut out, n);
                out
            })
        });

        // block size n/factor; 8 gives 32x32..8x8 tiles over these sizes
        for factor in [2, 8, 16] {
            group.bench_with_input(BenchmarkId::new("block_ijk", factor), &factor, |bench, &factor| {
                bench.iter(|| {
                    let mut out = vec![0; n * n];
                    block_product_ijk(black_box(&a), black_box(&b), &mut out, n, factor);
                    out
                })
            });
            group.bench_with_input(BenchmarkId::new("block_ikj", factor), &factor, |bench, &factor| {
                bench.iter(|| {
                    let mut out = vec![0; n * n];
                    block_product_ikj(black_box(&a), black_box(&b), &mut out, n, factor);
                    out
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
