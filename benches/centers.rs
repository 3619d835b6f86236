use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tricenter::geometry::{compute, Triangle, TriangleGenerator};

fn generate_triangles(n: usize, width: f64, height: f64) -> Vec<Triangle> {
    let generator = TriangleGenerator::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    (0..n)
        .filter_map(|_| generator.generate_with(&mut rng, width, height).ok())
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Triangle Generation");

    for &(width, height) in &[(600.0, 600.0), (1600.0, 400.0)] {
        group.bench_function(format!("generate_{}x{}", width, height), |b| {
            let generator = TriangleGenerator::default();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let _ = black_box(generator.generate_with(&mut rng, width, height));
            });
        });
    }

    group.finish();
}

fn bench_centers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Triangle Centers");

    for &n in &[100, 1000, 10000] {
        group.bench_function(format!("compute_{}", n), |b| {
            let triangles = generate_triangles(n, 1000.0, 1000.0);
            b.iter(|| {
                for triangle in &triangles {
                    let _ = black_box(compute(triangle));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_centers);
criterion_main!(benches);
