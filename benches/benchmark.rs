use barnes_hut_quadtree::{
    creator::{BodyCreator, DistrBodyCreator},
    direct_summation, Body, Execution, Quadtree,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::Uniform;

const HALF_WIDTH: f64 = 1000.;

fn random_bodies(n: usize) -> Vec<Body> {
    DistrBodyCreator::rng(
        Uniform::new(1.0, 1000.0),
        Uniform::new(-HALF_WIDTH, HALF_WIDTH),
        StdRng::seed_from_u64(0),
    )
    .create_bodies(n)
}

fn insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");
    for n in [100, 1_000, 10_000] {
        let bodies = random_bodies(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bodies, |b, bodies| {
            b.iter_batched(
                || bodies.clone(),
                |bodies| Quadtree::from_bodies(HALF_WIDTH, bodies).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn forces(c: &mut Criterion) {
    let mut group = c.benchmark_group("forces");
    for n in [100, 1_000, 10_000] {
        let bodies = random_bodies(n);
        let tree = Quadtree::from_bodies(HALF_WIDTH, bodies.iter().copied()).unwrap();

        group.bench_with_input(BenchmarkId::new("direct", n), &bodies, |b, bodies| {
            b.iter(|| direct_summation::forces(bodies))
        });
        group.bench_with_input(BenchmarkId::new("single", n), &tree, |b, tree| {
            b.iter(|| tree.forces(1.5, Execution::SingleThreaded))
        });
        group.bench_with_input(BenchmarkId::new("multithreaded", n), &tree, |b, tree| {
            b.iter(|| tree.forces(1.5, Execution::Multithreaded { num_threads: 4 }))
        });
        group.bench_with_input(BenchmarkId::new("rayon", n), &tree, |b, tree| {
            b.iter(|| tree.forces(1.5, Execution::RayonIter))
        });
    }
    group.finish();
}

fn theta(c: &mut Criterion) {
    let tree = Quadtree::from_bodies(HALF_WIDTH, random_bodies(5_000)).unwrap();

    let mut group = c.benchmark_group("theta");
    for theta in [0., 0.5, 1., 1.5, 2.] {
        group.bench_with_input(BenchmarkId::from_parameter(theta), &theta, |b, &theta| {
            b.iter(|| tree.forces(theta, Execution::SingleThreaded))
        });
    }
    group.finish();
}

criterion_group!(benches, insertion, forces, theta);
criterion_main!(benches);
