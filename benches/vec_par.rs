use criterion::{Criterion, black_box, criterion_group, criterion_main};
use logit_prior_check::{EffectDraw, EffectSimulator, PriorConfig};
use rand::{SeedableRng, rngs::StdRng};

fn simulator() -> EffectSimulator {
    EffectSimulator::new(PriorConfig::reference(1.5).unwrap()).unwrap()
}

fn bench_effects_deterministic(c: &mut Criterion) {
    let n = 100_000;
    let sim = simulator();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("draw_vec_par_deterministic", |bencher| {
        bencher.iter(|| {
            let out = sim.draw_vec_par_deterministic(&mut rng, n).unwrap();
            black_box(out);
        });
    });
}

fn bench_effects_vec_par(c: &mut Criterion) {
    let n = 100_000;
    let sim = simulator();
    c.bench_function("draw_vec_par", |bencher| {
        bencher.iter(|| {
            let out = sim.draw_vec_par(n).unwrap();
            black_box(out);
        });
    });
}

fn bench_effects_no_par(c: &mut Criterion) {
    let n: usize = 100_000;
    let sim = simulator();
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("draw_vec", |bencher| {
        bencher.iter(|| {
            let out = sim.draw_vec(&mut rng, n).unwrap();
            black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_effects_deterministic,
    bench_effects_vec_par,
    bench_effects_no_par
);
criterion_main!(benches);
