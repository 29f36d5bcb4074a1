use criterion::{Criterion, criterion_group, criterion_main};
use logit_prior_check::sweep::{Sweep, SweepConfig};
use std::time::Duration;

fn bench_sweep(cr: &mut Criterion) {
    // Reference grid, with and without group-level scales
    let group_grids: [Vec<f64>; 2] = [vec![], vec![0.5, 1.0, 1.5]];

    for groups in &group_grids {
        let sweep = Sweep::new(SweepConfig::default().with_group_sds(groups.clone()));
        let bench_name = format!("sweep_cells{}", sweep.grid().len());
        cr.bench_function(&bench_name, |bench| {
            bench.iter(|| sweep.run().unwrap());
        });
    }
}

#[cfg(feature = "rayon")]
fn bench_sweep_par(cr: &mut Criterion) {
    let group_grids: [Vec<f64>; 2] = [vec![], vec![0.5, 1.0, 1.5]];

    for groups in &group_grids {
        let sweep = Sweep::new(SweepConfig::default().with_group_sds(groups.clone()));
        let bench_name = format!("sweep_par_cells{}", sweep.grid().len());
        cr.bench_function(&bench_name, |bench| {
            bench.iter(|| sweep.run_par().unwrap());
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(10);
    targets = bench_sweep
);

// Only include parallel benchmarks if rayon feature is enabled
#[cfg(feature = "rayon")]
criterion_group!(
    name = parallel_benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(10);
    targets = bench_sweep_par
);

#[cfg(not(feature = "rayon"))]
criterion_main!(benches);

#[cfg(feature = "rayon")]
criterion_main!(benches, parallel_benches);
