use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ev_curves::domain::SweepConfig;
use ev_curves::sim::{estimate_ev, exact_ev};
use ev_curves::sweep::{CancelToken, SweepPlan, run_sweep};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_estimate_ev(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_ev_200");
    for c_value in [1e-2_f64, 1e-4, 1e-6] {
        group.bench_with_input(BenchmarkId::from_parameter(c_value), &c_value, |b, &c_value| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| estimate_ev(black_box(c_value), 200, &mut rng).expect("valid C"))
        });
    }
    group.finish();
}

fn bench_exact_ev(c: &mut Criterion) {
    c.bench_function("exact_ev_1e-8", |b| {
        b.iter(|| exact_ev(black_box(1e-8)).expect("valid C"))
    });
}

fn bench_sweep_threads(c: &mut Criterion) {
    let config = SweepConfig {
        sample_count: 50,
        initial_c_step: 1e-5,
        precision_digits: 2,
        seed: Some(1),
        ..SweepConfig::default()
    };
    let plan: Vec<f64> = SweepPlan::from_config(&config).collect();

    let mut group = c.benchmark_group("sweep_1e-5_p2");
    group.sample_size(10);
    for threads in [1_usize, 2, 4, 8] {
        let config = SweepConfig {
            threads,
            ..config.clone()
        };
        group.bench_with_input(BenchmarkId::new("threads", threads), &config, |b, config| {
            b.iter(|| {
                let rows = run_sweep(plan.iter().copied(), config, &CancelToken::new())
                    .expect("sweep should succeed");
                black_box(rows)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_estimate_ev, bench_exact_ev, bench_sweep_threads);
criterion_main!(benches);
