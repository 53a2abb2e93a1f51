use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cachedinterp::{CachingInterpolant, Kind};

fn setup(kind: Kind) -> (CachingInterpolant<f64>, Vec<f64>) {
    let knots: Vec<f64> = (0..64).map(|i| i as f64 / 63.0).collect();
    let values: Vec<f64> = knots.iter().map(|&x| (7.0 * x).sin()).collect();
    let queries: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.73) % 1.0).collect();
    let interp = CachingInterpolant::new(&knots, &values, kind).unwrap();
    (interp, queries)
}

fn bench_cached_vs_uncached(c: &mut Criterion) {
    for (name, kind) in [("linear", Kind::Linear), ("cubic", Kind::Cubic)] {
        let (mut interp, queries) = setup(kind);
        interp.evaluate(&queries).unwrap();
        c.bench_function(&format!("evaluate_{name}_10k_cached"), |b| {
            b.iter(|| black_box(interp.evaluate(black_box(&queries)).unwrap()));
        });

        let (mut interp, queries) = setup(kind);
        c.bench_function(&format!("evaluate_{name}_10k_uncached"), |b| {
            b.iter(|| {
                black_box(
                    interp
                        .evaluate_with(black_box(&queries), None, false)
                        .unwrap(),
                )
            });
        });
    }
}

fn bench_value_update_with_cache(c: &mut Criterion) {
    let (mut interp, queries) = setup(Kind::Cubic);
    interp.evaluate(&queries).unwrap();
    let new_values: Vec<f64> = interp.knots().iter().map(|&x| (3.0 * x).cos()).collect();
    c.bench_function("evaluate_cubic_10k_new_values_cached", |b| {
        b.iter(|| {
            black_box(
                interp
                    .evaluate_with(black_box(&queries), Some(black_box(&new_values)), true)
                    .unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_cached_vs_uncached, bench_value_update_with_cache);
criterion_main!(benches);
