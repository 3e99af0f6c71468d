use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sim_runtime::{compute_ranking, create_companies, set_decisions, simulate_period, SeededNoise};

fn bench_period(c: &mut Criterion) {
    let mut roster = create_companies(20);
    for (i, company) in roster.iter_mut().enumerate() {
        let price = 40.0 + i as f64;
        set_decisions(company, price, 10_000.0, 7.0, 3_000.0, (i % 4) as u8);
    }
    let mut noise = SeededNoise::new(42);
    c.bench_function("period 20 companies", |b| {
        b.iter(|| {
            simulate_period(&mut roster, &mut noise).unwrap();
            black_box(compute_ranking(&roster))
        })
    });
}

criterion_group!(benches, bench_period);
criterion_main!(benches);
