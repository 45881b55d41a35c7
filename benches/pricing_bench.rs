use criterion::{criterion_group, criterion_main, Criterion};
use rateforge::catalog::{ItemCatalog, ScenarioCategory, StaticCatalog};
use rateforge::coefficients::{CoefficientRow, STANDARD_DAYS};
use rateforge::config::ScenarioParams;
use rateforge::pricing::PricingEngine;
use std::hint::black_box;

fn setup_params(catalog: &StaticCatalog) -> ScenarioParams {
    let mut params = ScenarioParams::builder()
        .base_rate_adult_1_day(62.0)
        .increase_percentage(3.5)
        .promo_discount_percentage(15.0)
        .minor_discount_percentage(30.0)
        .rounding_value(0.5)
        .build();

    for (i, item) in catalog
        .items_by_category(ScenarioCategory::RentalMountain)
        .iter()
        .enumerate()
    {
        params
            .rental_base_prices
            .insert(item.id.clone(), 18.0 + i as f64 * 4.0);
    }
    params
}

fn criterion_benchmark(c: &mut Criterion) {
    let engine = PricingEngine::new(StaticCatalog::builtin());
    let params = setup_params(engine.catalog());

    // Standard day-counts with a decaying discount
    let coeffs: Vec<CoefficientRow> = STANDARD_DAYS
        .iter()
        .map(|&d| CoefficientRow::new(d, (d as f64 - 1.0) * 1.5))
        .collect();

    c.bench_function("lift table (12 rows)", |b| {
        b.iter(|| engine.calculate(black_box(&params), black_box(&coeffs), ScenarioCategory::Lift))
    });

    c.bench_function("rental mountain table (12 rows)", |b| {
        b.iter(|| {
            engine.calculate(
                black_box(&params),
                black_box(&coeffs),
                ScenarioCategory::RentalMountain,
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
