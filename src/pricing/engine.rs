use super::rounding::{round_down, round_up, truncate4};
use super::types::{LiftRow, PricePoint, PricingRow, RentalRow};
use super::MINOR_PRICE_CAP;
use crate::catalog::{ItemCatalog, RentalItem, ScenarioCategory};
use crate::coefficients::CoefficientRow;
use crate::config::ScenarioParams;
use std::collections::BTreeMap;
use tracing::debug;

pub fn calculate<C: ItemCatalog + ?Sized>(
    params: &ScenarioParams,
    coefficients: &[CoefficientRow],
    category: ScenarioCategory,
    catalog: &C,
) -> Vec<PricingRow> {
    let rounding = params.effective_rounding();
    let increase = 1.0 + params.increase_percentage / 100.0;

    let rows: Vec<PricingRow> = if category.is_rental() {
        let items = catalog.items_by_category(category);
        coefficients
            .iter()
            .map(|c| PricingRow::Rental(rental_row(params, c, items, increase, rounding)))
            .collect()
    } else {
        coefficients
            .iter()
            .map(|c| PricingRow::Lift(lift_row(params, c, increase, rounding)))
            .collect()
    };

    debug!("Calculated {} {} rows", rows.len(), category);
    rows
}

fn lift_row(
    params: &ScenarioParams,
    coeff: &CoefficientRow,
    increase: f64,
    rounding: f64,
) -> LiftRow {
    let days = coeff.day;
    let base = params.base_rate_adult_1_day * increase;

    // 1. Raw chain
    let adult_regular_raw = discounted(base, coeff);
    let adult_promo_raw = adult_regular_raw * (1.0 - params.promo_discount_percentage / 100.0);
    let minor_factor = 1.0 - params.minor_discount_percentage / 100.0;
    let minor_regular_raw = adult_regular_raw * minor_factor;
    let minor_promo_raw = adult_promo_raw * minor_factor;

    // 2. Visual: adults round up, minors round down
    let adult_regular_visual = round_up(adult_regular_raw, rounding);
    let adult_promo_visual = round_up(adult_promo_raw, rounding);
    let minor_regular_visual = cap_minor(
        round_down(minor_regular_raw, rounding),
        adult_regular_visual,
        rounding,
    );
    let minor_promo_visual = cap_minor(
        round_down(minor_promo_raw, rounding),
        adult_promo_visual,
        rounding,
    );

    LiftRow {
        days,
        coefficient: coeff.value,
        adult_regular: point(adult_regular_raw, adult_regular_visual, days),
        adult_promo: point(adult_promo_raw, adult_promo_visual, days),
        minor_regular: point(minor_regular_raw, minor_regular_visual, days),
        minor_promo: point(minor_promo_raw, minor_promo_visual, days),
    }
}

fn rental_row(
    params: &ScenarioParams,
    coeff: &CoefficientRow,
    items: &[RentalItem],
    increase: f64,
    rounding: f64,
) -> RentalRow {
    let days = coeff.day;
    let mut rental_items = BTreeMap::new();

    // Hour-priced items reuse the day axis as hours.
    for item in items {
        let base_price = params
            .rental_base_prices
            .get(&item.id)
            .copied()
            .unwrap_or(0.0);
        let raw = discounted(base_price * increase, coeff);
        let visual = round_up(raw, rounding);
        rental_items.insert(item.id.clone(), point(raw, visual, days));
    }

    RentalRow {
        days,
        coefficient: coeff.value,
        rental_items,
    }
}

fn discounted(unit_price: f64, coeff: &CoefficientRow) -> f64 {
    let linear = unit_price * coeff.day as f64;
    linear * (1.0 - coeff.value / 100.0)
}

/// Checked after rounding: rounding alone can lift a compliant minor price
/// over the cap.
fn cap_minor(minor_visual: f64, adult_visual: f64, rounding: f64) -> f64 {
    let cap = MINOR_PRICE_CAP * adult_visual;
    if minor_visual > cap {
        round_down(cap, rounding)
    } else {
        minor_visual
    }
}

fn point(raw: f64, visual: f64, days: u32) -> PricePoint {
    PricePoint {
        raw,
        visual,
        daily_system: truncate4(visual / days as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn cap_rounds_the_cap_down() {
        // 0.7 * 10100 = 7070 -> 7000 on a 100 grid
        assert_eq!(cap_minor(10100.0, 10100.0, 100.0), 7000.0);
        assert_eq!(cap_minor(6900.0, 10100.0, 100.0), 6900.0);
    }

    #[test]
    fn lift_ignores_rental_prices() {
        let mut params = ScenarioParams::builder().base_rate_adult_1_day(100.0).build();
        params.rental_base_prices.insert("mnt_ski_compl".into(), 999.0);
        let rows = calculate(
            &params,
            &[CoefficientRow::new(1, 0.0)],
            ScenarioCategory::Lift,
            &StaticCatalog::builtin(),
        );
        assert!(rows[0].as_lift().is_some());
        assert_eq!(rows[0].as_lift().unwrap().adult_regular.visual, 100.0);
    }

    #[test]
    fn unknown_rental_item_prices_at_zero() {
        let params = ScenarioParams::default();
        let rows = calculate(
            &params,
            &[CoefficientRow::new(2, 0.0)],
            ScenarioCategory::RentalCity,
            &StaticCatalog::builtin(),
        );
        let rental = rows[0].as_rental().unwrap();
        assert!(rental.rental_items.values().all(|p| p.visual == 0.0));
        assert_eq!(
            rental.rental_items.len(),
            StaticCatalog::builtin()
                .items_by_category(ScenarioCategory::RentalCity)
                .len()
        );
    }
}
