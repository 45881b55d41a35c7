pub mod engine;
pub mod rounding;
pub mod types;

pub use self::rounding::{round_down, round_up, truncate4};
pub use self::types::{LiftRow, PricePoint, PricingRow, RentalRow};
use crate::catalog::{ItemCatalog, ScenarioCategory};
use crate::coefficients::CoefficientRow;
use crate::config::ScenarioParams;

/// Minor tickets may never exceed this share of the adult ticket.
pub const MINOR_PRICE_CAP: f64 = 0.70;

/// Price calculator bound to a rental catalog. Holds nothing else.
pub struct PricingEngine<C> {
    catalog: C,
}

impl<C: ItemCatalog> PricingEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn calculate(
        &self,
        params: &ScenarioParams,
        coefficients: &[CoefficientRow],
        category: ScenarioCategory,
    ) -> Vec<PricingRow> {
        engine::calculate(params, coefficients, category, &self.catalog)
    }
}

/// One-shot form of [`PricingEngine::calculate`].
pub fn calculate_scenario_prices<C: ItemCatalog + ?Sized>(
    params: &ScenarioParams,
    coefficients: &[CoefficientRow],
    category: ScenarioCategory,
    catalog: &C,
) -> Vec<PricingRow> {
    engine::calculate(params, coefficients, category, catalog)
}
