use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One price in its three renditions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    // Unrounded result of the discount chain
    pub raw: f64,
    // Rounded, customer-facing
    pub visual: f64,
    // visual / days, truncated to 4 decimals
    pub daily_system: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftRow {
    pub days: u32,
    pub coefficient: f64,

    pub adult_regular: PricePoint,
    pub adult_promo: PricePoint,
    pub minor_regular: PricePoint,
    pub minor_promo: PricePoint,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRow {
    pub days: u32,
    pub coefficient: f64,

    // Keyed by catalog item id
    pub rental_items: BTreeMap<String, PricePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRow {
    Lift(LiftRow),
    Rental(RentalRow),
}

impl PricingRow {
    pub fn days(&self) -> u32 {
        match self {
            Self::Lift(r) => r.days,
            Self::Rental(r) => r.days,
        }
    }

    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Lift(r) => r.coefficient,
            Self::Rental(r) => r.coefficient,
        }
    }

    pub fn as_lift(&self) -> Option<&LiftRow> {
        match self {
            Self::Lift(r) => Some(r),
            Self::Rental(_) => None,
        }
    }

    pub fn as_rental(&self) -> Option<&RentalRow> {
        match self {
            Self::Rental(r) => Some(r),
            Self::Lift(_) => None,
        }
    }

    /// Labelled price points in a stable order: the four lift tracks, or
    /// rental items sorted by id.
    pub fn labelled_prices(&self) -> Vec<(String, PricePoint)> {
        match self {
            Self::Lift(r) => vec![
                ("adult_regular".to_string(), r.adult_regular),
                ("adult_promo".to_string(), r.adult_promo),
                ("minor_regular".to_string(), r.minor_regular),
                ("minor_promo".to_string(), r.minor_promo),
            ],
            Self::Rental(r) => r
                .rental_items
                .iter()
                .map(|(id, p)| (id.clone(), *p))
                .collect(),
        }
    }
}
