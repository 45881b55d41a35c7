use crate::error::RfResult;
use crate::pricing::PricingRow;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Visual price of one label on one day-count, before and after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDelta {
    pub days: u32,
    pub label: String,
    pub old: Option<f64>,
    pub new: Option<f64>,
}

impl PriceDelta {
    pub fn change_pct(&self) -> Option<f64> {
        match (self.old, self.new) {
            (Some(old), Some(new)) if old != 0.0 => Some((new - old) / old * 100.0),
            _ => None,
        }
    }
}

/// Pairs rows by `days`: rows of `new` first (in their order), then the
/// day-counts only `old` has.
pub fn compare_tables(old: &[PricingRow], new: &[PricingRow]) -> Vec<PriceDelta> {
    let mut deltas = Vec::new();

    for new_row in new {
        let old_row = old.iter().find(|r| r.days() == new_row.days());
        let old_prices = old_row.map(|r| r.labelled_prices()).unwrap_or_default();
        let new_prices = new_row.labelled_prices();

        for (label, point) in &new_prices {
            let old_visual = old_prices
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, p)| p.visual);
            deltas.push(PriceDelta {
                days: new_row.days(),
                label: label.clone(),
                old: old_visual,
                new: Some(point.visual),
            });
        }
        // Labels dropped in the new table
        for (label, point) in &old_prices {
            if !new_prices.iter().any(|(l, _)| l == label) {
                deltas.push(PriceDelta {
                    days: new_row.days(),
                    label: label.clone(),
                    old: Some(point.visual),
                    new: None,
                });
            }
        }
    }

    for old_row in old {
        if new.iter().any(|r| r.days() == old_row.days()) {
            continue;
        }
        for (label, point) in old_row.labelled_prices() {
            deltas.push(PriceDelta {
                days: old_row.days(),
                label,
                old: Some(point.visual),
                new: None,
            });
        }
    }

    deltas
}

/// Loads a saved pricing table (a JSON array of rows).
pub fn load_table<P: AsRef<Path>>(path: P) -> RfResult<Vec<PricingRow>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
