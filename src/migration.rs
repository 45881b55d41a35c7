//! Upgrades scenario records saved before seasons became lists of ranges.
//!
//! Old records carried a single `regularStart`/`regularEnd` and
//! `promoStart`/`promoEnd` pair. They are folded into one-element
//! `regularSeasons`/`promoSeasons` lists with freshly generated ids.

use crate::config::{DateRange, ScenarioParams};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyScenarioParams {
    #[serde(flatten)]
    pub current: ScenarioParams,

    pub regular_start: Option<String>,
    pub regular_end: Option<String>,
    pub promo_start: Option<String>,
    pub promo_end: Option<String>,
}

impl LegacyScenarioParams {
    pub fn is_legacy(&self) -> bool {
        self.regular_start.is_some()
            || self.regular_end.is_some()
            || self.promo_start.is_some()
            || self.promo_end.is_some()
    }

    pub fn upgrade(self) -> ScenarioParams {
        let mut params = self.current;

        if params.regular_seasons.is_empty() {
            if let Some(range) = migrate_pair("regular", self.regular_start, self.regular_end) {
                debug!("Migrated legacy regular season {}", range.id);
                params.regular_seasons.push(range);
            }
        }
        if params.promo_seasons.is_empty() {
            if let Some(range) = migrate_pair("promo", self.promo_start, self.promo_end) {
                debug!("Migrated legacy promo season {}", range.id);
                params.promo_seasons.push(range);
            }
        }

        params
    }
}

fn migrate_pair(kind: &str, start: Option<String>, end: Option<String>) -> Option<DateRange> {
    let start = start.unwrap_or_default();
    let end = end.unwrap_or_default();
    if start.trim().is_empty() && end.trim().is_empty() {
        return None;
    }

    Some(DateRange {
        id: format!("legacy-{}-{}", kind, Uuid::new_v4()),
        start,
        end,
    })
}
