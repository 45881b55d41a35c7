use crate::error::RfResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Product family a scenario is priced for.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioCategory {
    Lift,
    RentalMountain,
    RentalCity,
    RentalAlpino,
}

impl ScenarioCategory {
    pub fn is_rental(&self) -> bool {
        !matches!(self, Self::Lift)
    }
}

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingUnit {
    Day,
    Hour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalItem {
    pub id: String,
    pub label: String,
    pub pricing_unit: PricingUnit,
}

impl RentalItem {
    pub fn new(id: &str, label: &str, pricing_unit: PricingUnit) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            pricing_unit,
        }
    }
}

/// Read-only lookup of the rental items that belong to a category.
///
/// The engine only ever asks for the ordered item list of one category;
/// lift scenarios are expected to resolve to an empty slice.
pub trait ItemCatalog {
    fn items_by_category(&self, category: ScenarioCategory) -> &[RentalItem];
}

impl<T: ItemCatalog + ?Sized> ItemCatalog for &T {
    fn items_by_category(&self, category: ScenarioCategory) -> &[RentalItem] {
        (**self).items_by_category(category)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    items: HashMap<ScenarioCategory, Vec<RentalItem>>,
}

impl StaticCatalog {
    pub fn new(items: HashMap<ScenarioCategory, Vec<RentalItem>>) -> Self {
        Self { items }
    }

    /// The resort's standard rental line-up.
    pub fn builtin() -> Self {
        use PricingUnit::{Day, Hour};

        let mut items = HashMap::new();
        items.insert(
            ScenarioCategory::RentalMountain,
            vec![
                RentalItem::new("mnt_ski_compl", "Ski set, adult (ski + boots + poles)", Day),
                RentalItem::new("mnt_ski_jr_compl", "Ski set, junior (ski + boots + poles)", Day),
                RentalItem::new("mnt_snowboard_compl", "Snowboard set (board + boots)", Day),
                RentalItem::new("mnt_ski_only", "Skis only", Day),
                RentalItem::new("mnt_boots", "Ski boots", Day),
                RentalItem::new("mnt_helmet", "Helmet", Day),
                RentalItem::new("mnt_ski_hourly", "Ski set, hourly", Hour),
            ],
        );
        items.insert(
            ScenarioCategory::RentalCity,
            vec![
                RentalItem::new("cty_ski_compl", "Ski set, adult (ski + boots + poles)", Day),
                RentalItem::new("cty_ski_jr_compl", "Ski set, junior (ski + boots + poles)", Day),
                RentalItem::new("cty_snowboard_compl", "Snowboard set (board + boots)", Day),
                RentalItem::new("cty_boots", "Ski boots", Day),
                RentalItem::new("cty_helmet", "Helmet", Day),
            ],
        );
        items.insert(
            ScenarioCategory::RentalAlpino,
            vec![
                RentalItem::new("alp_touring_compl", "Ski touring set", Day),
                RentalItem::new("alp_skins", "Climbing skins", Day),
                RentalItem::new("alp_avalanche_kit", "Avalanche kit (beacon, shovel, probe)", Day),
                RentalItem::new("alp_snowshoes", "Snowshoes", Day),
                RentalItem::new("alp_snowshoes_hourly", "Snowshoes, hourly", Hour),
            ],
        );
        Self { items }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog: Self = serde_json::from_str(&content)?;
        debug!(
            "Loaded catalog from {} ({} categories)",
            path.as_ref().display(),
            catalog.items.len()
        );
        Ok(catalog)
    }

    /// Every category paired with its items, in declaration order.
    pub fn entries(&self) -> Vec<(ScenarioCategory, &[RentalItem])> {
        ScenarioCategory::iter()
            .map(|c| (c, self.items_by_category(c)))
            .collect()
    }
}

impl ItemCatalog for StaticCatalog {
    fn items_by_category(&self, category: ScenarioCategory) -> &[RentalItem] {
        self.items
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
