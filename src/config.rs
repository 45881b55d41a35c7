use crate::error::RfResult;
use crate::migration::LegacyScenarioParams;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use typed_builder::TypedBuilder;

pub const DEFAULT_ROUNDING_VALUE: f64 = 100.0;

/// A named sub-period of the season (regular or promo).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub id: String,
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(id: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioParams {
    // === LIFT ===
    #[arg(long, default_value_t = 0.0)]
    #[builder(default)]
    pub base_rate_adult_1_day: f64,

    // === ADJUSTMENTS (percent) ===
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    #[builder(default)]
    pub increase_percentage: f64,
    #[arg(long, default_value_t = 0.0)]
    #[builder(default)]
    pub promo_discount_percentage: f64,
    #[arg(long, default_value_t = 0.0)]
    #[builder(default)]
    pub minor_discount_percentage: f64,

    #[arg(long, default_value_t = DEFAULT_ROUNDING_VALUE)]
    #[builder(default = DEFAULT_ROUNDING_VALUE)]
    pub rounding_value: f64,

    // === VALIDITY ===
    #[arg(long, default_value = "")]
    #[builder(default, setter(into))]
    pub valid_from: String,
    #[arg(long, default_value = "")]
    #[builder(default, setter(into))]
    pub valid_to: String,

    #[arg(skip)]
    #[builder(default)]
    pub regular_seasons: Vec<DateRange>,
    #[arg(skip)]
    #[builder(default)]
    pub promo_seasons: Vec<DateRange>,

    // === RENTAL ===
    #[arg(skip)]
    #[builder(default)]
    pub rental_base_prices: HashMap<String, f64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScenarioParams {
    /// Rounding multiple the engine actually uses: non-positive (or NaN)
    /// values fall back to the default.
    pub fn effective_rounding(&self) -> f64 {
        if self.rounding_value > 0.0 {
            self.rounding_value
        } else {
            DEFAULT_ROUNDING_VALUE
        }
    }

    /// Parses a stored scenario, upgrading legacy single-range records.
    pub fn from_json_str(content: &str) -> RfResult<Self> {
        let legacy: LegacyScenarioParams = serde_json::from_str(content)?;
        Ok(legacy.upgrade())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!("Loading scenario parameters from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Copies onto `self` only the parameters the user typed on the
    /// command line, leaving file-loaded values untouched otherwise.
    pub fn merge_from_cli(&mut self, cli_params: &ScenarioParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(base_rate_adult_1_day, "base_rate_adult_1_day");
        update_if_present!(increase_percentage, "increase_percentage");
        update_if_present!(promo_discount_percentage, "promo_discount_percentage");
        update_if_present!(minor_discount_percentage, "minor_discount_percentage");
        update_if_present!(rounding_value, "rounding_value");
        update_if_present!(valid_from, "valid_from");
        update_if_present!(valid_to, "valid_to");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keys_are_camel_case() {
        let params = ScenarioParams::builder()
            .base_rate_adult_1_day(52.0)
            .valid_from("2025-12-01")
            .build();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["baseRateAdult1Day"], 52.0);
        assert_eq!(json["validFrom"], "2025-12-01");
        assert_eq!(json["roundingValue"], 100.0);
        assert!(json["rentalBasePrices"].is_object());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params = ScenarioParams::from_json_str(r#"{"baseRateAdult1Day": 45}"#).unwrap();
        assert_eq!(params.base_rate_adult_1_day, 45.0);
        assert_eq!(params.rounding_value, DEFAULT_ROUNDING_VALUE);
        assert!(params.regular_seasons.is_empty());
    }

    #[test]
    fn effective_rounding_falls_back() {
        let mut params = ScenarioParams::default();
        params.rounding_value = 0.0;
        assert_eq!(params.effective_rounding(), 100.0);
        params.rounding_value = -5.0;
        assert_eq!(params.effective_rounding(), 100.0);
        params.rounding_value = f64::NAN;
        assert_eq!(params.effective_rounding(), 100.0);
        params.rounding_value = 50.0;
        assert_eq!(params.effective_rounding(), 50.0);
    }
}
