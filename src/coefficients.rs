use crate::error::{RfError, RfResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Day-counts offered on the standard price list.
pub const STANDARD_DAYS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 30];

/// Discount percentage applied to the linear `days × base` price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    pub day: u32,
    pub value: f64,
}

impl CoefficientRow {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }

    pub fn factor(&self) -> f64 {
        1.0 - self.value / 100.0
    }
}

/// The standard table with no day-count discount applied yet.
pub fn standard_table() -> Vec<CoefficientRow> {
    STANDARD_DAYS
        .iter()
        .map(|&day| CoefficientRow::new(day, 0.0))
        .collect()
}

/// Reads a `day,value` CSV table. Row order is kept as written.
pub fn load_coefficients<R: Read>(reader: R) -> RfResult<Vec<CoefficientRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<CoefficientRow>().enumerate() {
        let row = result?;
        if row.day == 0 {
            return Err(RfError::Validation(format!(
                "Coefficient row {} has day 0; day-counts start at 1",
                idx + 1
            )));
        }
        rows.push(row);
    }

    debug!("Loaded {} coefficient rows", rows.len());
    Ok(rows)
}

/// Loads a coefficient table from `.csv` or `.json` (array of `{day, value}`).
pub fn load_coefficients_from_file<P: AsRef<Path>>(path: P) -> RfResult<Vec<CoefficientRow>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            let rows: Vec<CoefficientRow> = serde_json::from_reader(file)?;
            debug!("Loaded {} coefficient rows from {}", rows.len(), path.display());
            Ok(rows)
        }
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_coefficients(file),
        _ => Err(RfError::Config(format!(
            "Unsupported coefficient file '{}' (expected .csv or .json)",
            path.display()
        ))),
    }
}
