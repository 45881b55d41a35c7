//! Date checks a scenario must pass before it can be closed.

use crate::config::{DateRange, ScenarioParams};
use chrono::{DateTime, NaiveDate};
use itertools::Itertools;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SeasonKind {
    Regular,
    Promo,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioDateError {
    #[error("The validity period needs both a start and an end date")]
    MissingValidity,

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("The validity period starts after it ends")]
    ValidityInverted,

    #[error("At least one {0} season period is required")]
    NoSeasons(SeasonKind),

    #[error("{kind} period '{id}' is missing a start or end date")]
    IncompleteRange { kind: SeasonKind, id: String },

    #[error("{kind} period '{id}' starts after it ends")]
    InvertedRange { kind: SeasonKind, id: String },

    #[error("{kind} periods '{first}' and '{second}' overlap")]
    OverlappingRanges {
        kind: SeasonKind,
        first: String,
        second: String,
    },

    #[error("Regular period '{regular}' overlaps promo period '{promo}'")]
    CrossOverlap { regular: String, promo: String },
}

struct Span<'a> {
    id: &'a str,
    start: NaiveDate,
    end: NaiveDate,
}

impl Span<'_> {
    fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Parses `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
/// Blank input is `Ok(None)`.
pub fn parse_day(value: &str) -> Result<Option<NaiveDate>, ScenarioDateError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(day) = value.parse::<NaiveDate>() {
        return Ok(Some(day));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| ScenarioDateError::InvalidDate(value.to_string()))
}

/// Returns the first problem found, in a fixed order: validity window,
/// empty season lists, broken ranges, overlaps within a list, then
/// regular/promo overlaps.
pub fn validate_scenario_dates(params: &ScenarioParams) -> Result<(), ScenarioDateError> {
    let from = parse_day(&params.valid_from)?;
    let to = parse_day(&params.valid_to)?;
    match (from, to) {
        (Some(from), Some(to)) if from > to => return Err(ScenarioDateError::ValidityInverted),
        (Some(_), Some(_)) => {}
        _ => return Err(ScenarioDateError::MissingValidity),
    }

    if params.regular_seasons.is_empty() {
        return Err(ScenarioDateError::NoSeasons(SeasonKind::Regular));
    }
    if params.promo_seasons.is_empty() {
        return Err(ScenarioDateError::NoSeasons(SeasonKind::Promo));
    }

    let regular = spans(&params.regular_seasons, SeasonKind::Regular)?;
    let promo = spans(&params.promo_seasons, SeasonKind::Promo)?;

    check_self_overlap(&regular, SeasonKind::Regular)?;
    check_self_overlap(&promo, SeasonKind::Promo)?;

    for (r, p) in regular.iter().cartesian_product(promo.iter()) {
        if r.overlaps(p) {
            return Err(ScenarioDateError::CrossOverlap {
                regular: r.id.to_string(),
                promo: p.id.to_string(),
            });
        }
    }

    Ok(())
}

/// `None` when the dates are valid, otherwise the message to show.
pub fn validation_message(params: &ScenarioParams) -> Option<String> {
    validate_scenario_dates(params).err().map(|e| e.to_string())
}

fn spans(ranges: &[DateRange], kind: SeasonKind) -> Result<Vec<Span<'_>>, ScenarioDateError> {
    ranges
        .iter()
        .map(|r| {
            let (Some(start), Some(end)) = (parse_day(&r.start)?, parse_day(&r.end)?) else {
                return Err(ScenarioDateError::IncompleteRange {
                    kind,
                    id: r.id.clone(),
                });
            };
            if start > end {
                return Err(ScenarioDateError::InvertedRange {
                    kind,
                    id: r.id.clone(),
                });
            }
            Ok(Span {
                id: &r.id,
                start,
                end,
            })
        })
        .collect()
}

fn check_self_overlap(spans: &[Span], kind: SeasonKind) -> Result<(), ScenarioDateError> {
    for (a, b) in spans.iter().tuple_combinations() {
        if a.overlaps(b) {
            return Err(ScenarioDateError::OverlappingRanges {
                kind,
                first: a.id.to_string(),
                second: b.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_timestamps() {
        let day = parse_day("2025-12-20T00:00:00Z").unwrap().unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
        assert_eq!(parse_day("   ").unwrap(), None);
        assert!(parse_day("20/12/2025").is_err());
    }

    #[test]
    fn touching_ranges_overlap() {
        let d = |s: &str| parse_day(s).unwrap().unwrap();
        let a = Span {
            id: "a",
            start: d("2025-12-01"),
            end: d("2025-12-10"),
        };
        let b = Span {
            id: "b",
            start: d("2025-12-10"),
            end: d("2025-12-20"),
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
