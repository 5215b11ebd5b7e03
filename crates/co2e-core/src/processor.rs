//! Turns one raw record into an emissions data point, or a rejection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::extract::{extract_activity, extract_amount, extract_date, extract_location};
use crate::factor::Category;
use crate::matcher::match_activity;
use crate::record::Record;
use crate::registry::FactorRegistry;

/// Why a row was skipped. This set is closed; warnings are built from its
/// `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("missing activity")]
    MissingActivity,
    #[error("missing amount")]
    MissingAmount,
    #[error("no emission factor for activity: {activity}")]
    NoEmissionFactor { activity: String },
}

/// One successfully processed row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDataPoint<'a> {
    pub original_row: &'a Record,
    /// Canonical registry activity, not the raw input text.
    pub activity: String,
    pub category: Category,
    pub amount: f64,
    pub unit: String,
    pub emission_factor: f64,
    pub emissions: f64,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Process a single record against `registry` for `region`.
pub fn process_row<'a>(
    registry: &FactorRegistry,
    record: &'a Record,
    region: &str,
    regional_boost: f64,
) -> Result<ProcessedDataPoint<'a>, Rejection> {
    let activity = extract_activity(record).ok_or(Rejection::MissingActivity)?;
    let amount = extract_amount(record).ok_or(Rejection::MissingAmount)?;

    let found = match_activity(registry, &activity, region, regional_boost)
        .ok_or_else(|| Rejection::NoEmissionFactor {
            activity: activity.clone(),
        })?;

    let factor = found.factor;
    Ok(ProcessedDataPoint {
        original_row: record,
        activity: factor.activity.clone(),
        category: factor.category.clone(),
        amount,
        unit: factor.unit.clone(),
        emission_factor: factor.factor,
        emissions: amount * factor.factor,
        confidence: found.confidence,
        date: extract_date(record),
        location: extract_location(record),
    })
}
