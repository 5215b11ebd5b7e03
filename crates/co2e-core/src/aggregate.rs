//! Per-activity and per-category emission totals.
//!
//! Every bucket is rounded to two decimals on its own. Summing the rounded
//! buckets can therefore differ from the rounded grand total by a few
//! hundredths; both figures are kept as-is.

use std::collections::BTreeMap;

use crate::factor::Category;
use crate::processor::ProcessedDataPoint;

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Grouped emission sums.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    pub by_activity: BTreeMap<String, f64>,
    pub by_category: BTreeMap<Category, f64>,
}

impl Breakdown {
    /// Sum of the (already rounded) category buckets.
    pub fn category_total(&self) -> f64 {
        self.by_category.values().sum()
    }
}

pub fn aggregate(points: &[ProcessedDataPoint<'_>]) -> Breakdown {
    let mut by_activity: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();

    for point in points {
        *by_activity.entry(point.activity.clone()).or_default() += point.emissions;
        *by_category.entry(point.category.clone()).or_default() += point.emissions;
    }

    by_activity.values_mut().for_each(|v| *v = round2(*v));
    by_category.values_mut().for_each(|v| *v = round2(*v));

    Breakdown {
        by_activity,
        by_category,
    }
}
