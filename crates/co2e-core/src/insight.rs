//! Data-quality warnings and reduction recommendations.

use crate::aggregate::Breakdown;
use crate::config::EngineConfig;
use crate::factor::Category;
use crate::processor::Rejection;

pub const LOW_CONFIDENCE_WARNING: &str =
    "Low confidence in calculations due to unclear activity descriptions";

pub const OFFSET_RECOMMENDATION: &str =
    "Consider purchasing carbon offsets to achieve carbon neutrality.";

pub const LOW_EMISSIONS_RECOMMENDATION: &str = "Great job! Your emissions are relatively low. \
     Continue monitoring and look for further reduction opportunities.";

/// Row accounting fed to the warning rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingStats {
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub average_confidence: f64,
}

/// Warnings in fixed order: per-row rejections (input order), skipped-share,
/// low confidence.
pub fn generate_warnings(
    rejections: &[(usize, Rejection)],
    stats: &ProcessingStats,
    config: &EngineConfig,
) -> Vec<String> {
    let mut warnings: Vec<String> = rejections
        .iter()
        .map(|(index, reason)| format!("Row {}: {}", index + 1, reason))
        .collect();

    if stats.skipped_rows as f64 > stats.total_rows as f64 * config.skipped_warning_ratio {
        warnings.push(format!(
            "{} rows were skipped due to insufficient data",
            stats.skipped_rows
        ));
    }

    if stats.average_confidence < config.low_confidence_threshold {
        warnings.push(LOW_CONFIDENCE_WARNING.to_string());
    }

    warnings
}

fn category_recommendation(category: &Category, percent: f64) -> Option<String> {
    let message = match category {
        Category::Energy => format!(
            "Energy accounts for {percent:.1}% of emissions. \
             Consider switching to renewable energy sources."
        ),
        Category::Transport => format!(
            "Transport accounts for {percent:.1}% of emissions. \
             Consider electric vehicles or public transport."
        ),
        Category::Waste => format!(
            "Waste accounts for {percent:.1}% of emissions. \
             Implement better recycling and waste reduction programs."
        ),
        Category::Industrial => format!(
            "Industrial processes account for {percent:.1}% of emissions. \
             Look into process optimization and cleaner technologies."
        ),
        Category::Agriculture => format!(
            "Agriculture accounts for {percent:.1}% of emissions. \
             Consider sustainable farming practices."
        ),
        Category::Other(_) => return None,
    };
    Some(message)
}

/// Recommendations driven by category shares and total volume. Never empty.
pub fn generate_recommendations(breakdown: &Breakdown, config: &EngineConfig) -> Vec<String> {
    let total = breakdown.category_total();
    let mut recommendations = Vec::new();

    if total > 0.0 {
        for (category, emissions) in &breakdown.by_category {
            let percent = emissions / total * 100.0;
            if percent > config.category_share_percent {
                recommendations.extend(category_recommendation(category, percent));
            }
        }
    }

    if total > config.offset_threshold_kg {
        recommendations.push(OFFSET_RECOMMENDATION.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(LOW_EMISSIONS_RECOMMENDATION.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_rows: usize, skipped_rows: usize, average_confidence: f64) -> ProcessingStats {
        ProcessingStats {
            total_rows,
            skipped_rows,
            average_confidence,
        }
    }

    fn breakdown(entries: &[(Category, f64)]) -> Breakdown {
        Breakdown {
            by_activity: Default::default(),
            by_category: entries.iter().cloned().collect(),
        }
    }

    // -----------------------------------------------------------------------
    // Warnings
    // -----------------------------------------------------------------------

    #[test]
    fn row_warnings_use_one_based_index() {
        let rejections = vec![
            (0, Rejection::MissingActivity),
            (4, Rejection::NoEmissionFactor {
                activity: "paper".to_string(),
            }),
        ];
        let warnings = generate_warnings(&rejections, &stats(50, 2, 0.9), &EngineConfig::default());
        assert_eq!(
            warnings,
            [
                "Row 1: missing activity",
                "Row 5: no emission factor for activity: paper",
            ]
        );
    }

    #[test]
    fn skipped_warning_needs_more_than_ten_percent() {
        let config = EngineConfig::default();
        let at_limit = generate_warnings(&[], &stats(100, 10, 0.9), &config);
        assert!(at_limit.is_empty());

        let over = generate_warnings(&[], &stats(100, 11, 0.9), &config);
        assert_eq!(over, ["11 rows were skipped due to insufficient data"]);
    }

    #[test]
    fn low_confidence_warning_comes_last() {
        let rejections = vec![(0, Rejection::MissingAmount)];
        let warnings = generate_warnings(&rejections, &stats(1, 1, 0.0), &EngineConfig::default());
        assert_eq!(
            warnings,
            [
                "Row 1: missing amount",
                "1 rows were skipped due to insufficient data",
                LOW_CONFIDENCE_WARNING,
            ]
        );
    }

    #[test]
    fn empty_input_only_warns_about_confidence() {
        let warnings = generate_warnings(&[], &stats(0, 0, 0.0), &EngineConfig::default());
        assert_eq!(warnings, [LOW_CONFIDENCE_WARNING]);
    }

    // -----------------------------------------------------------------------
    // Recommendations
    // -----------------------------------------------------------------------

    #[test]
    fn dominant_category_gets_its_template() {
        let b = breakdown(&[(Category::Energy, 4000.0), (Category::Transport, 1000.0)]);
        let recs = generate_recommendations(&b, &EngineConfig::default());
        assert_eq!(
            recs,
            ["Energy accounts for 80.0% of emissions. \
              Consider switching to renewable energy sources."]
        );
    }

    #[test]
    fn several_categories_can_fire() {
        let b = breakdown(&[
            (Category::Waste, 40.0),
            (Category::Industrial, 35.0),
            (Category::Agriculture, 25.0),
        ]);
        let recs = generate_recommendations(&b, &EngineConfig::default());
        assert_eq!(recs.len(), 2);
        assert!(recs[0].starts_with("Waste accounts for 40.0%"));
        assert!(recs[1].starts_with("Industrial processes account for 35.0%"));
    }

    #[test]
    fn other_categories_have_no_template() {
        let b = breakdown(&[(Category::Other("Refrigerants".to_string()), 10.0)]);
        let recs = generate_recommendations(&b, &EngineConfig::default());
        assert_eq!(recs, [LOW_EMISSIONS_RECOMMENDATION]);
    }

    #[test]
    fn large_totals_suggest_offsets() {
        let b = breakdown(&[
            (Category::Energy, 6000.0),
            (Category::Transport, 6000.0),
        ]);
        let recs = generate_recommendations(&b, &EngineConfig::default());
        assert_eq!(recs.len(), 3);
        assert!(recs[1].starts_with("Transport accounts for 50.0%"));
        assert_eq!(recs[2], OFFSET_RECOMMENDATION);
    }

    #[test]
    fn offsets_alone_suppress_the_fallback() {
        let b = breakdown(&[
            (Category::Other("A".to_string()), 6000.0),
            (Category::Other("B".to_string()), 6000.0),
        ]);
        let recs = generate_recommendations(&b, &EngineConfig::default());
        assert_eq!(recs, [OFFSET_RECOMMENDATION]);
    }

    #[test]
    fn empty_breakdown_gets_the_fallback() {
        let recs = generate_recommendations(&Breakdown::default(), &EngineConfig::default());
        assert_eq!(recs, [LOW_EMISSIONS_RECOMMENDATION]);
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = EngineConfig {
            category_share_percent: 90.0,
            offset_threshold_kg: 100.0,
            ..EngineConfig::default()
        };
        let b = breakdown(&[(Category::Energy, 400.0), (Category::Waste, 100.0)]);
        assert_eq!(generate_recommendations(&b, &config), [OFFSET_RECOMMENDATION]);
    }
}
